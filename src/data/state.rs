//! Chart state and the reducer that drives it.
//!
//! UI code never mutates [`ChartState`] directly: every interaction becomes an
//! [`Action`] and goes through [`reduce`]. The shell then asks
//! [`ChartState::take_dirty`] whether a new frame must be rendered.

use std::sync::Arc;

use super::filter::{FilterState, RangeBounds};
use super::record::{Metric, Record};

/// A user interaction, already decoded from the widget that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The range control is initialised; draw the full dataset once.
    SliderReady,
    SetMetric(Metric),
    SetYearRange { from: i32, to: i32 },
    /// A marker was clicked; show the record with this year in the detail panel.
    SelectRecord(i32),
    ClearSelection,
    Hover(Option<i32>),
}

#[derive(Debug, Clone)]
pub struct ChartState {
    dataset: Arc<[Record]>,
    filter: FilterState,
    derived: Vec<Record>,
    selected: Option<i32>,
    hovered: Option<i32>,
    ready: bool,
    dirty: bool,
}

impl Default for ChartState {
    /// An empty chart; placeholder while a state is moved through [`reduce`].
    fn default() -> Self {
        Self::new(Vec::new(), Metric::default(), RangeBounds::default())
    }
}

impl ChartState {
    /// Build the initial state. `records` is sorted by year here, so callers
    /// may pass rows in any order.
    pub fn new(mut records: Vec<Record>, metric: Metric, bounds: RangeBounds) -> Self {
        records.sort_by_key(|r| r.year);
        let dataset: Arc<[Record]> = records.into();
        let derived = dataset.to_vec();
        Self {
            dataset,
            filter: FilterState::new(metric, bounds),
            derived,
            selected: None,
            hovered: None,
            ready: false,
            dirty: false,
        }
    }

    /// The full, year-sorted dataset.
    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// Records passing the active year range.
    pub fn derived(&self) -> &[Record] {
        &self.derived
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn metric(&self) -> Metric {
        self.filter.metric
    }

    /// `(min, max)` year of the full dataset; the range control's limits.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        Some((self.dataset.first()?.year, self.dataset.last()?.year))
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record shown in the detail panel. Looked up in the full dataset so the
    /// card survives a range change that filters the record out.
    pub fn selected_record(&self) -> Option<&Record> {
        let year = self.selected?;
        self.dataset.iter().find(|r| r.year == year)
    }

    pub fn hovered_record(&self) -> Option<&Record> {
        let year = self.hovered?;
        self.derived.iter().find(|r| r.year == year)
    }

    /// Returns `true` once per state change that requires a re-render.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn recompute_derived(&mut self) {
        self.derived = self.filter.apply(&self.dataset);
    }
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(mut state: ChartState, action: Action) -> ChartState {
    match action {
        Action::SliderReady => {
            state.filter.clear_year_range();
            state.recompute_derived();
            state.ready = true;
            state.dirty = true;
        }
        Action::SetMetric(metric) => {
            state.filter.set_metric(metric);
            state.dirty = state.ready;
        }
        Action::SetYearRange { from, to } => {
            state.filter.set_year_range(from, to);
            state.recompute_derived();
            if state.hovered.is_some() && state.hovered_record().is_none() {
                state.hovered = None;
            }
            state.dirty = state.ready;
        }
        Action::SelectRecord(year) => {
            if state.dataset.iter().any(|r| r.year == year) {
                state.selected = Some(year);
            }
        }
        Action::ClearSelection => state.selected = None,
        Action::Hover(year) => state.hovered = year,
    }
    state
}
