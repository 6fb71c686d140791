//! Filter state: the selected metric and the active year range.

use super::record::{Metric, Record};

/// Whether the range endpoints themselves pass the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeBounds {
    /// `from < year < to`: the years under the slider handles are excluded.
    #[default]
    Exclusive,
    /// `from <= year <= to`.
    Inclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
    pub bounds: RangeBounds,
}

impl YearRange {
    /// A range with `from <= to`; reversed handles are swapped.
    pub fn new(from: i32, to: i32, bounds: RangeBounds) -> Self {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        Self { from, to, bounds }
    }

    pub fn contains(&self, year: i32) -> bool {
        match self.bounds {
            RangeBounds::Exclusive => self.from < year && year < self.to,
            RangeBounds::Inclusive => self.from <= year && year <= self.to,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub metric: Metric,
    /// `None` until the range control reports a change: the full dataset.
    pub year_range: Option<YearRange>,
    pub bounds: RangeBounds,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Metric::default(), RangeBounds::default())
    }
}

impl FilterState {
    pub fn new(metric: Metric, bounds: RangeBounds) -> Self {
        Self {
            metric,
            year_range: None,
            bounds,
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    pub fn set_year_range(&mut self, from: i32, to: i32) {
        self.year_range = Some(YearRange::new(from, to, self.bounds));
    }

    pub fn clear_year_range(&mut self) {
        self.year_range = None;
    }

    /// The derived view of a year-sorted dataset. The input is never modified.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        match self.year_range {
            Some(range) => records
                .iter()
                .filter(|r| range.contains(r.year))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}
