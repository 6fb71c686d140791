//! Frame construction: a pure function from chart state to render instructions.

use egui::Color32;

use super::curve::NaturalSpline;
use super::record::{Metric, Record};
use super::scale::Scales;
use super::state::ChartState;

/// Visual constants shared by the egui view and the SVG export.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub line_color: Color32,
    pub line_width: f32,
    pub marker_radius: f64,
    pub marker_stroke: Color32,
    pub marker_stroke_width: f32,
    pub marker_fill: Color32,
    /// Approximate number of y-axis ticks.
    pub y_tick_count: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: Color32::from_rgb(0xdc, 0x14, 0x3c),
            line_width: 1.5,
            marker_radius: 7.0,
            marker_stroke: Color32::from_rgb(0xdc, 0x14, 0x3c),
            marker_stroke_width: 2.0,
            marker_fill: Color32::WHITE,
            y_tick_count: 10,
        }
    }
}

/// One point marker, keyed by the record's year.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub key: i32,
    /// `(year, value)` in data space.
    pub center: [f64; 2],
    pub radius: f64,
    pub tooltip: String,
}

/// Everything needed to draw one chart state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartFrame {
    pub metric: Metric,
    pub scales: Scales,
    pub x_ticks: Vec<i32>,
    pub y_ticks: Vec<f64>,
    /// Spline through the finite points, in data space.
    pub line: NaturalSpline,
    pub markers: Vec<MarkerSpec>,
}

impl ChartFrame {
    pub fn marker(&self, key: i32) -> Option<&MarkerSpec> {
        self.markers.iter().find(|m| m.key == key)
    }
}

/// Tooltip body for a marker: `"<METRIC>: <value> | <edition>"`.
pub fn tooltip_text(metric: Metric, record: &Record) -> String {
    format!("{}: {} | {}", metric, metric.value(record), record.edition)
}

/// Tooltip for the record the pointer rests on, as tracked by the state.
pub fn hover_tooltip(state: &ChartState) -> Option<String> {
    state
        .hovered_record()
        .map(|r| tooltip_text(state.metric(), r))
}

/// Build the frame for the derived dataset and selected metric.
pub fn render(state: &ChartState, style: &ChartStyle) -> ChartFrame {
    render_records(state.derived(), state.metric(), style)
}

pub fn render_records(records: &[Record], metric: Metric, style: &ChartStyle) -> ChartFrame {
    let scales = Scales::compute(records, metric);

    let drawable: Vec<&Record> = records
        .iter()
        .filter(|r| metric.value(r).is_finite())
        .collect();
    if drawable.len() < records.len() {
        tracing::debug!(
            skipped = records.len() - drawable.len(),
            %metric,
            "records without a finite value are not drawn"
        );
    }

    let points: Vec<[f64; 2]> = drawable
        .iter()
        .map(|r| [r.year as f64, metric.value(r)])
        .collect();
    let markers = drawable
        .iter()
        .zip(points.iter())
        .map(|(r, p)| MarkerSpec {
            key: r.year,
            center: *p,
            radius: style.marker_radius,
            tooltip: tooltip_text(metric, r),
        })
        .collect();

    ChartFrame {
        metric,
        x_ticks: scales.x_ticks(),
        y_ticks: scales.y_ticks(style.y_tick_count),
        scales,
        line: NaturalSpline::through(&points),
        markers,
    }
}
