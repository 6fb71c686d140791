//! Configuration for the chart window.

use std::path::PathBuf;
use std::time::Duration;

use crate::data::filter::RangeBounds;
use crate::data::loader::Coercion;
use crate::data::record::Metric;
use crate::data::render::ChartStyle;
use crate::data::scale::ChartLayout;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off. All default to `true`.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the export menu in the top bar.
    pub export: bool,
    /// Show the detail side panel (clicks still select records when hidden).
    pub detail_panel: bool,
    /// Show marker tooltips on hover.
    pub tooltips: bool,
    /// Show the plot grid.
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            export: true,
            detail_panel: true,
            tooltips: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `data_path`      | CSV file to load |
/// | `coercion`       | Handling of non-numeric cells |
/// | `metric`         | Metric selected at start-up |
/// | `range_bounds`   | Whether range endpoints pass the year filter |
/// | `transition`     | Duration shared by every animated change |
/// | `style`/`layout` | Appearance of the plot and of exported SVG/PNG |
/// | `features`       | Toggle individual UI features on/off |
#[derive(Clone)]
pub struct ChartConfig {
    // ── Data ─────────────────────────────────────────────────────────────────
    pub data_path: PathBuf,
    pub coercion: Coercion,

    // ── Filter ───────────────────────────────────────────────────────────────
    pub metric: Metric,
    pub range_bounds: RangeBounds,

    // ── Animation / appearance ───────────────────────────────────────────────
    pub transition: Duration,
    pub style: ChartStyle,
    /// Size used for SVG and PNG export.
    pub layout: ChartLayout,
    pub features: FeatureFlags,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/fifa-world-cup.csv"),
            coercion: Coercion::Lenient,
            metric: Metric::Goals,
            range_bounds: RangeBounds::Exclusive,
            transition: Duration::from_millis(800),
            style: ChartStyle::default(),
            layout: ChartLayout::default(),
            features: FeatureFlags::default(),
            title: "FIFA World Cup".to_string(),
            native_options: None,
        }
    }
}
