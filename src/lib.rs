//! cupchart crate root: re-exports and module wiring.
//!
//! An animated line chart of FIFA World Cup statistics built on egui/eframe:
//! - `data`: records, CSV loading, filter state, reducer, scales, frame
//!   rendering, transitions, detail card and export
//! - `panels`: egui panels (controls, plot, detail card, export menu)
//! - `app`: the eframe application and run helpers
//! - `config`: shared configuration

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_chart, ChartApp};
pub use config::{ChartConfig, FeatureFlags};
pub use data::filter::{FilterState, RangeBounds, YearRange};
pub use data::loader::{load_records, parse_records, Coercion, LoadError};
pub use data::record::{Metric, Record};
pub use data::render::{render, ChartFrame, ChartStyle};
pub use data::state::{reduce, Action, ChartState};
