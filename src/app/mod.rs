//! Application shell.
//!
//! | Sub-module     | Responsibility |
//! | -------------- | -------------- |
//! | [`chart_app`]  | [`ChartApp`] (eframe): panel layout, action dispatch, re-render |
//! | [`run`]        | [`run_chart()`] entry point |

mod chart_app;
mod run;

pub use chart_app::ChartApp;
pub use run::run_chart;
