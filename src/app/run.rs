//! Top-level entry points for running the chart as a native window.

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::record::Record;

use super::chart_app::ChartApp;

/// Open the chart window for already-loaded `records`. Blocks until the
/// window is closed.
pub fn run_chart(records: Vec<Record>, mut cfg: ChartConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 820.0));
    }

    let app = ChartApp::new(records, cfg);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
