use super::panel_trait::{Panel, PanelState};
use crate::data::export;
use crate::data::view::ChartView;
use egui::Ui;

pub struct ExportPanel {
    pub state: PanelState,
}
impl Default for ExportPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Export", "📤"),
        }
    }
}

impl ExportPanel {
    pub const MENU_LABEL: &'static str = "🗁 Export";
    pub const SVG_LABEL: &'static str = "🖼 Chart as SVG...";
    pub const PNG_LABEL: &'static str = "🖼 Chart as PNG...";
    pub const CSV_LABEL: &'static str = "🖹 Data as CSV...";
    pub const JSON_LABEL: &'static str = "🖹 Data as JSON...";
}

fn save_dialog(extension: &str, filter: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(format!("{}.{extension}", export::default_file_stem()))
        .add_filter(filter, &[extension])
        .save_file()
}

impl Panel for ExportPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui, view: &mut ChartView<'_>) {
        let config = view.config;
        let frame = view.frame;
        let records = view.state.derived();

        ui.menu_button(Self::MENU_LABEL, |ui| {
            if ui
                .add_enabled(frame.is_some(), egui::Button::new(Self::SVG_LABEL))
                .on_hover_text("Save the chart as it looks after the current transition")
                .clicked()
            {
                if let (Some(frame), Some(path)) = (frame, save_dialog("svg", "SVG")) {
                    match export::write_svg(&path, frame, &config.layout, &config.style) {
                        Ok(()) => tracing::info!(path = %path.display(), "exported SVG"),
                        Err(e) => tracing::error!(error = %e, "failed to export SVG"),
                    }
                }
                ui.close();
            }
            if ui
                .add_enabled(frame.is_some(), egui::Button::new(Self::PNG_LABEL))
                .clicked()
            {
                if let (Some(frame), Some(path)) = (frame, save_dialog("png", "PNG")) {
                    let svg = export::svg_document(frame, &config.layout, &config.style);
                    match export::render_png(&svg, &path) {
                        Ok(()) => tracing::info!(path = %path.display(), "exported PNG"),
                        Err(e) => tracing::error!(error = %e, "failed to export PNG"),
                    }
                }
                ui.close();
            }
            ui.separator();
            if ui
                .button(Self::CSV_LABEL)
                .on_hover_text("Records inside the selected year range")
                .clicked()
            {
                if let Some(path) = save_dialog("csv", "CSV") {
                    if let Err(e) = export::write_records_csv_path(&path, records) {
                        tracing::error!(error = %e, "failed to export CSV");
                    }
                }
                ui.close();
            }
            if ui.button(Self::JSON_LABEL).clicked() {
                if let Some(path) = save_dialog("json", "JSON") {
                    if let Err(e) = export::write_records_json_path(&path, records) {
                        tracing::error!(error = %e, "failed to export JSON");
                    }
                }
                ui.close();
            }
        });
    }
}
