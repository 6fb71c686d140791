use egui::{Color32, RichText, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::detail::DetailCard;
use crate::data::state::Action;
use crate::data::view::ChartView;

const CARD_FILL: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);

pub struct DetailPanel {
    pub state: PanelState,
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Details", "ℹ"),
        }
    }
}

impl DetailPanel {
    pub const EMPTY_HINT: &'static str = "Click a point to see the details of that World Cup.";
}

impl Panel for DetailPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, view: &mut ChartView<'_>) {
        ui.heading(self.title_and_icon());
        ui.separator();
        let state = view.state;
        let Some(record) = state.selected_record() else {
            ui.label(Self::EMPTY_HINT);
            return;
        };
        let card = DetailCard::from_record(record);

        egui::Frame::new()
            .fill(CARD_FILL)
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.heading).strong().size(16.0).color(Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button(RichText::new(egui_phosphor::regular::X).color(Color32::WHITE))
                            .on_hover_text("Close")
                            .clicked()
                        {
                            view.dispatch(Action::ClearSelection);
                        }
                    });
                });
                ui.separator();
                for line in card.text_lines() {
                    ui.label(RichText::new(line).color(Color32::WHITE));
                }
            });
    }
}
