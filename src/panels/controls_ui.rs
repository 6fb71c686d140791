//! Top-bar controls: metric selector and year-range control.

use egui::Ui;

use super::panel_trait::{Panel, PanelState};
use crate::data::record::Metric;
use crate::data::state::Action;
use crate::data::view::ChartView;

pub struct ControlsPanel {
    pub state: PanelState,
    /// Handle positions of the range control; `None` until the dataset's year
    /// extent is known.
    range: Option<(i32, i32)>,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Controls", "🎛"),
            range: None,
        }
    }
}

impl ControlsPanel {
    pub const METRIC_LABEL: &'static str = "Metric";
    pub const RANGE_LABEL: &'static str = "Years";

    fn render_metric_select(&mut self, ui: &mut Ui, view: &mut ChartView<'_>) {
        let current = view.state.metric();
        let mut selected = current;
        egui::ComboBox::from_label(Self::METRIC_LABEL)
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for m in Metric::ALL {
                    ui.selectable_value(&mut selected, m, m.label());
                }
            });
        if selected != current {
            view.dispatch(Action::SetMetric(selected));
        }
    }

    /// Two handles over the dataset's year extent. Dragging one past the other
    /// pushes the other along so `from <= to` always holds.
    fn render_range(&mut self, ui: &mut Ui, view: &mut ChartView<'_>) {
        let Some((min, max)) = view.state.year_extent() else {
            ui.label("No data");
            return;
        };
        let (mut from, mut to) = match self.range {
            Some(r) => r,
            None => {
                // First time the control is shown: report it ready.
                self.range = Some((min, max));
                view.dispatch(Action::SliderReady);
                (min, max)
            }
        };

        ui.label(Self::RANGE_LABEL);
        let r_from = ui.add(
            egui::Slider::new(&mut from, min..=max)
                .clamping(egui::SliderClamping::Always)
                .step_by(1.0)
                .text("from"),
        );
        let r_to = ui.add(
            egui::Slider::new(&mut to, min..=max)
                .clamping(egui::SliderClamping::Always)
                .step_by(1.0)
                .text("to"),
        );
        if r_from.changed() && from > to {
            to = from;
        }
        if r_to.changed() && to < from {
            from = to;
        }

        if (from, to) != self.range.unwrap_or((min, max)) {
            self.range = Some((from, to));
            view.dispatch(Action::SetYearRange { from, to });
        }
    }
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui, view: &mut ChartView<'_>) {
        self.render_metric_select(ui, view);
        ui.separator();
        self.render_range(ui, view);
    }
}
