use egui::Ui;

use crate::data::view::ChartView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon: Some(icon),
            visible: true,
        }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn icon_only(&self) -> Option<&'static str> {
        self.state().icon
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui, _view: &mut ChartView<'_>) {}
    fn render_panel(&mut self, _ui: &mut Ui, _view: &mut ChartView<'_>) {}
}
