pub mod chart_ui;
pub mod controls_ui;
pub mod detail_ui;
pub mod export_ui;
pub mod panel_trait;

pub use chart_ui::ChartPanel;
pub use controls_ui::ControlsPanel;
pub use detail_ui::DetailPanel;
pub use export_ui::ExportPanel;
pub use panel_trait::{Panel, PanelState};
