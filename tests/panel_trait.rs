use cupchart::panels::*;

#[test]
fn detail_toggle_shows_the_icon_and_hovers_the_title() {
    let detail = DetailPanel::default();
    assert_eq!(detail.icon_only(), Some("ℹ"));
    assert_eq!(detail.title(), "Details");
    assert_eq!(detail.title_and_icon(), "ℹ Details");
}

#[test]
fn hiding_a_panel_only_changes_visibility() {
    let mut detail = DetailPanel::default();
    assert!(detail.state().visible);
    detail.state_mut().visible = false;
    assert_eq!(detail.state(), &PanelState { visible: false, ..PanelState::new("Details", "ℹ") });
}

#[test]
fn export_and_controls_panels_start_visible() {
    assert!(ControlsPanel::default().state().visible);
    assert!(ExportPanel::default().state().visible);
    assert_eq!(ExportPanel::default().title_and_icon(), "📤 Export");
}
