//! [`ChartApp`]: the eframe application.
//!
//! Each frame the panels render against an immutable [`ChartView`] and queue
//! [`Action`]s. After rendering, the queued actions are folded through
//! [`reduce`]; if the state asks for it, a new frame is rendered and handed to
//! the chart's animator.

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::record::Record;
use crate::data::render::{render, ChartFrame};
use crate::data::state::{reduce, Action, ChartState};
use crate::data::view::ChartView;
use crate::panels::{ChartPanel, ControlsPanel, DetailPanel, ExportPanel, Panel};

pub struct ChartApp {
    state: ChartState,
    config: ChartConfig,
    controls: ControlsPanel,
    chart: ChartPanel,
    detail: DetailPanel,
    export: ExportPanel,
}

impl ChartApp {
    pub fn new(records: Vec<Record>, config: ChartConfig) -> Self {
        let state = ChartState::new(records, config.metric, config.range_bounds);
        let chart = ChartPanel::new(config.transition, config.style.clone(), config.features.clone());
        let mut export = ExportPanel::default();
        export.state_mut().visible = config.features.export;
        Self {
            state,
            config,
            controls: ControlsPanel::default(),
            chart,
            detail: DetailPanel::default(),
            export,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// The latest rendered frame, which the chart is animating towards.
    /// `None` until the first render.
    pub fn frame(&self) -> Option<&ChartFrame> {
        self.chart.target()
    }

    /// Whether the detail side panel is shown.
    pub fn detail_open(&self) -> bool {
        self.config.features.detail_panel && self.detail.state().visible
    }

    /// Reduce queued actions and retarget the chart if the state changed.
    pub fn apply_actions(&mut self, actions: Vec<Action>, now: f64) {
        for action in actions {
            match action {
                Action::Hover(_) => {}
                Action::SelectRecord(_) => {
                    tracing::debug!(?action, "dispatch");
                    self.detail.state_mut().visible = true;
                }
                _ => tracing::debug!(?action, "dispatch"),
            }
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, action);
        }
        if self.state.take_dirty() {
            let frame = render(&self.state, &self.config.style);
            tracing::debug!(
                metric = %frame.metric,
                markers = frame.markers.len(),
                "render"
            );
            self.chart.retarget(frame, now);
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.chart.tick(now);
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("cupchart_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut view = ChartView {
                    state: &self.state,
                    frame: self.chart.target(),
                    config: &self.config,
                    actions: &mut actions,
                };
                self.controls.render_menu(ui, &mut view);
                if self.export.state().visible {
                    ui.separator();
                    self.export.render_menu(ui, &mut view);
                }
                if self.config.features.detail_panel {
                    ui.separator();
                    if let Some(icon) = self.detail.icon_only() {
                        let title = self.detail.title();
                        ui.toggle_value(&mut self.detail.state_mut().visible, icon)
                            .on_hover_text(title);
                    }
                }
            });
        });

        if self.detail_open() {
            egui::SidePanel::right("cupchart_detail")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| {
                    let mut view = ChartView {
                        state: &self.state,
                        frame: self.chart.target(),
                        config: &self.config,
                        actions: &mut actions,
                    };
                    self.detail.render_panel(ui, &mut view);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.render_panel(ui, &self.state, &mut actions, now);
        });

        if !actions.is_empty() {
            self.apply_actions(actions, now);
            ctx.request_repaint();
        } else if self.chart.is_animating(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }
}
