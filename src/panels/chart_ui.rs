//! Central plot: draws the animated frame with egui_plot and turns pointer
//! input on markers into hover / select actions.

use std::time::Duration;

use egui::Ui;
use egui_plot::{GridInput, GridMark, Line, MarkerShape, Plot, PlotPoint, Points};

use crate::config::FeatureFlags;
use crate::data::render::{hover_tooltip, ChartFrame, ChartStyle};
use crate::data::scale::{decade_ticks, format_value};
use crate::data::state::{Action, ChartState};
use crate::data::transition::Animator;

/// Headroom above the largest value, as a fraction of the y-domain.
const Y_HEADROOM: f64 = 0.05;
/// Margin left and right of the x-domain, as a fraction of its width.
const X_PADDING: f64 = 0.03;

pub struct ChartPanel {
    animator: Animator,
    style: ChartStyle,
    features: FeatureFlags,
}

impl ChartPanel {
    pub fn new(transition: Duration, style: ChartStyle, features: FeatureFlags) -> Self {
        Self {
            animator: Animator::new(transition),
            style,
            features,
        }
    }

    /// Start animating towards `frame`.
    pub fn retarget(&mut self, frame: ChartFrame, now: f64) {
        self.animator.retarget(frame, now);
    }

    pub fn target(&self) -> Option<&ChartFrame> {
        self.animator.target()
    }

    pub fn tick(&mut self, now: f64) {
        self.animator.tick(now);
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animator.is_animating(now)
    }

    pub fn render_panel(&mut self, ui: &mut Ui, state: &ChartState, actions: &mut Vec<Action>, now: f64) {
        let frame = self.animator.frame_at(now);
        let metric = state.metric();

        let plot = Plot::new("cupchart_plot")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .show_grid(self.features.grid)
            .x_axis_label("Year")
            .y_axis_label(metric.label())
            .x_grid_spacer(decade_grid)
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .y_axis_formatter(|mark, _range| format_value(mark.value));

        let style = &self.style;
        let plot_resp = plot.show(ui, |plot_ui| {
            if let Some((x0, x1)) = frame.x_domain {
                let pad = ((x1 - x0) * X_PADDING).max(1.0);
                plot_ui.set_plot_bounds_x(x0 - pad..=x1 + pad);
            }
            if let Some((y0, y1)) = frame.y_domain {
                let top = if y1 > y0 { y1 + (y1 - y0) * Y_HEADROOM } else { y0 + 1.0 };
                plot_ui.set_plot_bounds_y(y0..=top);
            }

            if frame.line.len() > 1 {
                plot_ui.line(
                    Line::new("", frame.line.clone())
                        .color(style.line_color)
                        .width(style.line_width),
                );
            }

            for m in &frame.markers {
                if m.radius <= 0.0 {
                    continue;
                }
                let r = m.radius as f32;
                plot_ui.points(
                    Points::new("", vec![m.center])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(r)
                        .color(style.marker_stroke),
                );
                plot_ui.points(
                    Points::new("", vec![m.center])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius((r - style.marker_stroke_width).max(0.0))
                        .color(style.marker_fill),
                );
            }
        });

        if !state.is_ready() {
            return;
        }

        let hovered_key = plot_resp.response.hover_pos().and_then(|pos| {
            let transform = &plot_resp.transform;
            frame
                .hit_test([pos.x as f64, pos.y as f64], |p| {
                    let s = transform.position_from_point(&PlotPoint::new(p[0], p[1]));
                    [s.x as f64, s.y as f64]
                })
                .map(|m| m.key)
        });

        let state_hovered = state.hovered_record().map(|r| r.year);
        if state_hovered != hovered_key {
            actions.push(Action::Hover(hovered_key));
        }

        if let Some(key) = hovered_key {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            if plot_resp.response.clicked() {
                actions.push(Action::SelectRecord(key));
            }
        }
        // The reducer catches up on the next frame; until then nothing is shown.
        if self.features.tooltips && state_hovered.is_some() && state_hovered == hovered_key {
            if let Some(text) = hover_tooltip(state) {
                let _ = plot_resp.response.on_hover_text_at_pointer(text);
            }
        }
    }
}

fn decade_grid(input: GridInput) -> Vec<GridMark> {
    decade_marks(input.bounds)
}

/// One grid line per decade.
fn decade_marks(bounds: (f64, f64)) -> Vec<GridMark> {
    decade_ticks(Some(bounds))
        .into_iter()
        .map(|year| GridMark {
            value: year as f64,
            step_size: 10.0,
        })
        .collect()
}
