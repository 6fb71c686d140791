//! ChartView: what a panel may read while rendering, and where it sends actions.

use crate::config::ChartConfig;
use crate::data::render::ChartFrame;
use crate::data::state::{Action, ChartState};

/// Per-frame view handed to panels. Panels never mutate the state; they queue
/// [`Action`]s which the app reduces after all panels have rendered.
pub struct ChartView<'a> {
    pub state: &'a ChartState,
    /// The frame the chart is animating towards (the latest render), if any.
    pub frame: Option<&'a ChartFrame>,
    pub config: &'a ChartConfig,
    pub actions: &'a mut Vec<Action>,
}

impl<'a> ChartView<'a> {
    pub fn dispatch(&mut self, action: Action) {
        self.actions.push(action);
    }
}
