//! Animated transitions between chart frames.
//!
//! The [`Animator`] owns what is currently on screen. Each call to
//! [`Animator::retarget`] starts one transition of fixed duration from the
//! present interpolated state to a new [`ChartFrame`]. Markers are joined by
//! key: entering markers grow in, kept markers move, exiting markers shrink
//! away and are dropped when the transition completes. Axis domains and the
//! line share the same clock and easing.

use std::time::Duration;

use super::render::ChartFrame;

/// Number of points the line is resampled to while it morphs.
const LINE_SAMPLES: usize = 240;
/// Flattening density used for the resting line.
const POINTS_PER_SEGMENT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start: f64,
    pub duration: f64,
}

impl Transition {
    /// Linear progress in `[0, 1]` at time `now` (seconds).
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Cubic in-out easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp2(a: [f64; 2], b: [f64; 2], t: f64) -> [f64; 2] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t)]
}

fn lerp_domain(a: Option<(f64, f64)>, b: Option<(f64, f64)>, t: f64) -> Option<(f64, f64)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((lerp(a.0, b.0, t), lerp(a.1, b.1, t))),
        (_, b) => b.or(a),
    }
}

/// Resample a polyline to exactly `n` points spaced evenly by vertex index.
pub fn resample(points: &[[f64; 2]], n: usize) -> Vec<[f64; 2]> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![points[0]; n],
        len => (0..n)
            .map(|i| {
                let pos = if n > 1 {
                    i as f64 / (n - 1) as f64 * (len - 1) as f64
                } else {
                    0.0
                };
                let idx = (pos.floor() as usize).min(len - 2);
                lerp2(points[idx], points[idx + 1], pos - idx as f64)
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPhase {
    Enter,
    Update,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
struct AnimatedMarker {
    key: i32,
    from: [f64; 2],
    to: [f64; 2],
    from_radius: f64,
    to_radius: f64,
    phase: MarkerPhase,
}

/// A marker as it should be drawn right now.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub key: i32,
    pub center: [f64; 2],
    pub radius: f64,
    pub phase: MarkerPhase,
}

/// The interpolated picture at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatedFrame {
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub line: Vec<[f64; 2]>,
    pub markers: Vec<MarkerView>,
}

impl AnimatedFrame {
    /// Topmost marker (last drawn) whose disc contains `pos`, in whatever
    /// coordinate space `to_screen` maps into.
    pub fn hit_test(&self, pos: [f64; 2], to_screen: impl Fn([f64; 2]) -> [f64; 2]) -> Option<&MarkerView> {
        self.markers
            .iter()
            .rev()
            .filter(|m| m.phase != MarkerPhase::Exit && m.radius > 0.0)
            .find(|m| {
                let c = to_screen(m.center);
                let (dx, dy) = (c[0] - pos[0], c[1] - pos[1]);
                dx * dx + dy * dy <= m.radius * m.radius
            })
    }
}

#[derive(Debug, Clone)]
pub struct Animator {
    duration: f64,
    transition: Option<Transition>,
    markers: Vec<AnimatedMarker>,
    line_from: Vec<[f64; 2]>,
    line_to: Vec<[f64; 2]>,
    x_from: Option<(f64, f64)>,
    x_to: Option<(f64, f64)>,
    y_from: Option<(f64, f64)>,
    y_to: Option<(f64, f64)>,
    target: Option<ChartFrame>,
}

impl Animator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.as_secs_f64(),
            transition: None,
            markers: Vec::new(),
            line_from: Vec::new(),
            line_to: Vec::new(),
            x_from: None,
            x_to: None,
            y_from: None,
            y_to: None,
            target: None,
        }
    }

    /// The frame being animated towards.
    pub fn target(&self) -> Option<&ChartFrame> {
        self.target.as_ref()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition.is_some_and(|t| !t.is_done(now))
    }

    /// Start a transition from the state displayed at `now` to `frame`.
    pub fn retarget(&mut self, frame: ChartFrame, now: f64) {
        let current = self.frame_at(now);

        let mut next = Vec::with_capacity(frame.markers.len() + current.markers.len());
        for marker in &frame.markers {
            let animated = match current.markers.iter().find(|m| m.key == marker.key) {
                Some(cur) => AnimatedMarker {
                    key: marker.key,
                    from: cur.center,
                    to: marker.center,
                    from_radius: cur.radius,
                    to_radius: marker.radius,
                    phase: MarkerPhase::Update,
                },
                None => AnimatedMarker {
                    key: marker.key,
                    from: marker.center,
                    to: marker.center,
                    from_radius: 0.0,
                    to_radius: marker.radius,
                    phase: MarkerPhase::Enter,
                },
            };
            next.push(animated);
        }
        for cur in &current.markers {
            if frame.marker(cur.key).is_none() && cur.radius > 0.0 {
                next.push(AnimatedMarker {
                    key: cur.key,
                    from: cur.center,
                    to: cur.center,
                    from_radius: cur.radius,
                    to_radius: 0.0,
                    phase: MarkerPhase::Exit,
                });
            }
        }

        self.markers = next;
        self.line_from = current.line;
        self.line_to = frame.line.sample(POINTS_PER_SEGMENT);
        self.x_from = current.x_domain;
        self.x_to = frame.scales.x_domain.or(current.x_domain);
        self.y_from = current.y_domain;
        self.y_to = frame.scales.y_domain.or(current.y_domain);
        self.transition = Some(Transition {
            start: now,
            duration: self.duration,
        });
        self.target = Some(frame);
    }

    /// Drop exited markers once the running transition has completed.
    pub fn tick(&mut self, now: f64) {
        if let Some(t) = self.transition {
            if t.is_done(now) {
                self.markers.retain(|m| m.phase != MarkerPhase::Exit);
                for m in &mut self.markers {
                    m.from = m.to;
                    m.from_radius = m.to_radius;
                    m.phase = MarkerPhase::Update;
                }
                self.line_from = self.line_to.clone();
                self.x_from = self.x_to;
                self.y_from = self.y_to;
                self.transition = None;
            }
        }
    }

    /// Interpolated picture at `now`.
    pub fn frame_at(&self, now: f64) -> AnimatedFrame {
        let t = match self.transition {
            Some(tr) => ease_cubic_in_out(tr.progress(now)),
            None => 1.0,
        };

        let markers = self
            .markers
            .iter()
            .map(|m| MarkerView {
                key: m.key,
                center: lerp2(m.from, m.to, t),
                radius: lerp(m.from_radius, m.to_radius, t),
                phase: m.phase,
            })
            .filter(|m| !(m.phase == MarkerPhase::Exit && m.radius <= 0.0))
            .collect();

        let line = if t >= 1.0 || self.line_from.is_empty() || self.line_to.is_empty() {
            self.line_to.clone()
        } else {
            let a = resample(&self.line_from, LINE_SAMPLES);
            let b = resample(&self.line_to, LINE_SAMPLES);
            a.iter().zip(b.iter()).map(|(p, q)| lerp2(*p, *q, t)).collect()
        };

        AnimatedFrame {
            x_domain: lerp_domain(self.x_from, self.x_to, t),
            y_domain: lerp_domain(self.y_from, self.y_to, t),
            line,
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::{Metric, Record};
    use crate::data::render::{render_records, ChartStyle};

    fn rec(year: i32, goals: f64) -> Record {
        Record {
            year,
            edition: year.to_string(),
            location: String::new(),
            winner: String::new(),
            teams: 0.0,
            matches: 0.0,
            goals,
            average_goals: 0.0,
            average_attendance: 0.0,
        }
    }

    fn frame(years: &[(i32, f64)]) -> ChartFrame {
        let records: Vec<Record> = years.iter().map(|(y, g)| rec(*y, *g)).collect();
        render_records(&records, Metric::Goals, &ChartStyle::default())
    }

    fn phase_of(f: &AnimatedFrame, key: i32) -> Option<MarkerPhase> {
        f.markers.iter().find(|m| m.key == key).map(|m| m.phase)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn enter_update_exit_join() {
        let mut anim = Animator::new(Duration::from_millis(800));
        anim.retarget(frame(&[(1930, 70.0), (1934, 70.0)]), 0.0);
        assert_eq!(phase_of(&anim.frame_at(0.4), 1930), Some(MarkerPhase::Enter));
        anim.tick(1.0);

        anim.retarget(frame(&[(1934, 80.0), (1938, 84.0)]), 1.0);
        let mid = anim.frame_at(1.4);
        assert_eq!(phase_of(&mid, 1930), Some(MarkerPhase::Exit));
        assert_eq!(phase_of(&mid, 1934), Some(MarkerPhase::Update));
        assert_eq!(phase_of(&mid, 1938), Some(MarkerPhase::Enter));
        let moving = mid.markers.iter().find(|m| m.key == 1934).unwrap();
        assert!(moving.center[1] > 70.0 && moving.center[1] < 80.0);

        assert!(anim.is_animating(1.5));
        anim.tick(2.0);
        assert!(!anim.is_animating(2.0));
        let done = anim.frame_at(2.0);
        let keys: Vec<i32> = done.markers.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec![1934, 1938]);
        assert_eq!(done.markers[0].center, [1934.0, 80.0]);
    }

    #[test]
    fn transition_to_empty_keeps_domains_and_clears_markers() {
        let mut anim = Animator::new(Duration::from_millis(800));
        anim.retarget(frame(&[(1930, 70.0), (1934, 70.0)]), 0.0);
        anim.tick(1.0);
        anim.retarget(frame(&[]), 1.0);
        anim.tick(2.0);
        let f = anim.frame_at(2.0);
        assert!(f.markers.is_empty());
        assert!(f.line.is_empty());
        assert_eq!(f.x_domain, Some((1930.0, 1934.0)));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_position() {
        let mut anim = Animator::new(Duration::from_secs(1));
        anim.retarget(frame(&[(1930, 0.0), (1934, 0.0)]), 0.0);
        anim.tick(1.0);
        anim.retarget(frame(&[(1930, 100.0), (1934, 0.0)]), 1.0);
        let halfway = anim.frame_at(1.5).markers[0].center[1];
        anim.retarget(frame(&[(1930, 0.0), (1934, 0.0)]), 1.5);
        assert_eq!(anim.frame_at(1.5).markers[0].center[1], halfway);
    }

    #[test]
    fn resample_preserves_endpoints() {
        let pts = [[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]];
        let r = resample(&pts, 5);
        assert_eq!(r.len(), 5);
        assert_eq!(r[0], [0.0, 0.0]);
        assert_eq!(r[2], [1.0, 2.0]);
        assert_eq!(r[4], [2.0, 0.0]);
    }

    #[test]
    fn hit_test_finds_marker_under_pointer() {
        let mut anim = Animator::new(Duration::ZERO);
        anim.retarget(frame(&[(1930, 10.0), (1934, 20.0)]), 0.0);
        let f = anim.frame_at(0.0);
        let identity = |p: [f64; 2]| p;
        assert_eq!(f.hit_test([1934.0, 25.0], identity).map(|m| m.key), Some(1934));
        assert!(f.hit_test([1990.0, 0.0], identity).is_none());
    }
}
