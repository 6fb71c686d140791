//! Natural cubic spline through a sequence of points, expressed as Bézier
//! segments so it can be flattened for egui or emitted as SVG path data.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line([f64; 2]),
    Cubic {
        c1: [f64; 2],
        c2: [f64; 2],
        end: [f64; 2],
    },
}

impl PathSegment {
    pub fn end(&self) -> [f64; 2] {
        match *self {
            PathSegment::Line(p) => p,
            PathSegment::Cubic { end, .. } => end,
        }
    }

    /// Point at parameter `t` in `[0, 1]` starting from `from`.
    pub fn point_at(&self, from: [f64; 2], t: f64) -> [f64; 2] {
        match *self {
            PathSegment::Line(p) => [
                from[0] + (p[0] - from[0]) * t,
                from[1] + (p[1] - from[1]) * t,
            ],
            PathSegment::Cubic { c1, c2, end } => {
                let u = 1.0 - t;
                let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
                [
                    b0 * from[0] + b1 * c1[0] + b2 * c2[0] + b3 * end[0],
                    b0 * from[1] + b1 * c1[1] + b2 * c2[1] + b3 * end[1],
                ]
            }
        }
    }
}

/// A smoothed path through every input point, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NaturalSpline {
    pub start: Option<[f64; 2]>,
    pub segments: Vec<PathSegment>,
}

impl NaturalSpline {
    /// Fit a spline through `points`. Zero points give an empty path, one point
    /// a lone move-to, two points a straight segment.
    pub fn through(points: &[[f64; 2]]) -> Self {
        let Some(&start) = points.first() else {
            return Self::default();
        };
        let segments = match points.len() {
            1 => Vec::new(),
            2 => vec![PathSegment::Line(points[1])],
            _ => {
                let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
                let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
                let (ax, bx) = control_points(&xs);
                let (ay, by) = control_points(&ys);
                (1..points.len())
                    .map(|i| PathSegment::Cubic {
                        c1: [ax[i - 1], ay[i - 1]],
                        c2: [bx[i - 1], by[i - 1]],
                        end: points[i],
                    })
                    .collect()
            }
        };
        Self {
            start: Some(start),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Apply `f` to every point, including control points. Valid for the
    /// per-axis affine maps used by chart scales.
    pub fn map_points(&self, f: impl Fn([f64; 2]) -> [f64; 2]) -> Self {
        Self {
            start: self.start.map(&f),
            segments: self
                .segments
                .iter()
                .map(|s| match *s {
                    PathSegment::Line(p) => PathSegment::Line(f(p)),
                    PathSegment::Cubic { c1, c2, end } => PathSegment::Cubic {
                        c1: f(c1),
                        c2: f(c2),
                        end: f(end),
                    },
                })
                .collect(),
        }
    }

    /// Flatten to a polyline with `per_segment` points per segment.
    pub fn sample(&self, per_segment: usize) -> Vec<[f64; 2]> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let steps = per_segment.max(1);
        let mut out = Vec::with_capacity(1 + self.segments.len() * steps);
        out.push(start);
        let mut from = start;
        for seg in &self.segments {
            for k in 1..=steps {
                out.push(seg.point_at(from, k as f64 / steps as f64));
            }
            from = seg.end();
        }
        out
    }

    /// SVG path data (`M x,y C …`). Empty for an empty spline.
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        let Some([x, y]) = self.start else {
            return d;
        };
        let _ = write!(d, "M{},{}", fmt_num(x), fmt_num(y));
        for seg in &self.segments {
            let _ = match *seg {
                PathSegment::Line([x, y]) => write!(d, "L{},{}", fmt_num(x), fmt_num(y)),
                PathSegment::Cubic { c1, c2, end } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_num(c1[0]),
                    fmt_num(c1[1]),
                    fmt_num(c2[0]),
                    fmt_num(c2[1]),
                    fmt_num(end[0]),
                    fmt_num(end[1])
                ),
            };
        }
        d
    }
}

/// Round to 3 decimals and drop trailing zeros.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Bézier control points of the natural cubic spline through `x` (one axis).
/// Solves the tridiagonal system with the Thomas algorithm. Requires
/// `x.len() >= 3`.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }
    (a, b)
}
