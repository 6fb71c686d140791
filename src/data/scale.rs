//! Scales and axes: domains derived from the filtered dataset and the
//! mapping from data space to chart pixels.

use super::record::{Metric, Record};

/// Outer size of the chart and the margins reserved for the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::from_width(960.0)
    }
}

impl ChartLayout {
    /// Layout with a 4:3 aspect ratio.
    pub fn from_width(width: f64) -> Self {
        Self {
            width,
            height: (width * 0.75).round(),
            margin_top: 40.0,
            margin_right: 40.0,
            margin_bottom: 60.0,
            margin_left: 60.0,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }
}

/// Continuous linear mapping from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-width (or non-finite) domain
    /// maps everything to the middle of the range.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Roughly `count` evenly spaced round values (steps of 1, 2 or 5 × 10ⁿ)
/// between `start` and `stop`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if lo == hi {
        return vec![lo];
    }
    let inc = tick_increment(lo, hi, count);
    if !inc.is_finite() || inc <= 0.0 {
        return Vec::new();
    }
    let first = (lo / inc).ceil() as i64;
    let last = (hi / inc).floor() as i64;
    // Multiply from integer indices so ticks do not accumulate rounding error.
    (first..=last).map(|i| i as f64 * inc).collect()
}

/// Domains for the current derived dataset and metric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scales {
    /// `[min year, max year]`; `None` for an empty dataset.
    pub x_domain: Option<(f64, f64)>,
    /// `[0, max value]`; `None` when no finite value exists.
    pub y_domain: Option<(f64, f64)>,
}

impl Scales {
    pub fn compute(records: &[Record], metric: Metric) -> Self {
        let x_domain = match (records.first(), records.last()) {
            (Some(first), Some(last)) => {
                let (lo, hi) = records.iter().fold((first.year, last.year), |(lo, hi), r| {
                    (lo.min(r.year), hi.max(r.year))
                });
                Some((lo as f64, hi as f64))
            }
            _ => None,
        };
        let y_max = records
            .iter()
            .map(|r| metric.value(r))
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
        Self {
            x_domain,
            y_domain: y_max.map(|m| (0.0, m)),
        }
    }

    /// One tick per decade inside the x-domain.
    pub fn x_ticks(&self) -> Vec<i32> {
        decade_ticks(self.x_domain)
    }

    pub fn y_ticks(&self, count: usize) -> Vec<f64> {
        self.y_domain
            .map(|(lo, hi)| nice_ticks(lo, hi, count))
            .unwrap_or_default()
    }

    /// X scale onto the inner plot width. An empty domain collapses to `(0, 0)`.
    pub fn x_scale(&self, layout: &ChartLayout) -> LinearScale {
        LinearScale::new(
            self.x_domain.unwrap_or((0.0, 0.0)),
            (0.0, layout.inner_width()),
        )
    }

    /// Y scale onto the inner plot height, zero at the bottom.
    pub fn y_scale(&self, layout: &ChartLayout) -> LinearScale {
        LinearScale::new(
            self.y_domain.unwrap_or((0.0, 0.0)),
            (layout.inner_height(), 0.0),
        )
    }
}

/// Tick label for a metric value: integers without decimals, fractions with
/// up to two.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn decade_ticks(domain: Option<(f64, f64)>) -> Vec<i32> {
    let Some((lo, hi)) = domain else {
        return Vec::new();
    };
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let first = (lo / 10.0).ceil() as i32;
    let last = (hi / 10.0).floor() as i32;
    (first..=last).map(|d| d * 10).collect()
}
