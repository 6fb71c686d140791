//! Export of the current chart (SVG / PNG) and of the derived dataset
//! (CSV / JSON).

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use egui::Color32;

use super::record::Record;
use super::render::{ChartFrame, ChartStyle};
use super::scale::{format_value, ChartLayout};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("SVG: {0}")]
    Svg(#[from] usvg::Error),
    #[error("PNG: {0}")]
    Png(String),
}

/// Default file stem for exports, e.g. `cupchart_20260114_153012`.
pub fn default_file_stem() -> String {
    format!("cupchart_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

fn hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Standalone SVG for `frame` drawn at the final (non-animated) positions.
pub fn svg_document(frame: &ChartFrame, layout: &ChartLayout, style: &ChartStyle) -> String {
    let xs = frame.scales.x_scale(layout);
    let ys = frame.scales.y_scale(layout);
    let (iw, ih) = (layout.inner_width(), layout.inner_height());
    let mut s = String::new();

    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        layout.width, layout.height, layout.width, layout.height
    );
    let _ = writeln!(s, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        s,
        r#"<g transform="translate({},{})" font-family="sans-serif" font-size="10">"#,
        layout.margin_left, layout.margin_top
    );

    // y-axis
    let _ = writeln!(s, r#"<g class="y-axis axis">"#);
    let _ = writeln!(s, r#"<path d="M0,0V{ih}" stroke="black"/>"#);
    for v in &frame.y_ticks {
        let y = ys.map(*v);
        let _ = writeln!(
            s,
            r#"<line x1="-6" x2="0" y1="{y}" y2="{y}" stroke="black"/><text x="-9" y="{y}" dy="0.32em" text-anchor="end">{}</text>"#,
            format_value(*v)
        );
    }
    let _ = writeln!(
        s,
        r#"<text transform="rotate(-90)" x="{}" y="-45" text-anchor="middle">{}</text>"#,
        -ih / 2.0,
        escape(frame.metric.label())
    );
    let _ = writeln!(s, "</g>");

    // x-axis
    let _ = writeln!(s, r#"<g class="x-axis axis" transform="translate(0,{ih})">"#);
    let _ = writeln!(s, r#"<path d="M0,0H{iw}" stroke="black"/>"#);
    for year in &frame.x_ticks {
        let x = xs.map(*year as f64);
        let _ = writeln!(
            s,
            r#"<line x1="{x}" x2="{x}" y1="0" y2="6" stroke="black"/><text x="{x}" y="9" dy="0.71em" text-anchor="middle">{year}</text>"#
        );
    }
    let _ = writeln!(s, "</g>");

    let path = frame
        .line
        .map_points(|p| [xs.map(p[0]), ys.map(p[1])])
        .to_svg_path();
    if !path.is_empty() {
        let _ = writeln!(
            s,
            r#"<path class="line" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path,
            hex(style.line_color),
            style.line_width
        );
    }

    for m in &frame.markers {
        let _ = writeln!(
            s,
            r#"<circle class="dot" cx="{:.3}" cy="{:.3}" r="{}" stroke="{}" stroke-width="{}" fill="{}"><title>{}</title></circle>"#,
            xs.map(m.center[0]),
            ys.map(m.center[1]),
            m.radius,
            hex(style.marker_stroke),
            style.marker_stroke_width,
            hex(style.marker_fill),
            escape(&m.tooltip)
        );
    }

    let _ = writeln!(s, "</g>");
    let _ = writeln!(s, "</svg>");
    s
}

pub fn write_svg<P: AsRef<Path>>(
    path: P,
    frame: &ChartFrame,
    layout: &ChartLayout,
    style: &ChartStyle,
) -> Result<(), ExportError> {
    std::fs::write(path, svg_document(frame, layout, style))?;
    Ok(())
}

/// Rasterise an SVG document to a PNG file.
pub fn render_png<P: AsRef<Path>>(svg: &str, path: P) -> Result<(), ExportError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ExportError::Png(format!("invalid size {}x{}", size.width(), size.height())))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .save_png(path)
        .map_err(|e| ExportError::Png(e.to_string()))
}

/// Records in the input column layout.
pub fn write_records_csv<W: Write>(w: W, records: &[Record]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(w);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Records as a pretty-printed JSON array. `NaN` values become `null`.
pub fn write_records_json<W: Write>(w: W, records: &[Record]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(w, records)?;
    Ok(())
}

pub fn write_records_csv_path<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_records_csv(file, records)
}

pub fn write_records_json_path<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_records_json(std::io::BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Metric;
    use crate::data::render::render_records;

    fn rec(year: i32, goals: f64) -> Record {
        Record {
            year,
            edition: format!("{year} <Cup> & more"),
            location: "Host".into(),
            winner: "Champion".into(),
            teams: 16.0,
            matches: 18.0,
            goals,
            average_goals: 3.89,
            average_attendance: 32808.0,
        }
    }

    #[test]
    fn svg_has_one_circle_per_marker_and_escapes_text() {
        let records = vec![rec(1930, 70.0), rec(1934, 70.0), rec(1938, 84.0)];
        let frame = render_records(&records, Metric::Goals, &ChartStyle::default());
        let svg = svg_document(&frame, &ChartLayout::default(), &ChartStyle::default());
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(r#"class="line""#));
        assert!(svg.contains("&lt;Cup&gt; &amp; more"));
        assert!(svg.contains(">1930</text>"));
        assert!(svg.contains("#dc143c"));
    }

    #[test]
    fn svg_tick_labels_are_rounded() {
        let records = vec![rec(1930, 70.0), rec(1934, 84.0)];
        let frame = ChartFrame {
            y_ticks: crate::data::scale::nice_ticks(0.0, 1.0, 10),
            ..render_records(&records, Metric::Goals, &ChartStyle::default())
        };
        let svg = svg_document(&frame, &ChartLayout::default(), &ChartStyle::default());
        assert!(svg.contains(r#"text-anchor="end">0.3</text>"#));
        assert!(!svg.contains("0.30000000000000004"));
    }

    #[test]
    fn empty_frame_svg_has_no_line_or_circles() {
        let frame = render_records(&[], Metric::Goals, &ChartStyle::default());
        let svg = svg_document(&frame, &ChartLayout::default(), &ChartStyle::default());
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(!svg.contains(r#"class="line""#));
    }

    #[test]
    fn csv_export_uses_input_header() {
        let mut buf = Vec::new();
        write_records_csv(&mut buf, &[rec(1930, 70.0)]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let mut lines = s.lines();
        assert_eq!(
            lines.next(),
            Some("YEAR,EDITION,LOCATION,WINNER,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE")
        );
        assert_eq!(
            lines.next(),
            Some("1930,1930 <Cup> & more,Host,Champion,16,18,70,3.89,32808")
        );
    }

    #[test]
    fn json_export_writes_nan_as_null() {
        let mut buf = Vec::new();
        write_records_json(&mut buf, &[rec(1930, f64::NAN)]).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v[0]["YEAR"], 1930);
        assert!(v[0]["GOALS"].is_null());
        assert_eq!(v[0]["TEAMS"], 16);
        assert_eq!(v[0]["AVERAGE_GOALS"], 3.89);
    }
}
