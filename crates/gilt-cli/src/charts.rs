//! SVG chart rendering.
//!
//! Both charts take plain numbers (weights, dated yields) and return a
//! standalone SVG document. Nothing here feeds back into the analytics.

use std::f64::consts::PI;
use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::{CliError, CliResult};

const WIDTH: i32 = 576;
const PIE_HEIGHT: i32 = 360;
const LINE_HEIGHT: i32 = 288;
const PADDING: f64 = 36.0;
const TITLE_Y: f64 = 20.0;
const AXIS_COLOR: &str = "#000";
const GRID_COLOR: &str = "#dddddd";

/// First slice starts 140 degrees counter-clockwise from three o'clock.
const PIE_START_ANGLE: f64 = 140.0;

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// One labelled wedge of a pie chart.
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    /// Fraction of the whole, in `[0, 1]`.
    pub fraction: f64,
}

/// One labelled line of a time-series chart.
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub label: String,
    /// Points in date order.
    pub points: Vec<(NaiveDate, f64)>,
}

fn svg_header(width: i32, height: i32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:#333}}</style><rect width="100%" height="100%" fill="#fff" />"##,
        w = width,
        h = height
    )
}

fn svg_footer() -> &'static str {
    "</svg>\n"
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn draw_title(svg: &mut String, title: &str, width: f64) {
    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="14" font-weight="bold">{title}</text>"#,
        x = width / 2.0,
        y = TITLE_Y,
        title = escape(title)
    );
}

// =============================================================================
// PIE CHART
// =============================================================================

/// Point on a circle; angles in degrees, counter-clockwise, y axis pointing down.
fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees * PI / 180.0;
    (cx + r * rad.cos(), cy - r * rad.sin())
}

/// Renders a pie chart with `label` outside each wedge and its percentage
/// (one decimal) inside.
pub fn pie_chart(slices: &[PieSlice], title: &str) -> CliResult<String> {
    let total: f64 = slices.iter().map(|s| s.fraction).sum();
    if slices.is_empty() || total <= 0.0 || !total.is_finite() {
        return Err(CliError::Chart("pie chart needs at least one positive slice".into()));
    }

    let width = f64::from(WIDTH);
    let height = f64::from(PIE_HEIGHT);
    let cx = width / 2.0;
    let cy = (height + TITLE_Y) / 2.0;
    let r = (height - TITLE_Y) / 2.0 - PADDING;

    let mut svg = svg_header(WIDTH, PIE_HEIGHT);
    draw_title(&mut svg, title, width);

    let mut start = PIE_START_ANGLE;
    for (i, slice) in slices.iter().enumerate() {
        let fraction = slice.fraction / total;
        if fraction <= 0.0 {
            continue;
        }
        let color = PALETTE[i % PALETTE.len()];
        let sweep = fraction * 360.0;
        let end = start + sweep;

        if fraction >= 1.0 - 1e-12 {
            let _ = write!(
                svg,
                r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{color}" />"#
            );
        } else {
            let (x0, y0) = polar(cx, cy, r, start);
            let (x1, y1) = polar(cx, cy, r, end);
            let large_arc = i32::from(sweep > 180.0);
            let _ = write!(
                svg,
                r##"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z" fill="{color}" stroke="#fff" stroke-width="1" />"##
            );
        }

        let mid = start + sweep / 2.0;
        let (lx, ly) = polar(cx, cy, r * 1.1, mid);
        let anchor = if lx < cx { "end" } else { "start" };
        let _ = write!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="{anchor}" font-size="11">{label}</text>"#,
            label = escape(&slice.label)
        );

        let (px, py) = polar(cx, cy, r * 0.6, mid);
        let _ = write!(
            svg,
            r#"<text x="{px:.2}" y="{py:.2}" text-anchor="middle" font-size="11">{pct:.1}%</text>"#,
            pct = fraction * 100.0
        );

        start = end;
    }

    svg.push_str(svg_footer());
    Ok(svg)
}

// =============================================================================
// LINE CHART
// =============================================================================

fn extent(series: &[LineSeries]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for (_, value) in series.iter().flat_map(|s| s.points.iter()) {
        if value.is_finite() {
            min_v = min_v.min(*value);
            max_v = max_v.max(*value);
        }
    }

    if !min_v.is_finite() || !max_v.is_finite() {
        return None;
    }

    if (max_v - min_v).abs() < f64::EPSILON {
        // widen flat ranges
        let adjust = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 };
        min_v -= adjust;
        max_v += adjust;
    }

    Some((min_v, max_v))
}

fn date_extent(series: &[LineSeries]) -> Option<(NaiveDate, NaiveDate)> {
    let dates = series.iter().flat_map(|s| s.points.iter().map(|(d, _)| *d));
    let first = dates.clone().min()?;
    let last = dates.max()?;
    Some((first, last))
}

fn scale_value(value: f64, min_v: f64, max_v: f64, height: f64) -> f64 {
    let inner_height = height - 2.0 * PADDING;
    let norm = (value - min_v) / (max_v - min_v);
    PADDING + (1.0 - norm) * inner_height
}

fn scale_date(date: NaiveDate, first: NaiveDate, last: NaiveDate, width: f64) -> f64 {
    let span = (last - first).num_days();
    if span == 0 {
        return width / 2.0;
    }
    let inner_width = width - 2.0 * PADDING;
    #[allow(clippy::cast_precision_loss)]
    let offset = (date - first).num_days() as f64 / span as f64;
    PADDING + inner_width * offset
}

fn polyline(points: &[(f64, f64)], stroke: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let coords: String = points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    format!(r#"<polyline fill="none" stroke="{stroke}" stroke-width="1.5" points="{coords}" />"#)
}

fn add_value_axis(svg: &mut String, min_v: f64, max_v: f64, width: f64, height: f64) {
    const TICKS: i32 = 5;
    for i in 0..TICKS {
        let value = min_v + (max_v - min_v) * f64::from(i) / f64::from(TICKS - 1);
        let y = scale_value(value, min_v, max_v, height);
        let _ = write!(
            svg,
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{GRID_COLOR}" stroke-width="0.5" /><text x="{tx:.2}" y="{ty:.2}" text-anchor="end">{value:.2}</text>"#,
            x1 = PADDING,
            x2 = width - PADDING,
            tx = PADDING - 4.0,
            ty = y + 3.0,
        );
    }
}

fn add_time_axis(svg: &mut String, first: NaiveDate, last: NaiveDate, width: f64, height: f64) {
    let axis_y = height - PADDING;
    let _ = write!(
        svg,
        r#"<line x1="{x1:.2}" y1="{axis_y:.2}" x2="{x2:.2}" y2="{axis_y:.2}" stroke="{AXIS_COLOR}" stroke-width="1" />"#,
        x1 = PADDING,
        x2 = width - PADDING,
    );

    // One tick per month, thinned to at most eight labels.
    let mut months = Vec::new();
    let mut cursor = NaiveDate::from_ymd_opt(first.year(), first.month(), 1);
    while let Some(month) = cursor {
        if month > last {
            break;
        }
        if month >= first {
            months.push(month);
        }
        cursor = month.checked_add_months(chrono::Months::new(1));
    }
    if months.is_empty() {
        months.push(first);
    }
    let step = months.len().div_ceil(8).max(1);

    for month in months.iter().step_by(step) {
        let x = scale_date(*month, first, last, width);
        let _ = write!(
            svg,
            r#"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{axis_y:.2}" stroke="{GRID_COLOR}" stroke-width="0.5" /><text x="{x:.2}" y="{ty:.2}" text-anchor="middle">{label}</text>"#,
            y1 = PADDING,
            ty = axis_y + 14.0,
            label = month.format("%Y-%m"),
        );
    }
}

fn draw_line_legend(svg: &mut String, series: &[LineSeries]) {
    let x = PADDING + 10.0;
    let mut y = PADDING + 14.0;
    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let _ = write!(
            svg,
            r#"<line x1="{x:.2}" y1="{ly:.2}" x2="{x2:.2}" y2="{ly:.2}" stroke="{color}" stroke-width="1.5" /><text x="{tx:.2}" y="{y:.2}" text-anchor="start">{label}</text>"#,
            ly = y - 4.0,
            x2 = x + 20.0,
            tx = x + 26.0,
            label = escape(&s.label),
        );
        y += 16.0;
    }
}

/// Renders dated series as lines on a shared date axis.
///
/// Series without points keep their legend entry and colour but draw no line.
pub fn line_chart(
    series: &[LineSeries],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> CliResult<String> {
    let (min_v, max_v) =
        extent(series).ok_or_else(|| CliError::Chart("line chart needs at least one value".into()))?;
    let (first, last) = date_extent(series)
        .ok_or_else(|| CliError::Chart("line chart needs at least one date".into()))?;

    let width = f64::from(WIDTH);
    let height = f64::from(LINE_HEIGHT);

    let mut svg = svg_header(WIDTH, LINE_HEIGHT);
    draw_title(&mut svg, title, width);
    add_value_axis(&mut svg, min_v, max_v, width, height);
    add_time_axis(&mut svg, first, last, width, height);

    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<(f64, f64)> = s
            .points
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(d, v)| {
                (
                    scale_date(*d, first, last, width),
                    scale_value(*v, min_v, max_v, height),
                )
            })
            .collect();

        if let [(x, y)] = points.as_slice() {
            let _ = write!(
                svg,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="2.5" fill="{color}" />"#
            );
        } else {
            svg.push_str(&polyline(&points, color));
        }
    }

    draw_line_legend(&mut svg, series);

    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{label}</text>"#,
        x = width / 2.0,
        y = height - 6.0,
        label = escape(x_label)
    );
    let _ = write!(
        svg,
        r#"<text x="12" y="{y:.2}" text-anchor="middle" transform="rotate(-90 12 {y:.2})">{label}</text>"#,
        y = height / 2.0,
        label = escape(y_label)
    );

    svg.push_str(svg_footer());
    Ok(svg)
}
