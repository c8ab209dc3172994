//! Standalone SVG writer for [`DonutChartLayout`].
//!
//! Output is deterministic: identical layouts stringify to identical documents, which the
//! snapshot-style tests rely on.

use crate::model::{ChartSegment, DonutChartLayout};
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id>`. Internal class selectors are scoped by it, so several charts can be
    /// inlined in the same page without style collisions.
    pub diagram_id: Option<String>,
    /// Overrides the palette background (any CSS color, including `transparent`).
    pub background: Option<String>,
}

pub fn render_donut_svg(layout: &DonutChartLayout, options: &SvgRenderOptions) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("stakechart");
    let diagram_id_esc = escape_xml(diagram_id);
    let background = options.background.as_deref().unwrap_or(&layout.background);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" style="max-width: {w}px; background-color: {bg};" role="img" aria-roledescription="donut chart" aria-label="Share distribution">"#,
        id = diagram_id_esc,
        w = fmt(layout.width),
        h = fmt(layout.height),
        bg = escape_xml(background),
    );

    let _ = write!(&mut out, r#"<style>{}</style>"#, chart_css(diagram_id, layout));

    // Side walls first so the top faces overdraw them (pseudo-3D mode only).
    if layout.depth > 0.0 {
        let _ = write!(
            &mut out,
            r#"<g class="walls" transform="translate(0,{d})" opacity="0.6">"#,
            d = fmt(layout.depth)
        );
        for segment in visible_segments(layout) {
            let _ = write!(
                &mut out,
                r#"<path d="{d}" fill="{fill}"/>"#,
                d = escape_xml(&segment_path(segment, layout)),
                fill = escape_xml(&segment.fill),
            );
        }
        out.push_str("</g>");
    }

    for segment in visible_segments(layout) {
        let _ = write!(
            &mut out,
            r#"<path d="{d}" fill="{fill}" stroke="{stroke}" class="slice"/>"#,
            d = escape_xml(&segment_path(segment, layout)),
            fill = escape_xml(&segment.fill),
            stroke = escape_xml(&segment.stroke),
        );
    }

    // Center hole for the donut cutout, then the total readout on top of it.
    if layout.inner_radius > 0.0 {
        let _ = write!(
            &mut out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{bg}"/>"#,
            cx = fmt_path(layout.center_x),
            cy = fmt_path(layout.center_y),
            r = fmt_path(layout.inner_radius),
            bg = escape_xml(background),
        );
    }
    let _ = write!(
        &mut out,
        r#"<text x="{cx}" y="{cy}" class="centerValue">{total}</text>"#,
        cx = fmt_path(layout.center_x),
        cy = fmt_path(layout.center_y),
        total = layout.total,
    );
    let _ = write!(
        &mut out,
        r#"<text x="{cx}" y="{cy}" class="centerCaption">Total Shares</text>"#,
        cx = fmt_path(layout.center_x),
        cy = fmt_path(layout.center_y + 20.0),
    );

    for cell in &layout.legend {
        let _ = write!(
            &mut out,
            r#"<g class="legend" transform="translate({x},{y})">"#,
            x = fmt_path(cell.x),
            y = fmt_path(cell.y)
        );
        let _ = write!(
            &mut out,
            r#"<circle cx="0" cy="8" r="8" fill="{fill}"/>"#,
            fill = escape_xml(&cell.swatch_fill)
        );
        let _ = write!(
            &mut out,
            r#"<text x="0" y="40" class="legendValue">{value}</text>"#,
            value = cell.value
        );
        let _ = write!(
            &mut out,
            r#"<text x="0" y="58" class="legendLabel">{label}</text>"#,
            label = escape_xml(&cell.label)
        );
        let _ = write!(
            &mut out,
            r#"<text x="0" y="78" class="legendPercent">{pct:.1}%</text>"#,
            pct = cell.percentage
        );
        out.push_str("</g>");
    }

    out.push_str("</svg>\n");
    out
}

/// Segments worth drawing. Zero-span wedges produce a degenerate sector outline that some
/// renderers still stroke as a hairline, so they are skipped outright.
fn visible_segments(layout: &DonutChartLayout) -> impl Iterator<Item = &ChartSegment> {
    layout.segments.iter().filter(|s| s.angle_span() > 0.0)
}

/// Path actually handed to the renderer. A full-circle wedge keeps its sector outline in
/// the layout, but a single `A` command with coincident endpoints draws nothing, so it is
/// swapped for a two-arc circle here.
fn segment_path(segment: &ChartSegment, layout: &DonutChartLayout) -> String {
    if !segment.full_circle {
        return segment.path.clone();
    }
    let cx = layout.center_x;
    let cy = layout.center_y;
    let r = layout.radius;
    format!(
        "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
        cx = fmt_path(cx),
        top = fmt_path(cy - r),
        bottom = fmt_path(cy + r),
        r = fmt_path(r),
    )
}

fn chart_css(diagram_id: &str, layout: &DonutChartLayout) -> String {
    let id = escape_xml(diagram_id);
    let font = r#"'Montserrat',system-ui,sans-serif"#;
    let mut out = String::new();
    let _ = write!(
        &mut out,
        "#{id} .slice{{stroke-width:2px;}}\
         #{id} text{{font-family:{font};text-anchor:middle;}}\
         #{id} .centerValue{{fill:{text};font-size:30px;font-weight:700;}}\
         #{id} .centerCaption{{fill:{muted};font-size:14px;}}\
         #{id} .legendValue{{fill:{text};font-size:18px;font-weight:700;}}\
         #{id} .legendLabel{{fill:{muted};font-size:12px;}}\
         #{id} .legendPercent{{fill:{accent};font-size:14px;}}",
        id = id,
        font = font,
        text = layout.text_color,
        muted = layout.muted_color,
        accent = layout.accent_color,
    );
    out
}

pub(crate) fn fmt(v: f64) -> String {
    // Round-trippable decimal form for SVG attributes, without `-0` or tiny float noise
    // from our own trigonometry.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn fmt_path(v: f64) -> String {
    // Path coordinates get three fractional digits, rounded ties-half-up the way d3-path
    // stringifies them (including for negatives).
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }

    let scaled = v * 1000.0;
    let mut r = (scaled + 0.5).floor() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }

    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
