use crate::model::{ChartSegment, DonutChartLayout, LegendItemLayout};
use crate::svg::fmt_path;
use stakechart_core::percent;
use stakechart_core::{ChartConfig, Palette, SegmentCategory, ShareAllocation};

/// Vertical gap between the chart viewport and the legend band, in px.
const LEGEND_GAP_Y: f64 = 32.0;
/// Height of the legend band (swatch plus three lines of text), in px.
const LEGEND_BAND_H: f64 = 88.0;

fn polar_xy(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    // Degrees everywhere; radians only at the point of producing Cartesian coordinates.
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

fn sector_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64, large: u8) -> String {
    let (x0, y0) = polar_xy(cx, cy, radius, start_deg);
    let (x1, y1) = polar_xy(cx, cy, radius, end_deg);
    format!(
        "M {cx} {cy} L {x0} {y0} A {r} {r} 0 {large} 1 {x1} {y1} Z",
        cx = fmt_path(cx),
        cy = fmt_path(cy),
        x0 = fmt_path(x0),
        y0 = fmt_path(y0),
        r = fmt_path(radius),
        x1 = fmt_path(x1),
        y1 = fmt_path(y1),
    )
}

/// Derives wheel segments and legend cells from an allocation.
///
/// Spans are `value / total * 360`, laid out consecutively and clockwise from the configured
/// start angle, so consecutive segments share a boundary. When the three parts do not sum to
/// the supplied total the wheel keeps a residual gap (or overlap); that is the caller's
/// contract, not something reconciled here. A non-positive total collapses every span and
/// percentage to zero.
pub fn layout_donut_chart(
    allocation: &ShareAllocation,
    config: &ChartConfig,
    palette: &Palette,
) -> DonutChartLayout {
    let (center_x, center_y) = config.center();
    let radius = config.radius();
    let total = allocation.total_shares as f64;

    let mut segments: Vec<ChartSegment> = Vec::with_capacity(SegmentCategory::ALL.len());
    let mut cursor = config.start_angle;
    for category in SegmentCategory::ALL {
        let value = allocation.value(category);
        let span = if total > 0.0 {
            (value as f64 / total) * 360.0
        } else {
            0.0
        };
        let start_angle = cursor;
        let end_angle = start_angle + span;
        cursor = end_angle;

        let large_arc = u8::from(span > 180.0);
        segments.push(ChartSegment {
            label: category.label().to_string(),
            value,
            fill: palette.slice_fill(category),
            stroke: palette.slice_stroke(category),
            percentage: percent::round1(percent::percentage(value as f64, total)),
            start_angle,
            end_angle,
            large_arc,
            full_circle: span >= 360.0 - 1e-9,
            path: sector_path(center_x, center_y, radius, start_angle, end_angle, large_arc),
        });
    }

    let legend = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| LegendItemLayout {
            label: segment.label.clone(),
            value: segment.value,
            percentage: segment.percentage,
            swatch_fill: segment.stroke.clone(),
            x: config.size * (2.0 * i as f64 + 1.0) / 6.0,
            y: config.size + LEGEND_GAP_Y,
        })
        .collect();

    tracing::debug!(
        total = allocation.total_shares,
        parts = allocation.parts_sum(),
        "laid out share wheel"
    );

    DonutChartLayout {
        width: config.size,
        height: config.size + LEGEND_GAP_Y + LEGEND_BAND_H,
        center_x,
        center_y,
        radius,
        inner_radius: config.inner_radius(),
        depth: config.depth,
        total: allocation.total_shares,
        background: palette.background.clone(),
        text_color: palette.text.clone(),
        muted_color: palette.muted_text.clone(),
        accent_color: palette.accent.clone(),
        segments,
        legend,
    }
}
