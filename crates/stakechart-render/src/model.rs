use serde::{Deserialize, Serialize};

/// One wedge of the share wheel.
///
/// Angles are degrees, laid out clockwise; the first segment starts at the configured start
/// angle (default -90, i.e. 12 o'clock). Values are immutable once computed and owned by
/// the consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub label: String,
    pub value: u64,
    pub fill: String,
    pub stroke: String,
    /// Percent of the wheel total, rounded to one fractional digit.
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG large-arc flag: `1` iff the wedge spans more than half the circle.
    pub large_arc: u8,
    /// Set when one wedge covers the entire wheel. A single `A` command with coincident
    /// endpoints draws nothing, so the SVG writer emits a two-arc path for these.
    pub full_circle: bool,
    /// Sector outline: `M cx cy L x0 y0 A r r 0 <large> 1 x1 y1 Z`.
    pub path: String,
}

impl ChartSegment {
    pub fn angle_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One cell of the three-column legend under the chart, cross-referenced with
/// [`ChartSegment`]s by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItemLayout {
    pub label: String,
    pub value: u64,
    pub percentage: f64,
    pub swatch_fill: String,
    /// Cell center x / band top y, in chart coordinates.
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutChartLayout {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub inner_radius: f64,
    /// Pseudo-3D wall extrusion in px; `0` for the flat chart.
    pub depth: f64,
    pub total: u64,
    pub background: String,
    pub text_color: String,
    pub muted_color: String,
    pub accent_color: String,
    pub segments: Vec<ChartSegment>,
    pub legend: Vec<LegendItemLayout>,
}
