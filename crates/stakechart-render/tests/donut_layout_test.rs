use stakechart_core::{ChartConfig, Palette, parse_allocation};
use stakechart_render::layout_allocation;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("allocation")
        .join(name);
    std::fs::read_to_string(&path).expect("fixture")
}

#[test]
fn basic_fixture_produces_a_closed_wheel() {
    let allocation = parse_allocation(&fixture("basic.json")).expect("parse ok");
    let layout =
        layout_allocation(&allocation, &ChartConfig::default(), &Palette::default()).expect("layout ok");

    assert_eq!(layout.total, 100);
    assert_eq!(layout.segments.len(), 3);
    assert_eq!(layout.legend.len(), 3);

    let span_sum: f64 = layout.segments.iter().map(|s| s.angle_span()).sum();
    assert!((span_sum - 360.0).abs() <= 1e-9);

    for segment in &layout.segments {
        assert!(segment.start_angle.is_finite() && segment.end_angle.is_finite());
        assert!(segment.path.starts_with("M "));
    }
}

#[test]
fn zero_fixture_renders_an_empty_wheel_without_failing() {
    let allocation = parse_allocation(&fixture("zero.json")).expect("parse ok");
    let layout =
        layout_allocation(&allocation, &ChartConfig::default(), &Palette::default()).expect("layout ok");

    assert_eq!(layout.total, 0);
    for segment in &layout.segments {
        assert_eq!(segment.angle_span(), 0.0);
        assert_eq!(segment.percentage, 0.0);
    }
}

#[test]
fn solo_fixture_marks_the_full_circle_segment() {
    let allocation = parse_allocation(&fixture("solo.json")).expect("parse ok");
    let layout =
        layout_allocation(&allocation, &ChartConfig::default(), &Palette::default()).expect("layout ok");

    assert!(layout.segments[0].full_circle);
    assert_eq!(layout.segments[0].large_arc, 1);
    assert_eq!(layout.segments[0].percentage, 100.0);
}

#[test]
fn dashboard_fixture_is_a_single_investor_wheel() {
    let allocation = parse_allocation(&fixture("dashboard.json")).expect("parse ok");
    let layout =
        layout_allocation(&allocation, &ChartConfig::default(), &Palette::default()).expect("layout ok");

    assert_eq!(layout.segments[0].percentage, 0.0);
    assert_eq!(layout.segments[1].percentage, 100.0);
    assert!(layout.segments[1].full_circle);
    assert_eq!(layout.segments[2].percentage, 0.0);
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let allocation = parse_allocation(&fixture("basic.json")).expect("parse ok");
    let config = ChartConfig::default().with_size(-10.0);
    let err = layout_allocation(&allocation, &config, &Palette::default()).unwrap_err();
    assert!(err.to_string().contains("size must be positive"));
}

#[test]
fn layout_round_trips_through_json() {
    let allocation = parse_allocation(&fixture("basic.json")).expect("parse ok");
    let layout =
        layout_allocation(&allocation, &ChartConfig::default(), &Palette::default()).expect("layout ok");

    let text = serde_json::to_string(&layout).expect("serialize");
    let back: stakechart_render::model::DonutChartLayout =
        serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back.segments.len(), layout.segments.len());
    assert_eq!(back.total, layout.total);
}
