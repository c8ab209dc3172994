use stakechart_core::{ChartConfig, Palette, ShareAllocation};
use stakechart_render::layout_allocation;
use stakechart_render::svg::{SvgRenderOptions, render_donut_svg};

fn render(allocation: ShareAllocation, config: ChartConfig) -> String {
    let layout = layout_allocation(&allocation, &config, &Palette::default()).expect("layout ok");
    render_donut_svg(&layout, &SvgRenderOptions::default())
}

#[test]
fn svg_has_root_viewbox_and_three_slices() {
    let svg = render(ShareAllocation::from_parts(30, 50, 20), ChartConfig::default());

    assert!(svg.starts_with(r#"<svg id="stakechart""#));
    assert!(svg.contains(r#"viewBox="0 0 280 400""#), "{svg}");
    assert_eq!(svg.matches(r#"class="slice""#).count(), 3);
    assert_eq!(svg.matches(r#"class="legend""#).count(), 3);
    assert!(svg.contains(r#"fill="rgba(0, 255, 136, 0.8)""#));
    assert!(svg.contains(">Total Shares</text>"));
    assert!(svg.contains(">100</text>"));
    assert!(svg.contains(">30.0%</text>"));
    assert!(svg.contains(">50.0%</text>"));
    assert!(svg.contains(">20.0%</text>"));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn zero_total_renders_an_empty_wheel() {
    let svg = render(ShareAllocation::from_parts(0, 0, 0), ChartConfig::default());

    assert_eq!(svg.matches(r#"class="slice""#).count(), 0);
    assert_eq!(svg.matches(r#"class="legend""#).count(), 3);
    assert!(svg.contains(">0.0%</text>"));
}

#[test]
fn full_circle_segment_uses_a_two_arc_path() {
    let svg = render(ShareAllocation::from_parts(10, 0, 0), ChartConfig::default());

    assert_eq!(svg.matches(r#"class="slice""#).count(), 1);
    // Two-arc circle: top -> bottom -> top, not the degenerate single-A sector.
    assert!(svg.contains("M 140 14 A 126 126 0 1 1 140 266 A 126 126 0 1 1 140 14 Z"), "{svg}");
}

#[test]
fn depth_mode_draws_side_walls_under_the_slices() {
    let flat = render(ShareAllocation::from_parts(30, 50, 20), ChartConfig::default());
    assert!(!flat.contains(r#"class="walls""#));

    let extruded = render(
        ShareAllocation::from_parts(30, 50, 20),
        ChartConfig::default().with_depth(20.0),
    );
    assert!(extruded.contains(r#"<g class="walls" transform="translate(0,20)" opacity="0.6">"#));
    let walls = extruded.find(r#"class="walls""#).unwrap();
    let first_slice = extruded.find(r#"class="slice""#).unwrap();
    assert!(walls < first_slice);
}

#[test]
fn diagram_id_scopes_styles_and_is_escaped() {
    let layout = layout_allocation(
        &ShareAllocation::from_parts(1, 2, 3),
        &ChartConfig::default(),
        &Palette::default(),
    )
    .expect("layout ok");
    let svg = render_donut_svg(
        &layout,
        &SvgRenderOptions {
            diagram_id: Some(r#"profile"chart"#.to_string()),
            background: None,
        },
    );
    assert!(svg.starts_with(r#"<svg id="profile&quot;chart""#));
}

#[test]
fn background_override_wins_over_palette() {
    let layout = layout_allocation(
        &ShareAllocation::from_parts(1, 2, 3),
        &ChartConfig::default(),
        &Palette::default(),
    )
    .expect("layout ok");
    let svg = render_donut_svg(
        &layout,
        &SvgRenderOptions {
            diagram_id: None,
            background: Some("transparent".to_string()),
        },
    );
    assert!(svg.contains("background-color: transparent;"));
    // The donut hole still uses the override so the cutout matches the page.
    assert!(svg.contains(r#"r="75.6" fill="transparent""#));
}

#[test]
fn rendering_is_deterministic() {
    let a = render(ShareAllocation::from_parts(7, 11, 13), ChartConfig::default());
    let b = render(ShareAllocation::from_parts(7, 11, 13), ChartConfig::default());
    assert_eq!(a, b);
}
