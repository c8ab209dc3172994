#![forbid(unsafe_code)]

//! `stakechart` is a headless implementation of the share-distribution donut chart used by
//! the FishStake dashboards: three ownership categories plus an independently supplied
//! total in, renderable segments and legend out.
//!
//! # Features
//!
//! - `render`: enable layout + SVG output (`stakechart::render`)

pub use stakechart_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use stakechart_render::layout_allocation;
    pub use stakechart_render::model::{ChartSegment, DonutChartLayout, LegendItemLayout};
    pub use stakechart_render::svg::{SvgRenderOptions, render_donut_svg};

    use stakechart_core::{ChartConfig, Palette, ShareAllocation};

    #[derive(Debug, thiserror::Error)]
    pub enum ChartError {
        #[error(transparent)]
        Model(#[from] stakechart_core::Error),
        #[error(transparent)]
        Render(#[from] stakechart_render::Error),
    }

    pub type Result<T> = std::result::Result<T, ChartError>;

    /// Converts an arbitrary string into a conservative SVG `id` token suitable for
    /// embedding several charts in the same UI tree.
    ///
    /// The root `<svg id="...">` value scopes the chart's internal style selectors, so
    /// inlining two charts with the same id makes their styles collide.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `c-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "c-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "c-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "c" {
            return "c-untitled".to_string();
        }
        out.to_string()
    }

    /// One-call helper: allocation in, SVG document out.
    pub fn render_allocation_svg(
        allocation: &ShareAllocation,
        config: &ChartConfig,
        palette: &Palette,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_allocation(allocation, config, palette)?;
        Ok(render_donut_svg(&layout, svg_options))
    }

    /// Convenience wrapper that bundles config, palette and SVG options for UI
    /// integrations where passing three option parameters per call is noisy. All work is
    /// CPU-bound and synchronous.
    #[derive(Debug, Clone, Default)]
    pub struct DonutChart {
        pub config: ChartConfig,
        pub palette: Palette,
        pub svg: SvgRenderOptions,
    }

    impl DonutChart {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_config(mut self, config: ChartConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_palette(mut self, palette: Palette) -> Self {
            self.palette = palette;
            self
        }

        pub fn layout(&self, allocation: &ShareAllocation) -> Result<DonutChartLayout> {
            Ok(layout_allocation(allocation, &self.config, &self.palette)?)
        }

        pub fn render_svg(&self, allocation: &ShareAllocation) -> Result<String> {
            render_allocation_svg(allocation, &self.config, &self.palette, &self.svg)
        }

        /// Renders with a per-chart id so multiple wheels can share a page.
        pub fn render_svg_with_id(
            &self,
            allocation: &ShareAllocation,
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = self.svg.clone();
            svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            render_allocation_svg(allocation, &self.config, &self.palette, &svg)
        }
    }

}
