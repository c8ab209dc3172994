#![forbid(unsafe_code)]

//! Headless layout + SVG writer for share-allocation donut charts.
//!
//! Layout is a pure, single-pass transform: an allocation plus a [`ChartConfig`] and
//! [`Palette`] always produce the same [`model::DonutChartLayout`], which the SVG writer
//! (or any other rendering surface) consumes.

pub mod donut;
pub mod model;
pub mod svg;

use stakechart_core::{ChartConfig, Palette, ShareAllocation};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] stakechart_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out one share wheel. Validates the config, then derives segments and legend.
pub fn layout_allocation(
    allocation: &ShareAllocation,
    config: &ChartConfig,
    palette: &Palette,
) -> Result<model::DonutChartLayout> {
    config.validate()?;
    Ok(donut::layout_donut_chart(allocation, config, palette))
}
