#![forbid(unsafe_code)]

//! Share-allocation semantic model (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (a given allocation always produces the same chart)
//! - degenerate input (zero totals, negative wire values) normalizes instead of failing,
//!   since this feeds display-only computation with no transactional consequence
//! - no I/O, no global state; callers own every value this crate produces

pub mod allocation;
pub mod config;
pub mod error;
pub mod percent;
pub mod portfolio;
pub mod status;
pub mod theme;

pub use allocation::{SegmentCategory, ShareAllocation, parse_allocation};
pub use config::ChartConfig;
pub use error::{Error, Result};
pub use portfolio::PortfolioAllocation;
pub use theme::Palette;
