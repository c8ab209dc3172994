//! Default palette, matching the colors the upstream UI hardcodes per category.

use crate::allocation::SegmentCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub player: String,
    pub investor: String,
    pub available: String,
    pub background: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub muted_text: String,
    /// Accent used for percentage readouts and hover highlights.
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: "#00ff88".to_string(),
            investor: "#00c8ff".to_string(),
            available: "#333333".to_string(),
            background: "#0d0d0d".to_string(),
            surface: "#1a1a1a".to_string(),
            border: "#333333".to_string(),
            text: "#ffffff".to_string(),
            muted_text: "#b3b3b3".to_string(),
            accent: "#00ff88".to_string(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, category: SegmentCategory) -> &str {
        match category {
            SegmentCategory::PlayerOwned => &self.player,
            SegmentCategory::InvestorOwned => &self.investor,
            SegmentCategory::Available => &self.available,
        }
    }

    /// Slice fill at the 0.8 alpha the UI uses for resting segments. Falls back to the raw
    /// token when it is not hex (e.g. a CSS variable).
    pub fn slice_fill(&self, category: SegmentCategory) -> String {
        let token = self.color_for(category);
        rgba(token, 0.8).unwrap_or_else(|| token.to_string())
    }

    /// Full-alpha border stroke for a slice.
    pub fn slice_stroke(&self, category: SegmentCategory) -> String {
        self.color_for(category).to_string()
    }
}

fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// `rgba(r, g, b, a)` form of a hex color, printed the way JS stringifies the alpha
/// (`0.8`, not `0.80`; `1` for full alpha).
pub fn rgba(hex: &str, alpha: f64) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    let a = alpha.clamp(0.0, 1.0);
    Some(format!("rgba({r}, {g}, {b}, {a})"))
}
