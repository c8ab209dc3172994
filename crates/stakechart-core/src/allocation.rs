use crate::Result;
use serde::{Deserialize, Serialize};

/// One ownership category of the share wheel, in fixed drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCategory {
    PlayerOwned,
    InvestorOwned,
    Available,
}

impl SegmentCategory {
    pub const ALL: [SegmentCategory; 3] = [
        SegmentCategory::PlayerOwned,
        SegmentCategory::InvestorOwned,
        SegmentCategory::Available,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SegmentCategory::PlayerOwned => "Player Owned",
            SegmentCategory::InvestorOwned => "Investor Owned",
            SegmentCategory::Available => "Available",
        }
    }
}

/// Share counts for one profile, built fresh by the caller on every render.
///
/// `total_shares` is carried independently of the three parts: percentage and angle math is
/// always based on the supplied total, so callers that let the parts drift from the total get
/// a residual gap (or overlap) in the wheel. That mirrors how the upstream dashboards pass a
/// profile-level total alongside derived per-category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireAllocation")]
pub struct ShareAllocation {
    pub player_owned: u64,
    pub investor_owned: u64,
    pub available: u64,
    pub total_shares: u64,
}

impl ShareAllocation {
    /// Builds an allocation whose total is the sum of the three parts.
    pub fn from_parts(player_owned: u64, investor_owned: u64, available: u64) -> Self {
        let total_shares = player_owned
            .saturating_add(investor_owned)
            .saturating_add(available);
        Self {
            player_owned,
            investor_owned,
            available,
            total_shares,
        }
    }

    /// Overrides the wheel total, keeping the parts as-is.
    pub fn with_total(mut self, total_shares: u64) -> Self {
        self.total_shares = total_shares;
        self
    }

    pub fn value(&self, category: SegmentCategory) -> u64 {
        match category {
            SegmentCategory::PlayerOwned => self.player_owned,
            SegmentCategory::InvestorOwned => self.investor_owned,
            SegmentCategory::Available => self.available,
        }
    }

    /// Sum of the three category counts, which may differ from `total_shares`.
    pub fn parts_sum(&self) -> u64 {
        self.player_owned
            .saturating_add(self.investor_owned)
            .saturating_add(self.available)
    }
}

/// Wire form of an allocation. Counts arrive as JSON numbers from untrusted UI state, so each
/// is clamped to a non-negative integer; a missing `totalShares` derives from the parts.
#[derive(Debug, Clone, Deserialize)]
struct WireAllocation {
    #[serde(rename = "playerOwned", default)]
    player_owned: f64,
    #[serde(rename = "investorOwned", default)]
    investor_owned: f64,
    #[serde(default)]
    available: f64,
    #[serde(rename = "totalShares", default)]
    total_shares: Option<f64>,
}

fn clamp_count(v: f64) -> u64 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    v.round() as u64
}

impl From<WireAllocation> for ShareAllocation {
    fn from(wire: WireAllocation) -> Self {
        let base = ShareAllocation::from_parts(
            clamp_count(wire.player_owned),
            clamp_count(wire.investor_owned),
            clamp_count(wire.available),
        );
        match wire.total_shares {
            Some(total) => base.with_total(clamp_count(total)),
            None => base,
        }
    }
}

/// Parses an allocation from its JSON wire form.
pub fn parse_allocation(text: &str) -> Result<ShareAllocation> {
    let allocation: ShareAllocation = serde_json::from_str(text)?;
    tracing::debug!(
        total = allocation.total_shares,
        parts = allocation.parts_sum(),
        "parsed share allocation"
    );
    Ok(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_wire_names() {
        let a = parse_allocation(
            r#"{"playerOwned": 30, "investorOwned": 50, "available": 20, "totalShares": 100}"#,
        )
        .unwrap();
        assert_eq!(a.player_owned, 30);
        assert_eq!(a.investor_owned, 50);
        assert_eq!(a.available, 20);
        assert_eq!(a.total_shares, 100);
    }

    #[test]
    fn derives_total_from_parts_when_missing() {
        let a = parse_allocation(r#"{"playerOwned": 3, "investorOwned": 5, "available": 2}"#)
            .unwrap();
        assert_eq!(a.total_shares, 10);
    }

    #[test]
    fn clamps_negative_wire_counts_to_zero() {
        let a = parse_allocation(
            r#"{"playerOwned": -7, "investorOwned": 5, "available": -0.4, "totalShares": -1}"#,
        )
        .unwrap();
        assert_eq!(a.player_owned, 0);
        assert_eq!(a.investor_owned, 5);
        assert_eq!(a.available, 0);
        assert_eq!(a.total_shares, 0);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let a = parse_allocation(r#"{}"#).unwrap();
        assert_eq!(a, ShareAllocation::from_parts(0, 0, 0));
    }

    #[test]
    fn parts_sum_is_independent_of_supplied_total() {
        let a = ShareAllocation::from_parts(10, 20, 30).with_total(100);
        assert_eq!(a.parts_sum(), 60);
        assert_eq!(a.total_shares, 100);
    }

    #[test]
    fn category_lookup_matches_fields() {
        let a = ShareAllocation::from_parts(1, 2, 3);
        assert_eq!(a.value(SegmentCategory::PlayerOwned), 1);
        assert_eq!(a.value(SegmentCategory::InvestorOwned), 2);
        assert_eq!(a.value(SegmentCategory::Available), 3);
    }
}
