use crate::allocation::ShareAllocation;
use serde::{Deserialize, Serialize};

/// Dashboard-side aggregate that reuses the share wheel for dollar amounts: everything the
/// user has invested versus their uncommitted balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    pub invested: u64,
    pub available_balance: u64,
}

impl PortfolioAllocation {
    pub fn new(invested: u64, available_balance: u64) -> Self {
        Self {
            invested,
            available_balance,
        }
    }

    /// Maps the portfolio onto the share wheel. The upstream dashboard passed the invested
    /// total as both the investor category and the wheel total, dropping the uncommitted
    /// balance from the circle entirely; here the total is reconciled to the sum of the
    /// parts so the wheel always closes.
    pub fn to_allocation(self) -> ShareAllocation {
        ShareAllocation::from_parts(0, self.invested, self.available_balance)
    }
}
