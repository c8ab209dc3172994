//! Closed tag sets the dashboards dispatch on.
//!
//! The UI keys badge colors and copy off these values. Keeping them as enums with
//! exhaustive mappings makes a missing arm a compile error instead of a silently
//! unstyled badge.

use serde::{Deserialize, Serialize};

/// Whether a profile currently has shares on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Available,
    SoldOut,
    Playing,
}

impl PlayerStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Available => "Shares Available",
            PlayerStatus::SoldOut => "Sold Out",
            PlayerStatus::Playing => "Playing",
        }
    }

    pub fn badge_color(self) -> &'static str {
        match self {
            PlayerStatus::Available => "#00ff88",
            PlayerStatus::SoldOut => "#f87171",
            PlayerStatus::Playing => "#00c8ff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Completed,
    Pending,
    Cancelled,
}

impl GameStatus {
    pub fn badge_color(self) -> &'static str {
        match self {
            GameStatus::Completed => "#00ff88",
            GameStatus::Pending => "#facc15",
            GameStatus::Cancelled => "#f87171",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Active,
    Sold,
    Pending,
}

impl InvestmentStatus {
    pub fn badge_color(self) -> &'static str {
        match self {
            InvestmentStatus::Active => "#00ff88",
            InvestmentStatus::Sold => "#60a5fa",
            InvestmentStatus::Pending => "#facc15",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn accent_color(self) -> &'static str {
        match self {
            NotificationKind::Info => "#60a5fa",
            NotificationKind::Success => "#00ff88",
            NotificationKind::Warning => "#facc15",
            NotificationKind::Error => "#f87171",
        }
    }
}
