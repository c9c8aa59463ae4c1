use serde::{Deserialize, Serialize};

/// The summary panel values, computed from the current portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total portfolio value: Σ `price * amount` over all holdings
    pub total_value: f64,

    /// Number of distinct held assets
    pub asset_count: usize,

    /// Value-weighted 24-hour percent change. 0.0 for an empty or
    /// zero-value portfolio.
    pub change_24h: f64,
}

impl PortfolioSummary {
    /// Direction of the 24h change, for sign-colored rendering.
    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_24h)
    }

    /// The change formatted the way the summary panel shows it, with an
    /// explicit leading sign (e.g., "+5.83%", "-2.10%").
    #[must_use]
    pub fn formatted_change(&self) -> String {
        format!("{}{:.2}%", self.trend().sign(), self.change_24h)
    }
}

/// Sign of a 24-hour change. Zero counts as up, so a flat portfolio renders
/// in the positive style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Explicit sign prefix: negative values already carry their own.
    pub fn sign(&self) -> &'static str {
        match self {
            Trend::Up => "+",
            Trend::Down => "",
        }
    }
}
