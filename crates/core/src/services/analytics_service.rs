use crate::models::portfolio::Portfolio;
use crate::models::summary::PortfolioSummary;

/// Computes the aggregate portfolio statistics shown in the summary panel.
///
/// Pure computation over the in-memory portfolio: prices are whatever the
/// last refresh wrote, and no I/O happens here.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Total portfolio value: Σ `price * amount` over all holdings.
    pub fn total_value(&self, portfolio: &Portfolio) -> f64 {
        portfolio.iter().map(|h| h.value()).sum()
    }

    /// Value-weighted average of each holding's 24h change, weighted by the
    /// holding's share of the total value.
    ///
    /// Returns 0.0 for an empty portfolio or when the total value is
    /// exactly 0 (every weight would divide by zero).
    pub fn change_24h(&self, portfolio: &Portfolio) -> f64 {
        if portfolio.is_empty() {
            return 0.0;
        }
        let total_value = self.total_value(portfolio);
        if total_value == 0.0 {
            return 0.0;
        }
        portfolio
            .iter()
            .map(|h| (h.value() / total_value) * h.change_24h)
            .sum()
    }

    /// The three summary-panel values in one record.
    pub fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary {
        PortfolioSummary {
            total_value: self.total_value(portfolio),
            asset_count: portfolio.len(),
            change_24h: self.change_24h(portfolio),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
