use crate::models::catalog::CatalogEntry;
use crate::providers::traits::MarketDataProvider;

/// Outbound market data calls with the library's failure policy applied:
/// any transport or decoding error is logged and converted into an empty
/// result, never raised to the caller.
///
/// Both operations are single-shot: nothing is retried or deduplicated.
/// The worst case for a caller is a stale or empty view.
pub struct MarketDataService {
    provider: Box<dyn MarketDataProvider>,
}

impl MarketDataService {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch the asset catalog page. Empty on any failure.
    pub async fn list_catalog(&self) -> Vec<CatalogEntry> {
        match self.provider.list_catalog().await {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("[{}] catalog fetch failed: {e}", self.provider.name());
                Vec::new()
            }
        }
    }

    /// Fetch current prices for the given asset ids. Empty on any failure,
    /// and empty without a request when `ids` is empty (an empty id filter
    /// means "no filter" to the API).
    pub async fn fetch_prices(&self, ids: &[String]) -> Vec<CatalogEntry> {
        if ids.is_empty() {
            return Vec::new();
        }
        match self.provider.fetch_prices(ids).await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("[{}] price fetch failed: {e}", self.provider.name());
                Vec::new()
            }
        }
    }
}
