use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::catalog::CatalogEntry;

/// Trait abstraction for the market data source.
///
/// The live implementation talks to CoinGecko; tests substitute canned or
/// failing providers. If the API changes or goes away, only the one
/// implementation is replaced and the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one fixed-size page of the asset catalog, ordered by
    /// descending market capitalization, in the fixed quote currency.
    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, CoreError>;

    /// Fetch the current price and 24h change for an explicit set of asset
    /// identifiers.
    async fn fetch_prices(&self, ids: &[String]) -> Result<Vec<CatalogEntry>, CoreError>;
}
