use serde::{Deserialize, Serialize};

/// A single entry of the market catalog: one tradable asset together with
/// its current market snapshot.
///
/// Catalog entries are transient: fetched from the market data service,
/// never mutated locally and never persisted. The same shape doubles as the
/// price record returned by a targeted price fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable asset identifier (e.g., "bitcoin"). Foreign key for holdings.
    pub id: String,

    /// Ticker symbol as reported by the service (e.g., "btc")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Current unit price in the quote currency. 0.0 when the service
    /// reported no price.
    #[serde(default)]
    pub current_price: f64,

    /// 24-hour percent price change. 0.0 when the service reported none.
    #[serde(default)]
    pub change_24h: f64,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            current_price: 0.0,
            change_24h: 0.0,
        }
    }

    /// Attach a market snapshot to the entry.
    #[must_use]
    pub fn with_market_data(mut self, price: f64, change_24h: f64) -> Self {
        self.current_price = price;
        self.change_24h = change_24h;
        self
    }
}
