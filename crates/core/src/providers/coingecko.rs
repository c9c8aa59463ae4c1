use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::catalog::CatalogEntry;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for all prices. The tracker is single-currency.
const VS_CURRENCY: &str = "usd";

/// Catalog page size: the top 100 assets by market capitalization.
const CATALOG_PAGE_SIZE: u32 = 100;

/// Page size for targeted price fetches; also the effective cap on how many
/// ids a single request resolves.
const PRICES_PAGE_SIZE: u32 = 250;

/// CoinGecko API provider for cryptocurrency market data.
///
/// - **Free**: no API key required on the public endpoints used here.
/// - **Endpoint**: `/coins/markets`, both for the catalog page and for
///   targeted price fetches via the `ids` filter.
///
/// Requests carry no timeout; a hung request stays pending rather than
/// erroring out.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// URL of the catalog page: top assets by market cap in the quote
    /// currency.
    pub fn catalog_url() -> String {
        format!(
            "{BASE_URL}/coins/markets?vs_currency={VS_CURRENCY}&order=market_cap_desc&per_page={CATALOG_PAGE_SIZE}&page=1"
        )
    }

    /// URL of a targeted price fetch for an explicit id set. Ids beyond the
    /// page size are cut off by the server.
    pub fn prices_url(ids: &[String]) -> String {
        format!(
            "{BASE_URL}/coins/markets?vs_currency={VS_CURRENCY}&ids={}&order=market_cap_desc&per_page={PRICES_PAGE_SIZE}&page=1",
            ids.join(",")
        )
    }

    /// Decode a `/coins/markets` response body into catalog entries.
    /// Missing or null numeric fields map to 0.0.
    pub fn decode_markets(body: &str) -> Result<Vec<CatalogEntry>, CoreError> {
        let entries: Vec<MarketEntry> =
            serde_json::from_str(body).map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to decode market data: {e}"),
            })?;
        Ok(entries.into_iter().map(CatalogEntry::from).collect())
    }

    async fn get_markets(&self, url: &str) -> Result<Vec<CatalogEntry>, CoreError> {
        let body = self.client.get(url).send().await?.text().await?;
        Self::decode_markets(&body)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketEntry {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
}

impl From<MarketEntry> for CatalogEntry {
    fn from(raw: MarketEntry) -> Self {
        CatalogEntry {
            id: raw.id,
            symbol: raw.symbol,
            name: raw.name,
            current_price: raw.current_price.unwrap_or(0.0),
            change_24h: raw.price_change_percentage_24h.unwrap_or(0.0),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, CoreError> {
        self.get_markets(&Self::catalog_url()).await
    }

    /// Note: an empty `ids` set is an empty filter to the server, which
    /// would return the whole first page, so callers guard against it.
    async fn fetch_prices(&self, ids: &[String]) -> Result<Vec<CatalogEntry>, CoreError> {
        self.get_markets(&Self::prices_url(ids)).await
    }
}
