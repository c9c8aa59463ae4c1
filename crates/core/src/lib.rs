pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;
pub mod ui;

use models::catalog::CatalogEntry;
use models::holding::{Holding, NewHolding};
use models::portfolio::Portfolio;
use models::sort::SortKey;
use models::summary::PortfolioSummary;
use services::analytics_service::AnalyticsService;
use services::holdings_service::HoldingsService;
use storage::manager::StorageManager;
use storage::store::KeyValueStore;

use errors::CoreError;

/// The holdings store: owns the user's portfolio, persists it to a durable
/// key-value slot after every mutation, and answers the aggregate and
/// projection queries the view needs.
///
/// The stored list is read once when the tracker opens; a missing or
/// malformed value starts an empty portfolio.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    store: Box<dyn KeyValueStore>,
    holdings_service: HoldingsService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.portfolio.len())
            .field("total_value", &self.total_value())
            .finish()
    }
}

impl PortfolioTracker {
    /// Open a tracker over the given store, loading whatever holdings it
    /// already contains.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let portfolio = StorageManager::load(store.as_ref());
        Self {
            portfolio,
            store,
            holdings_service: HoldingsService::new(),
            analytics_service: AnalyticsService::new(),
        }
    }

    // ── Mutations ───────────────────────────────────────────────────
    //
    // Every mutation writes the full list back to the store. The in-memory
    // change always applies; the returned error reports a failed write.
    // Amount validation is the caller's responsibility; see the UI layer.

    /// Add a holding, merging amounts when the id is already held.
    pub fn add(&mut self, new: NewHolding) -> Result<(), CoreError> {
        self.holdings_service.add(&mut self.portfolio, new);
        self.persist()
    }

    /// Overwrite price and 24h change on every holding matching a record.
    pub fn update_prices(&mut self, records: &[CatalogEntry]) -> Result<(), CoreError> {
        self.holdings_service
            .update_prices(&mut self.portfolio, records);
        self.persist()
    }

    /// Delete the holding with `id`. An unknown id is a silent no-op; the
    /// list is persisted either way. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, CoreError> {
        let removed = self.holdings_service.remove(&mut self.portfolio, id);
        self.persist()?;
        Ok(removed)
    }

    /// Overwrite the amount on the matching holding; persists only when a
    /// holding was found. Returns whether one was.
    pub fn update_amount(&mut self, id: &str, amount: f64) -> Result<bool, CoreError> {
        let updated = self
            .holdings_service
            .update_amount(&mut self.portfolio, id, amount);
        if updated {
            self.persist()?;
        }
        Ok(updated)
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Total portfolio value: Σ `price * amount` over all holdings.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.analytics_service.total_value(&self.portfolio)
    }

    /// Value-weighted 24-hour change; 0.0 for an empty or zero-value
    /// portfolio.
    #[must_use]
    pub fn change_24h(&self) -> f64 {
        self.analytics_service.change_24h(&self.portfolio)
    }

    /// The summary-panel values in one record.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service.summarize(&self.portfolio)
    }

    // ── Projections ─────────────────────────────────────────────────

    /// Case-insensitive substring filter on name or symbol; an empty term
    /// returns everything in insertion order. Non-mutating.
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<&Holding> {
        self.holdings_service.filter(&self.portfolio, term)
    }

    /// A freshly ordered projection; `None` keeps insertion order.
    /// Non-mutating.
    #[must_use]
    pub fn sorted(&self, key: Option<SortKey>) -> Vec<&Holding> {
        self.holdings_service.sorted(&self.portfolio, key)
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// All holdings in insertion order.
    #[must_use]
    pub fn holdings(&self) -> Vec<&Holding> {
        self.portfolio.iter().collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Holding> {
        self.portfolio.get(id)
    }

    /// Identifiers of all held assets, in insertion order. This is the id
    /// set a price refresh fetches.
    #[must_use]
    pub fn held_ids(&self) -> Vec<String> {
        self.portfolio.ids()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.portfolio.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portfolio.is_empty()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&mut self) -> Result<(), CoreError> {
        StorageManager::save(self.store.as_mut(), &self.portfolio)
    }
}
