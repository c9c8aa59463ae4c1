// ═══════════════════════════════════════════════════════════════════
// Integration Tests — persistence through a real file-backed store,
// full controller flows end to end
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::path::Path;

use crypto_portfolio_core::errors::CoreError;
use crypto_portfolio_core::models::catalog::CatalogEntry;
use crypto_portfolio_core::models::holding::{Holding, NewHolding};
use crypto_portfolio_core::providers::traits::MarketDataProvider;
use crypto_portfolio_core::services::market_service::MarketDataService;
use crypto_portfolio_core::storage::manager::STORAGE_KEY;
use crypto_portfolio_core::storage::store::{FileStore, KeyValueStore};
use crypto_portfolio_core::ui::controller::ViewController;
use crypto_portfolio_core::ui::events::UiEvent;
use crypto_portfolio_core::ui::render::Renderer;
use crypto_portfolio_core::PortfolioTracker;

fn new_holding(id: &str, amount: f64, price: f64, change: f64) -> NewHolding {
    NewHolding::new(id, id, id.to_uppercase(), amount).with_market_data(price, change)
}

fn open_tracker(path: &Path) -> PortfolioTracker {
    PortfolioTracker::open(Box::new(FileStore::open(path).unwrap()))
}

// ═══════════════════════════════════════════════════════════════════
// Persistence across process restarts
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    #[test]
    fn holdings_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut tracker = open_tracker(&path);
            tracker.add(new_holding("bitcoin", 2.0, 50_000.0, 5.0)).unwrap();
            tracker.add(new_holding("ethereum", 10.0, 2_000.0, 10.0)).unwrap();
        }

        let tracker = open_tracker(&path);
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.total_value(), 120_000.0);
        let ids: Vec<&str> = tracker.holdings().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum"]);
    }

    #[test]
    fn every_mutation_is_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut tracker = open_tracker(&path);

        tracker.add(new_holding("bitcoin", 2.0, 50_000.0, 5.0)).unwrap();
        assert_eq!(open_tracker(&path).get("bitcoin").unwrap().amount, 2.0);

        tracker.update_amount("bitcoin", 3.0).unwrap();
        assert_eq!(open_tracker(&path).get("bitcoin").unwrap().amount, 3.0);

        tracker
            .update_prices(&[CatalogEntry::new("bitcoin", "btc", "Bitcoin")
                .with_market_data(60_000.0, -2.0)])
            .unwrap();
        assert_eq!(open_tracker(&path).get("bitcoin").unwrap().price, 60_000.0);

        tracker.remove("bitcoin").unwrap();
        assert!(open_tracker(&path).is_empty());
    }

    #[test]
    fn malformed_stored_value_recovers_to_empty_and_heals_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(STORAGE_KEY, "[{broken json").unwrap();
        }

        let mut tracker = open_tracker(&path);
        assert!(tracker.is_empty());

        // First mutation overwrites the bad value.
        tracker.add(new_holding("bitcoin", 1.0, 0.0, 0.0)).unwrap();
        let reopened = open_tracker(&path);
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn foreign_keys_in_the_store_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("some-other-feature", "kept").unwrap();
        }

        let mut tracker = open_tracker(&path);
        tracker.add(new_holding("bitcoin", 1.0, 0.0, 0.0)).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("some-other-feature").unwrap().as_deref(), Some("kept"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// End-to-end controller session
// ═══════════════════════════════════════════════════════════════════

struct StubProvider {
    catalog: Vec<CatalogEntry>,
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn name(&self) -> &str {
        "StubProvider"
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntry>, CoreError> {
        Ok(self.catalog.clone())
    }

    async fn fetch_prices(&self, ids: &[String]) -> Result<Vec<CatalogEntry>, CoreError> {
        Ok(self
            .catalog
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }
}

/// Renderer that only keeps the latest state of each region.
#[derive(Default)]
struct StateRenderer {
    catalog_len: usize,
    list_ids: Vec<String>,
    total_value: f64,
    asset_count: usize,
}

impl Renderer for StateRenderer {
    fn render_catalog(&mut self, entries: &[CatalogEntry]) {
        self.catalog_len = entries.len();
    }

    fn render_holdings(&mut self, holdings: &[&Holding]) {
        self.list_ids = holdings.iter().map(|h| h.id.clone()).collect();
    }

    fn render_summary(&mut self, summary: &crypto_portfolio_core::models::summary::PortfolioSummary) {
        self.total_value = summary.total_value;
        self.asset_count = summary.asset_count;
    }

    fn show_form_error(&mut self, _message: &str) {}
    fn clear_form_error(&mut self) {}
    fn show_alert(&mut self, _message: &str) {}
    fn open_edit_modal(&mut self, _holding: &Holding) {}
    fn close_edit_modal(&mut self) {}
    fn reset_add_form(&mut self) {}
}

mod session {
    use super::*;

    fn provider() -> StubProvider {
        StubProvider {
            catalog: vec![
                CatalogEntry::new("bitcoin", "btc", "Bitcoin").with_market_data(50_000.0, 5.0),
                CatalogEntry::new("ethereum", "eth", "Ethereum").with_market_data(2_000.0, 10.0),
            ],
        }
    }

    #[tokio::test]
    async fn a_full_session_persists_its_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let tracker = open_tracker(&path);
            let market = MarketDataService::new(Box::new(provider()));
            let mut ctrl = ViewController::new(tracker, market, StateRenderer::default());

            ctrl.init().await;
            assert_eq!(ctrl.renderer().catalog_len, 2);

            ctrl.handle(UiEvent::AddSubmit { asset_id: "bitcoin".into(), amount: "2".into() })
                .await;
            ctrl.handle(UiEvent::AddSubmit { asset_id: "ethereum".into(), amount: "10".into() })
                .await;
            ctrl.handle(UiEvent::EditClick { asset_id: "ethereum".into() }).await;
            ctrl.handle(UiEvent::EditSave { amount: "5".into() }).await;
            ctrl.handle(UiEvent::DeleteClick { asset_id: "bitcoin".into() }).await;

            assert_eq!(ctrl.renderer().list_ids, vec!["ethereum"]);
            assert_eq!(ctrl.renderer().total_value, 10_000.0);
            assert_eq!(ctrl.renderer().asset_count, 1);
        }

        // A new process sees the same state, prices refreshed at init.
        let tracker = open_tracker(&path);
        assert_eq!(tracker.len(), 1);
        let eth = tracker.get("ethereum").unwrap();
        assert_eq!(eth.amount, 5.0);
        assert_eq!(eth.price, 2_000.0);
    }

    #[tokio::test]
    async fn restart_refreshes_prices_for_persisted_holdings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut tracker = open_tracker(&path);
            // Added at an older price.
            tracker.add(new_holding("bitcoin", 2.0, 30_000.0, 1.0)).unwrap();
        }

        let tracker = open_tracker(&path);
        let market = MarketDataService::new(Box::new(provider()));
        let mut ctrl = ViewController::new(tracker, market, StateRenderer::default());
        ctrl.init().await;

        assert_eq!(ctrl.tracker().get("bitcoin").unwrap().price, 50_000.0);
        assert_eq!(ctrl.renderer().total_value, 100_000.0);
    }
}
