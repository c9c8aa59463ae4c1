use std::time::{Duration, Instant};

use crate::errors::CoreError;
use crate::models::catalog::CatalogEntry;
use crate::models::holding::NewHolding;
use crate::models::sort::SortKey;
use crate::services::market_service::MarketDataService;
use crate::PortfolioTracker;

use super::events::UiEvent;
use super::render::Renderer;

/// How long an inline form error stays visible before [`ViewController::tick`]
/// clears it.
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

const MSG_SELECT_ASSET: &str = "Select an asset and enter an amount";
const MSG_AMOUNT_POSITIVE: &str = "Amount must be greater than zero";
const MSG_FETCH_FAILED: &str = "Could not fetch market data. Please try again later.";
const MSG_INVALID_AMOUNT: &str = "Please enter a valid amount";

/// Parse a raw quantity field into a positive, finite real number.
/// The whole string must be numeric; trailing garbage is a failure, not a
/// partial parse.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidAmount("amount is empty".into()));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::InvalidAmount(format!(
            "{amount} is not a positive amount"
        )));
    }
    Ok(amount)
}

/// Orchestrates the tracker, the market data service and a renderer over
/// the lifecycle of a page load.
///
/// Single-threaded and event-driven: [`handle`](Self::handle) awaits its
/// network suspension points inline, so events run to completion in arrival
/// order and a resolved fetch is always applied. There is no cancellation
/// or superseding of in-flight requests.
pub struct ViewController<R: Renderer> {
    tracker: PortfolioTracker,
    market: MarketDataService,
    renderer: R,
    catalog: Vec<CatalogEntry>,
    search_term: String,
    sort_key: Option<SortKey>,
    /// Asset id the edit modal is open for, if any.
    editing: Option<String>,
    error_deadline: Option<Instant>,
}

impl<R: Renderer> ViewController<R> {
    pub fn new(tracker: PortfolioTracker, market: MarketDataService, renderer: R) -> Self {
        Self {
            tracker,
            market,
            renderer,
            catalog: Vec::new(),
            search_term: String::new(),
            sort_key: None,
            editing: None,
            error_deadline: None,
        }
    }

    /// Page-load sequence: fetch the catalog and populate the picker, then
    /// refresh prices for whatever is already held, then draw everything.
    pub async fn init(&mut self) {
        self.catalog = self.market.list_catalog().await;
        self.renderer.render_catalog(&self.catalog);

        if !self.tracker.is_empty() {
            let ids = self.tracker.held_ids();
            let records = self.market.fetch_prices(&ids).await;
            if let Err(e) = self.tracker.update_prices(&records) {
                log::error!("Failed to persist refreshed prices: {e}");
            }
        }

        self.render_list();
        self.render_summary();
    }

    /// Dispatch one user interaction. Runs to completion before the next
    /// event is processed.
    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::AddSubmit { asset_id, amount } => self.handle_add(asset_id, amount).await,
            UiEvent::SearchInput { term } => {
                self.search_term = term.trim().to_string();
                self.render_list();
            }
            UiEvent::SortChange { criterion } => {
                self.sort_key = criterion.parse().ok();
                self.render_list();
            }
            UiEvent::DeleteClick { asset_id } => {
                if let Err(e) = self.tracker.remove(&asset_id) {
                    log::error!("Failed to persist removal: {e}");
                }
                self.render_list();
                self.render_summary();
            }
            UiEvent::EditClick { asset_id } => {
                // Unknown id: no modal, nothing happens.
                if let Some(holding) = self.tracker.get(&asset_id) {
                    self.renderer.open_edit_modal(holding);
                    self.editing = Some(asset_id);
                }
            }
            UiEvent::EditSave { amount } => self.handle_edit_save(&amount),
            UiEvent::ModalDismiss => {
                self.renderer.close_edit_modal();
                self.editing = None;
            }
        }
    }

    /// Clear an expired inline error. Frontends call this from their event
    /// loop with the current time.
    pub fn tick(&mut self, now: Instant) {
        if self.error_deadline.is_some_and(|deadline| now >= deadline) {
            self.renderer.clear_form_error();
            self.error_deadline = None;
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn tracker(&self) -> &PortfolioTracker {
        &self.tracker
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    // ── Event handlers ──────────────────────────────────────────────

    async fn handle_add(&mut self, asset_id: String, amount: String) {
        if asset_id.is_empty() || amount.trim().is_empty() {
            self.show_error(MSG_SELECT_ASSET);
            return;
        }
        let quantity = match parse_amount(&amount) {
            Ok(quantity) => quantity,
            Err(_) => {
                self.show_error(MSG_AMOUNT_POSITIVE);
                return;
            }
        };
        let Some(selected) = self.catalog.iter().find(|c| c.id == asset_id).cloned() else {
            self.show_error(MSG_SELECT_ASSET);
            return;
        };

        // A swallowed fetch failure and an unknown id look the same here:
        // no record, no add, same inline error.
        let records = self.market.fetch_prices(std::slice::from_ref(&asset_id)).await;
        let Some(record) = records.first() else {
            self.show_error(MSG_FETCH_FAILED);
            return;
        };

        let new = NewHolding::new(selected.id, selected.symbol, selected.name, quantity)
            .with_market_data(record.current_price, record.change_24h);
        if let Err(e) = self.tracker.add(new) {
            log::error!("Failed to persist holdings: {e}");
        }

        self.render_list();
        self.render_summary();
        self.renderer.reset_add_form();
        self.clear_error();
    }

    fn handle_edit_save(&mut self, amount: &str) {
        let Some(asset_id) = self.editing.clone() else {
            return;
        };
        let quantity = match parse_amount(amount) {
            Ok(quantity) => quantity,
            Err(_) => {
                // Modal stays open so the user can correct the field.
                self.renderer.show_alert(MSG_INVALID_AMOUNT);
                return;
            }
        };
        if let Err(e) = self.tracker.update_amount(&asset_id, quantity) {
            log::error!("Failed to persist amount change: {e}");
        }
        self.render_list();
        self.render_summary();
        self.renderer.close_edit_modal();
        self.editing = None;
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Redraw the holdings list. While a search term is active the list
    /// shows the filtered projection; sorting applies only to the
    /// unfiltered view.
    fn render_list(&mut self) {
        let rows = if self.search_term.is_empty() {
            self.tracker.sorted(self.sort_key)
        } else {
            self.tracker.filter(&self.search_term)
        };
        self.renderer.render_holdings(&rows);
    }

    fn render_summary(&mut self) {
        let summary = self.tracker.summary();
        self.renderer.render_summary(&summary);
    }

    fn show_error(&mut self, message: &str) {
        self.renderer.show_form_error(message);
        self.error_deadline = Some(Instant::now() + ERROR_DISPLAY_DURATION);
    }

    fn clear_error(&mut self) {
        self.renderer.clear_form_error();
        self.error_deadline = None;
    }
}
