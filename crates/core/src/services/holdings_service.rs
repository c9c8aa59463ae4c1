use crate::models::catalog::CatalogEntry;
use crate::models::holding::{Holding, NewHolding};
use crate::models::portfolio::Portfolio;
use crate::models::sort::SortKey;

/// Mutations and projections over the holdings list.
///
/// Pure in-memory logic with no I/O. Persistence timing is the owner's
/// concern.
///
/// None of the mutations validate amounts: the store trusts its callers,
/// and input validation lives in the UI layer. `update_amount` will happily
/// write a zero.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Add a holding. If one with the same id already exists, its amount is
    /// incremented instead; price, name and symbol stay as they were
    /// until the next price refresh.
    pub fn add(&self, portfolio: &mut Portfolio, new: NewHolding) {
        match portfolio.get_mut(&new.id) {
            Some(existing) => existing.amount += new.amount,
            None => portfolio.insert(Holding::from(new)),
        }
    }

    /// Overwrite price and 24h change on every holding that matches a price
    /// record; holdings with no match are left unchanged.
    pub fn update_prices(&self, portfolio: &mut Portfolio, records: &[CatalogEntry]) {
        for record in records {
            if let Some(holding) = portfolio.get_mut(&record.id) {
                holding.price = record.current_price;
                holding.change_24h = record.change_24h;
            }
        }
    }

    /// Delete the holding with `id`. Returns whether anything was removed;
    /// an unknown id is a silent no-op.
    pub fn remove(&self, portfolio: &mut Portfolio, id: &str) -> bool {
        portfolio.remove(id).is_some()
    }

    /// Overwrite the amount on the matching holding. Returns whether a
    /// holding was found; an unknown id is a silent no-op.
    pub fn update_amount(&self, portfolio: &mut Portfolio, id: &str, amount: f64) -> bool {
        match portfolio.get_mut(id) {
            Some(holding) => {
                holding.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring filter against name or symbol. An empty
    /// term returns the full list in insertion order.
    pub fn filter<'a>(&self, portfolio: &'a Portfolio, term: &str) -> Vec<&'a Holding> {
        if term.is_empty() {
            return portfolio.iter().collect();
        }
        portfolio.iter().filter(|h| h.matches(term)).collect()
    }

    /// A freshly ordered projection of the holdings. `None` leaves the list
    /// in insertion order. Name ordering compares case-insensitively; value
    /// ties keep their relative insertion order (stable sort).
    pub fn sorted<'a>(&self, portfolio: &'a Portfolio, key: Option<SortKey>) -> Vec<&'a Holding> {
        let mut holdings: Vec<&Holding> = portfolio.iter().collect();
        match key {
            Some(SortKey::NameAsc) => {
                holdings.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            Some(SortKey::NameDesc) => {
                holdings.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
            }
            Some(SortKey::ValueAsc) => {
                holdings.sort_by(|a, b| {
                    a.value()
                        .partial_cmp(&b.value())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            Some(SortKey::ValueDesc) => {
                holdings.sort_by(|a, b| {
                    b.value()
                        .partial_cmp(&a.value())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            None => {}
        }
        holdings
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}
