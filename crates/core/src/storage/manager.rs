use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

use super::store::KeyValueStore;

/// The single fixed key the holdings list lives under.
pub const STORAGE_KEY: &str = "crypto-portfolio";

/// High-level persistence operations: the portfolio as a JSON array under
/// [`STORAGE_KEY`], written after every mutation, read once at startup.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the portfolio and write it under the storage key.
    pub fn save(store: &mut dyn KeyValueStore, portfolio: &Portfolio) -> Result<(), CoreError> {
        let payload = serde_json::to_string(portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))?;
        store.set(STORAGE_KEY, &payload)
    }

    /// Read the portfolio from the store. A missing value starts an empty
    /// portfolio; a malformed or unreadable one is logged and also starts
    /// empty; the next mutation overwrites it.
    pub fn load(store: &dyn KeyValueStore) -> Portfolio {
        let payload = match store.get(STORAGE_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Portfolio::new(),
            Err(e) => {
                log::warn!("Failed to read stored portfolio, starting empty: {e}");
                return Portfolio::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                log::warn!("Stored portfolio is malformed, starting empty: {e}");
                Portfolio::new()
            }
        }
    }
}
