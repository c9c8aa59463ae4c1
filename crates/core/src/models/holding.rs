use serde::{Deserialize, Serialize};

/// A user-owned quantity of one asset, persisted locally.
///
/// The serialized field names are the on-disk wire format. A JSON array of
/// these objects is what lands under the storage key, so renames here are
/// format changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Catalog identifier this holding refers to (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol (e.g., "btc")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Quantity owned
    pub amount: f64,

    /// Last-known unit price. 0.0 until the first price refresh.
    #[serde(default)]
    pub price: f64,

    /// Last-known 24-hour percent change. 0.0 until the first refresh.
    #[serde(default, rename = "change24h")]
    pub change_24h: f64,
}

impl Holding {
    /// Current value of this holding: `price * amount`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.price * self.amount
    }

    /// Case-insensitive substring match against name or symbol.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

impl From<NewHolding> for Holding {
    fn from(new: NewHolding) -> Self {
        Self {
            id: new.id,
            symbol: new.symbol,
            name: new.name,
            amount: new.amount,
            price: new.price,
            change_24h: new.change_24h,
        }
    }
}

/// Input record for adding to the portfolio.
///
/// `price` and `change_24h` carry defined defaults of 0.0. A holding added
/// before market data is available simply shows a zero value until the next
/// price refresh overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHolding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub price: f64,
    pub change_24h: f64,
}

impl NewHolding {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            amount,
            price: 0.0,
            change_24h: 0.0,
        }
    }

    /// Attach a fetched market snapshot to the record.
    #[must_use]
    pub fn with_market_data(mut self, price: f64, change_24h: f64) -> Self {
        self.price = price;
        self.change_24h = change_24h;
        self
    }
}
