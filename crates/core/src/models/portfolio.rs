use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::holding::Holding;

/// The main data container: every holding the user owns.
///
/// Internally an id-keyed map with preserved insertion order, so lookups and
/// in-place updates are O(1) while iteration yields holdings in the order
/// they were first added (the default display order).
///
/// Serializes as a plain JSON array of holdings in insertion order, which
/// is the exact payload written under the storage key.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    by_id: HashMap<String, Holding>,
    order: Vec<String>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a portfolio from a sequence of holdings. A duplicated id keeps
    /// the first occurrence's position; the last value wins.
    pub fn from_holdings(holdings: impl IntoIterator<Item = Holding>) -> Self {
        let mut portfolio = Self::new();
        for holding in holdings {
            portfolio.insert(holding);
        }
        portfolio
    }

    /// Insert or replace the holding with the same id. A replaced holding
    /// keeps its original position in the iteration order.
    pub fn insert(&mut self, holding: Holding) {
        if !self.by_id.contains_key(&holding.id) {
            self.order.push(holding.id.clone());
        }
        self.by_id.insert(holding.id.clone(), holding);
    }

    pub fn get(&self, id: &str) -> Option<&Holding> {
        self.by_id.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Holding> {
        self.by_id.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Remove the holding with `id`, keeping the order of the rest intact.
    /// Returns the removed holding, or `None` if absent.
    pub fn remove(&mut self, id: &str) -> Option<Holding> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    /// Iterate holdings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Identifiers of all held assets, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for Portfolio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.order.len()))?;
        for holding in self.iter() {
            seq.serialize_element(holding)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Portfolio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let holdings = Vec::<Holding>::deserialize(deserializer)?;
        Ok(Self::from_holdings(holdings))
    }
}
