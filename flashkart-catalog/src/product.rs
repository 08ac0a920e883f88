use serde::{Deserialize, Serialize};

/// A grocery item as authored in the catalog, before any store pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Catalog id, e.g. `"v1"` or `"g23"`. Its digits anchor the price seed
    /// unless `seed` is set.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Selling unit shown next to the price, e.g. `"1 kg"` or `"500 ml"`.
    pub unit: String,
    /// Maximum retail price; the ceiling for every store quote.
    pub mrp: f64,
    /// Explicit seed assigned when the entry was authored. Overrides digit
    /// extraction from `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
        mrp: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            unit: unit.into(),
            mrp,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One partner store's derived price and stock flag for a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreQuote {
    pub store_id: String,
    pub price: u64,
    pub available: bool,
}

/// A catalog entry enriched with one quote per store and the best offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Position-aligned with the store policy table used to price it.
    pub quotes: Vec<StoreQuote>,
    pub best_price: u64,
    pub best_store_id: String,
    /// `false` when no store has stock; `best_price` then comes from the
    /// first store regardless of availability.
    pub in_stock: bool,
}

impl PricedProduct {
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    /// Get the quote for a given store
    pub fn quote_for(&self, store_id: &str) -> Option<&StoreQuote> {
        self.quotes.iter().find(|q| q.store_id == store_id)
    }

    pub fn available_quotes(&self) -> impl Iterator<Item = &StoreQuote> {
        self.quotes.iter().filter(|q| q.available)
    }

    /// The quote `best_price` was taken from.
    pub fn best_quote(&self) -> Option<&StoreQuote> {
        self.quote_for(&self.best_store_id)
    }
}
