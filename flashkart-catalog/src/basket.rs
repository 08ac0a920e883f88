use serde::{Deserialize, Serialize};

use crate::product::PricedProduct;
use crate::store::StorePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLine {
    pub product_id: String,
    pub quantity: u32,
}

impl BasketLine {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self { product_id: product_id.into(), quantity }
    }
}

/// What the basket costs at a single store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTotal {
    pub store_id: String,
    /// Sum over the lines this store can fill.
    pub total: u64,
    /// Product ids the store has no stock for.
    pub missing: Vec<String>,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketComparison {
    pub stores: Vec<StoreTotal>,
    pub cheapest_complete_store: Option<String>,
    /// Every item bought at its own best store.
    pub best_mix_total: u64,
    pub mrp_total: u64,
    pub savings: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("Basket is empty")]
    Empty,

    #[error("Invalid quantity for {0}: must be at least 1")]
    InvalidQuantity(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

impl BasketComparison {
    /// Compare a basket across stores. `lookup` resolves product ids to
    /// priced products; `policies` fixes the store order of the result.
    pub fn compute<'a, F>(
        lines: &[BasketLine],
        policies: &[StorePolicy],
        lookup: F,
    ) -> Result<Self, BasketError>
    where
        F: Fn(&str) -> Option<&'a PricedProduct>,
    {
        if lines.is_empty() {
            return Err(BasketError::Empty);
        }

        // Merge repeated ids, keeping first-seen order
        let mut merged: Vec<(&'a PricedProduct, u64)> = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity == 0 {
                return Err(BasketError::InvalidQuantity(line.product_id.clone()));
            }
            let product = lookup(line.product_id.as_str())
                .ok_or_else(|| BasketError::UnknownProduct(line.product_id.clone()))?;

            match merged.iter_mut().find(|(p, _)| p.id() == product.id()) {
                Some((_, qty)) => *qty = qty.saturating_add(u64::from(line.quantity)),
                None => merged.push((product, u64::from(line.quantity))),
            }
        }

        let stores: Vec<StoreTotal> = policies
            .iter()
            .map(|policy| {
                let mut total: u64 = 0;
                let mut missing = Vec::new();
                for (product, qty) in &merged {
                    match product.quote_for(&policy.store_id) {
                        Some(quote) if quote.available => {
                            total = total.saturating_add(quote.price.saturating_mul(*qty))
                        }
                        _ => missing.push(product.id().to_string()),
                    }
                }
                StoreTotal {
                    store_id: policy.store_id.clone(),
                    total,
                    complete: missing.is_empty(),
                    missing,
                }
            })
            .collect();

        let cheapest_complete_store = stores
            .iter()
            .filter(|s| s.complete)
            .min_by_key(|s| s.total)
            .map(|s| s.store_id.clone());

        // Totals clamp at u64::MAX rather than wrap
        let best_mix_total = merged
            .iter()
            .fold(0u64, |acc, (p, qty)| acc.saturating_add(p.best_price.saturating_mul(*qty)));
        let mrp_total = merged.iter().fold(0u64, |acc, (p, qty)| {
            acc.saturating_add((p.entry.mrp.round() as u64).saturating_mul(*qty))
        });

        Ok(Self {
            stores,
            cheapest_complete_store,
            best_mix_total,
            mrp_total,
            savings: mrp_total.saturating_sub(best_mix_total),
        })
    }
}
