use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Half-open discount interval `[min, max)`, as fractions of MRP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRange {
    pub min: f64,
    pub max: f64,
}

impl DiscountRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Static pricing behaviour of one partner store.
///
/// Snake-case aliases let the same table be read from TOML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePolicy {
    #[serde(alias = "store_id")]
    pub store_id: String,
    #[serde(alias = "display_name")]
    pub display_name: String,
    #[serde(alias = "logo_glyph", default)]
    pub logo_glyph: String,
    #[serde(alias = "discount_range")]
    pub discount_range: DiscountRange,
    /// Chance in `[0, 1]` that the store stocks a given item.
    #[serde(alias = "availability_probability")]
    pub availability_probability: f64,
}

impl StorePolicy {
    pub fn new(
        store_id: impl Into<String>,
        display_name: impl Into<String>,
        logo_glyph: impl Into<String>,
        discount_range: DiscountRange,
        availability_probability: f64,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            display_name: display_name.into(),
            logo_glyph: logo_glyph.into(),
            discount_range,
            availability_probability,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.store_id.trim().is_empty() {
            return Err(PricingError::InvalidInput("store id must not be empty".to_string()));
        }

        let DiscountRange { min, max } = self.discount_range;
        let in_unit = |v: f64| v.is_finite() && (0.0..1.0).contains(&v);
        if !in_unit(min) || !in_unit(max) || min >= max {
            return Err(PricingError::InvalidInput(format!(
                "store {}: discount range [{}, {}) must satisfy 0 <= min < max < 1",
                self.store_id, min, max
            )));
        }

        let p = self.availability_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PricingError::InvalidInput(format!(
                "store {}: availability probability {} outside [0, 1]",
                self.store_id, p
            )));
        }

        Ok(())
    }
}

/// Checks a whole policy table: non-empty, every policy valid, unique ids.
pub fn validate_policies(policies: &[StorePolicy]) -> Result<(), PricingError> {
    if policies.is_empty() {
        return Err(PricingError::InvalidInput("store policy table is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for policy in policies {
        policy.validate()?;
        if !seen.insert(policy.store_id.as_str()) {
            return Err(PricingError::InvalidInput(format!(
                "duplicate store id: {}",
                policy.store_id
            )));
        }
    }

    Ok(())
}

/// Built-in partner stores, in the order the positional algorithm relies on.
pub fn default_store_policies() -> Vec<StorePolicy> {
    vec![
        StorePolicy::new("dmart", "DMart", "🛒", DiscountRange::new(0.08, 0.20), 0.95),
        StorePolicy::new("bigbasket", "BigBasket", "🧺", DiscountRange::new(0.05, 0.15), 0.90),
        StorePolicy::new("blinkit", "Blinkit", "⚡", DiscountRange::new(0.00, 0.10), 0.85),
        StorePolicy::new("zepto", "Zepto", "🛵", DiscountRange::new(0.03, 0.12), 0.88),
        StorePolicy::new("jiomart", "JioMart", "🏬", DiscountRange::new(0.06, 0.18), 0.92),
    ]
}
