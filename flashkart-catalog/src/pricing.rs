use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::product::{CatalogEntry, PricedProduct, StoreQuote};
use crate::store::{validate_policies, StorePolicy};

/// Offset between the discount draw and the availability draw of one store.
const AVAILABILITY_OFFSET: f64 = 50.0;

/// Sub-seed stride between consecutive entries' store sequences.
const STORE_STRIDE: f64 = 100.0;

/// Which derivation turns a seed into per-store randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmVersion {
    /// `sin`-based draws keyed on `seed * 100 + position`.
    /// Reordering the store table changes every quote.
    #[default]
    #[serde(rename = "v1_positional")]
    V1Positional,
    /// SHA-256 draws keyed on `(seed, store_id)`; independent of table order.
    #[serde(rename = "v2_keyed")]
    V2Keyed,
}

/// How a fractional price is turned into a whole one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// `x.5` goes up for positive prices.
    #[default]
    HalfAwayFromZero,
    /// `x.5` goes to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> u64 {
        let rounded = match self {
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::HalfEven => value.round_ties_even(),
        };
        rounded.max(0.0) as u64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub algorithm: AlgorithmVersion,
    #[serde(default)]
    pub rounding: RoundingMode,
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to price catalog entry {id}: {source}")]
    Entry {
        id: String,
        #[source]
        source: Box<PricingError>,
    },
}

/// Fractional part of `sin(seed) * 10000`.
///
/// Deliberately low quality: it only needs `sin` and `floor`, so any runtime
/// with IEEE-754 doubles reproduces the same stream.
pub fn pseudo_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// Concatenates the ASCII digits of `id` into a base-10 seed.
/// Ids without digits seed with `1`.
///
/// The seed is a double: digit runs past 2^53 lose precision instead of
/// failing, so every id prices.
pub fn extract_seed(id: &str) -> f64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 1.0;
    }

    digits.parse::<f64>().unwrap_or(1.0)
}

/// Derives per-store quotes and the best offer for catalog entries.
///
/// Holds configuration only; a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PriceSynthesizer {
    config: PricingConfig,
}

impl PriceSynthesizer {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PricingConfig {
        self.config
    }

    /// Price one entry against an ordered store table.
    pub fn synthesize(
        &self,
        entry: &CatalogEntry,
        policies: &[StorePolicy],
    ) -> Result<PricedProduct, PricingError> {
        if !entry.mrp.is_finite() || entry.mrp <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "entry {}: mrp must be a positive finite number, got {}",
                entry.id, entry.mrp
            )));
        }
        validate_policies(policies)?;

        let seed = match entry.seed {
            Some(seed) => seed as f64,
            None => extract_seed(&entry.id),
        };

        let quotes: Vec<StoreQuote> = policies
            .iter()
            .enumerate()
            .map(|(position, policy)| self.quote(entry.mrp, seed, position, policy))
            .collect();

        let best = quotes
            .iter()
            .filter(|q| q.available)
            .min_by_key(|q| q.price);
        let in_stock = best.is_some();

        // No store has it: keep the first store's price as the headline.
        let best = match best.or_else(|| quotes.first()) {
            Some(quote) => quote.clone(),
            None => {
                return Err(PricingError::InvalidInput("store policy table is empty".to_string()))
            }
        };

        if !in_stock {
            tracing::warn!(
                entry_id = %entry.id,
                store_id = %best.store_id,
                "No store has stock, falling back to first store price"
            );
        }

        tracing::debug!(
            entry_id = %entry.id,
            seed,
            best_price = best.price,
            best_store = %best.store_id,
            "Synthesized store quotes"
        );

        Ok(PricedProduct {
            entry: entry.clone(),
            quotes,
            best_price: best.price,
            best_store_id: best.store_id,
            in_stock,
        })
    }

    /// Price every entry in order, stopping at the first invalid one.
    pub fn synthesize_catalog(
        &self,
        entries: &[CatalogEntry],
        policies: &[StorePolicy],
    ) -> Result<Vec<PricedProduct>, PricingError> {
        entries
            .iter()
            .map(|entry| {
                self.synthesize(entry, policies).map_err(|source| PricingError::Entry {
                    id: entry.id.clone(),
                    source: Box::new(source),
                })
            })
            .collect()
    }

    fn quote(&self, mrp: f64, seed: f64, position: usize, policy: &StorePolicy) -> StoreQuote {
        let (discount_draw, stock_draw) = match self.config.algorithm {
            AlgorithmVersion::V1Positional => {
                let sub_seed = seed * STORE_STRIDE + position as f64;
                (pseudo_random(sub_seed), pseudo_random(sub_seed + AVAILABILITY_OFFSET))
            }
            AlgorithmVersion::V2Keyed => (
                keyed_fraction(seed, &policy.store_id, "discount"),
                keyed_fraction(seed, &policy.store_id, "stock"),
            ),
        };

        let discount = policy.discount_range.min + discount_draw * policy.discount_range.width();

        StoreQuote {
            store_id: policy.store_id.clone(),
            price: self.config.rounding.round(mrp * (1.0 - discount)),
            available: stock_draw < policy.availability_probability,
        }
    }
}

/// Uniform fraction in `[0, 1)` from the top 53 bits of a SHA-256 digest.
fn keyed_fraction(seed: f64, store_id: &str, stream: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_bits().to_be_bytes());
    hasher.update(store_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(stream.as_bytes());
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) >> 11) as f64 / (1u64 << 53) as f64
}
