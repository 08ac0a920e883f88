pub mod product;
pub mod store;
pub mod pricing;
pub mod basket;

pub use product::{CatalogEntry, PricedProduct, StoreQuote};
pub use store::{default_store_policies, validate_policies, DiscountRange, StorePolicy};
pub use pricing::{
    extract_seed, pseudo_random, AlgorithmVersion, PriceSynthesizer, PricingConfig, PricingError,
    RoundingMode,
};
pub use basket::{BasketComparison, BasketError, BasketLine, StoreTotal};
