pub mod app_config;
pub mod catalog_repo;
pub mod priced_catalog;

pub use catalog_repo::{CatalogRepository, JsonCatalogRepository};
pub use priced_catalog::PricedCatalog;

use flashkart_catalog::PricingError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type StoreResult<T> = Result<T, StoreError>;
