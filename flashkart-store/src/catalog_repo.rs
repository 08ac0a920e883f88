use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use flashkart_catalog::CatalogEntry;

use crate::{StoreError, StoreResult};

/// Source of catalog entries.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All entries, in authoring order
    async fn list_entries(&self) -> StoreResult<Vec<CatalogEntry>>;

    async fn get_entry(&self, id: &str) -> StoreResult<Option<CatalogEntry>>;
}

/// Catalog backed by a JSON array of entries, held in memory once read.
pub struct JsonCatalogRepository {
    entries: Vec<CatalogEntry>,
}

impl JsonCatalogRepository {
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let repo = Self::from_json(&text)?;
        tracing::info!("Loaded {} catalog entries from {}", repo.entries.len(), path.display());
        Ok(repo)
    }

    pub fn from_json(text: &str) -> StoreResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(text)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> StoreResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(StoreError::DuplicateEntry(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn list_entries(&self) -> StoreResult<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }

    async fn get_entry(&self, id: &str) -> StoreResult<Option<CatalogEntry>> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }
}
