use std::collections::HashMap;

use flashkart_catalog::{
    validate_policies, BasketComparison, BasketError, BasketLine, PriceSynthesizer, PricedProduct,
    StorePolicy,
};

use crate::catalog_repo::CatalogRepository;
use crate::StoreResult;

/// Catalog priced once against a fixed store table.
///
/// Pricing is a pure function of the entries and the table, so the result is
/// computed at startup and shared read-only.
pub struct PricedCatalog {
    products: Vec<PricedProduct>,
    index: HashMap<String, usize>,
    policies: Vec<StorePolicy>,
}

impl PricedCatalog {
    pub async fn build(
        repo: &dyn CatalogRepository,
        synthesizer: &PriceSynthesizer,
        policies: Vec<StorePolicy>,
    ) -> StoreResult<Self> {
        validate_policies(&policies)?;

        let entries = repo.list_entries().await?;
        let products = synthesizer.synthesize_catalog(&entries, &policies)?;

        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id().to_string(), i))
            .collect();

        let out_of_stock = products.iter().filter(|p| !p.in_stock).count();
        tracing::info!(
            products = products.len(),
            stores = policies.len(),
            out_of_stock,
            algorithm = ?synthesizer.config().algorithm,
            "Priced catalog built"
        );

        Ok(Self { products, index, policies })
    }

    pub fn products(&self) -> &[PricedProduct] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&PricedProduct> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Products in `category`, compared case-insensitively.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PricedProduct> {
        self.products
            .iter()
            .filter(move |p| p.entry.category.eq_ignore_ascii_case(category))
    }

    pub fn policies(&self) -> &[StorePolicy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn compare_basket(&self, lines: &[BasketLine]) -> Result<BasketComparison, BasketError> {
        BasketComparison::compute(lines, &self.policies, |id| self.get(id))
    }
}
