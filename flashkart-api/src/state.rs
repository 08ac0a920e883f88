use std::sync::Arc;

use flashkart_catalog::PriceSynthesizer;
use flashkart_store::PricedCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PricedCatalog>,
    pub synthesizer: Arc<PriceSynthesizer>,
}

impl AppState {
    pub fn new(catalog: PricedCatalog, synthesizer: PriceSynthesizer) -> Self {
        Self {
            catalog: Arc::new(catalog),
            synthesizer: Arc::new(synthesizer),
        }
    }
}
