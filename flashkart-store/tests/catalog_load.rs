use flashkart_catalog::{default_store_policies, PriceSynthesizer};
use flashkart_store::app_config::Config;
use flashkart_store::{JsonCatalogRepository, PricedCatalog};

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

fn catalog_path() -> String {
    format!("{}/../data/catalog.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_shipped_config_matches_builtin_stores() {
    let config = Config::from_toml(DEFAULT_CONFIG).expect("Failed to parse default config");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store_policies(), default_store_policies());
}

#[tokio::test]
async fn test_shipped_catalog_prices_cleanly() {
    let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
    let repo = JsonCatalogRepository::open(catalog_path()).await.expect("Failed to open catalog");
    let synthesizer = PriceSynthesizer::new(config.pricing);

    let catalog = PricedCatalog::build(&repo, &synthesizer, config.store_policies())
        .await
        .expect("Failed to price catalog");

    assert!(!catalog.is_empty());
    for product in catalog.products() {
        assert_eq!(product.quotes.len(), catalog.policies().len());
        assert!(product.best_price <= product.entry.mrp.round() as u64);
    }

    let tomato = catalog.get("v1").unwrap();
    assert_eq!(tomato.best_price, 38);
    assert_eq!(tomato.best_store_id, "jiomart");
}
