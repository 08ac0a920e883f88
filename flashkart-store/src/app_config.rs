use flashkart_catalog::{default_store_policies, PricingConfig, StorePolicy};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Partner store table, in pricing order. Empty means the built-in table.
    #[serde(default)]
    pub stores: Vec<StorePolicy>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON file holding the catalog entries
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local, uncommitted overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `FLASHKART__SERVER__PORT=9000` sets `server.port`
            .add_source(config::Environment::with_prefix("FLASHKART").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build from TOML text alone, without files or environment.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn store_policies(&self) -> Vec<StorePolicy> {
        if self.stores.is_empty() {
            default_store_policies()
        } else {
            self.stores.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkart_catalog::{AlgorithmVersion, RoundingMode};

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080

            [catalog]
            path = "data/catalog.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.path, "data/catalog.json");
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.store_policies(), default_store_policies());
    }

    #[test]
    fn test_custom_stores_and_pricing() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000

            [catalog]
            path = "catalog.json"

            [pricing]
            algorithm = "v2_keyed"
            rounding = "half_even"

            [[stores]]
            store_id = "corner"
            display_name = "Corner Shop"
            logo_glyph = "🏪"
            availability_probability = 0.5
            discount_range = { min = 0.0, max = 0.05 }
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.algorithm, AlgorithmVersion::V2Keyed);
        assert_eq!(config.pricing.rounding, RoundingMode::HalfEven);

        let stores = config.store_policies();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].store_id, "corner");
        assert_eq!(stores[0].discount_range.max, 0.05);
        assert_eq!(stores[0].availability_probability, 0.5);
    }

    #[test]
    fn test_missing_server_section_fails() {
        let result = Config::from_toml("[catalog]\npath = \"x.json\"\n");
        assert!(result.is_err());
    }
}
