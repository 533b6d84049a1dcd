use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{
    discount::{DiscountError, DiscountRegistry, PercentageDiscount},
    models::product::{Catalog, CatalogError},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid discount: {0}")]
    Discount(#[from] DiscountError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountSetting {
    pub key: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub currency_symbol: String,
    pub default_discount: String,
    pub catalog: Catalog,
    pub discounts: Vec<DiscountSetting>,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        Self::load_with(
            config_path,
            "config.toml",
            Environment::with_prefix("CHECKOUT"),
        )
    }

    fn load_with(
        config_path: &Option<String>,
        default_path: &str,
        environment: Environment,
    ) -> Result<Self, SettingsError> {
        let default = Self::default();

        let settings = match Self::load_from_file(config_path, default_path, environment) {
            Ok(settings) => settings,
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.",);
                default
            }
            Err(err) => return Err(err),
        };

        settings.catalog.validate()?;

        Ok(settings)
    }

    fn load_from_file(
        config_path: &Option<String>,
        default_path: &str,
        environment: Environment,
    ) -> Result<Self, SettingsError> {
        let path = config_path.as_deref().unwrap_or(default_path);

        let config = Config::builder()
            .add_source(File::with_name(path).required(config_path.is_some()))
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(config)
    }

    /// Builtin discounts plus the ones declared under `discounts`.
    pub fn discount_registry(&self) -> Result<DiscountRegistry, SettingsError> {
        let mut registry = DiscountRegistry::new();

        for setting in &self.discounts {
            registry.register(PercentageDiscount::new(&setting.key, setting.rate)?)?;
        }

        Ok(registry)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_discount: "none".to_string(),
            catalog: Catalog::default(),
            discounts: Vec::new(),
        }
    }
}
