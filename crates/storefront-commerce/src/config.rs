//! Store configuration.

use std::path::Path;

use crate::cart::PricingPolicy;
use crate::money::Money;
use crate::search::{FilterCriteria, PriceRange};
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use storefront_observability::LoggingConfig;

/// Store configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Filter sidebar defaults.
    #[serde(default)]
    pub filters: FilterDefaults,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            tax_rate_bps = config.pricing.tax_rate_bps,
            "store config loaded"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        serde_json::from_str(content).map_err(|e| CommerceError::Config(e.to_string()))
    }

    /// Save config to a file, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CommerceError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self).map_err(|e| CommerceError::Serialization(e.to_string()))?
        };

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Initial price slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default)]
    pub min_price_cents: i64,

    #[serde(default = "default_max_price")]
    pub max_price_cents: i64,
}

fn default_max_price() -> i64 {
    100_000
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            min_price_cents: 0,
            max_price_cents: default_max_price(),
        }
    }
}

impl FilterDefaults {
    /// Fresh criteria with the configured price bounds.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_range: PriceRange::new(
                Money::usd(self.min_price_cents),
                Money::usd(self.max_price_cents),
            ),
            ..FilterCriteria::default()
        }
    }
}
