//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use verdant_commerce::checkout::OrderNumberScheme;
use verdant_commerce::Currency;
use verdant_observability::LoggingConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["verdant.toml", ".verdant.toml", "verdant.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text, TOML unless `json` is set.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Look up a dot-separated key, e.g. `checkout.order_numbers`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let value = serde_json::to_value(self).ok()?;
        let pointer = format!("/{}", key.replace('.', "/"));
        value.pointer(&pointer).cloned()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Name shown in headers.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Currency for the cart. Must match the catalog's prices.
    #[serde(default)]
    pub currency: Currency,

    /// Path to a TOML catalog. The built-in plant catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_shop_name() -> String {
    "Verdant".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            currency: Currency::default(),
            catalog: None,
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// How confirmation numbers are produced.
    #[serde(default)]
    pub order_numbers: OrderNumberScheme,

    /// First number for the sequential scheme.
    #[serde(default = "default_sequence_start")]
    pub sequence_start: u32,
}

fn default_sequence_start() -> u32 {
    1000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            order_numbers: OrderNumberScheme::default(),
            sequence_start: default_sequence_start(),
        }
    }
}

/// Generate a default verdant.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Verdant storefront configuration

[shop]
name = "{name}"
currency = "USD"
# catalog = "plants.toml"

[checkout]
# "random" draws a cosmetic number below 10000; "sequential" counts up.
order_numbers = "random"
sequence_start = 1000

[logging]
level = "warn"
format = "human"
"#,
        name = name
    )
}
