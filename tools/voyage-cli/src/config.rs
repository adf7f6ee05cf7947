//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use voyage_commerce::money::CURRENCY_SYMBOL;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoyageConfig {
    /// Where collections are stored.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

impl VoyageConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the JSON blobs, relative to the config file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".voyage")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON log lines.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Storefront display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    CURRENCY_SYMBOL.to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = VoyageConfig::parse("voyage.toml", "[logging]\njson = true\n").unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.storage.data_dir, PathBuf::from(".voyage"));
        assert_eq!(config.storefront.currency_symbol, "$");
    }

    #[test]
    fn test_json_config() {
        let config = VoyageConfig::parse(
            "voyage.json",
            r#"{"storage": {"data_dir": "/tmp/shop"}, "storefront": {"currency_symbol": "€"}}"#,
        )
        .unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.storefront.currency_symbol, "€");
    }

    #[test]
    fn test_load_missing_file() {
        let err = VoyageConfig::load("/nonexistent/voyage.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
