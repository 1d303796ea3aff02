//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopcart_observability::LogSettings;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopcart.toml", ".shopcart.toml", "shopcart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where catalog and cart documents live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LogSettings,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both documents. Relative paths resolve against
    /// the config file's directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Catalog document name within `data_dir`.
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Cart document name within `data_dir`.
    #[serde(default = "default_cart_file")]
    pub cart_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_catalog_file() -> String {
    "product.json".to_string()
}

fn default_cart_file() -> String {
    "cart_data.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_file: default_catalog_file(),
            cart_file: default_cart_file(),
        }
    }
}

/// Generate a default shopcart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shopcart configuration

[storage]
# Relative to this file's directory.
data_dir = "."
catalog_file = "product.json"
cart_file = "cart_data.json"

[logging]
# trace, debug, info, warn or error. RUST_LOG takes precedence.
level = "warn"
# human or json
format = "human"
"#
    .to_string()
}
