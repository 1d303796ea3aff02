//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopcart_commerce::prelude::*;
use shopcart_store::JsonFileStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Cart service over the configured JSON documents.
pub type FileCartService = CartService<JsonFileStore<Catalog>, JsonFileStore<Cart>>;

/// Catalog service over the configured JSON document.
pub type FileCatalogService = CatalogService<JsonFileStore<Catalog>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve(cwd, Path::new(path))),
            // Try to find config in current directory or parent directories
            None => find_config(cwd),
        };

        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Directory holding the catalog and cart documents.
    pub fn data_dir(&self) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd);
        resolve(base, &self.config.storage.data_dir)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir().join(&self.config.storage.catalog_file)
    }

    pub fn cart_path(&self) -> PathBuf {
        self.data_dir().join(&self.config.storage.cart_file)
    }

    pub fn catalog_service(&self) -> FileCatalogService {
        CatalogService::new(JsonFileStore::new(self.catalog_path()))
    }

    pub fn cart_service(&self) -> FileCartService {
        CartService::new(
            JsonFileStore::new(self.catalog_path()),
            JsonFileStore::new(self.cart_path()),
        )
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Resolve `path` against `base` unless it is already absolute.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
