//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use voyage_commerce::{Money, Storefront};
use voyage_store::FileStore;

use crate::config::VoyageConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["voyage.toml", ".voyage.toml", "voyage.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: VoyageConfig,
    /// Output handler.
    pub output: Output,
    /// Directory holding the stored collections.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// A relative `data_dir` from a config file is taken relative to that
    /// file. `data_dir_override` is taken relative to the working directory.
    pub fn load(
        config_path: Option<&str>,
        data_dir_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base) = if let Some(path) = config_path {
            let config = VoyageConfig::load(path)?;
            let base = Path::new(path)
                .parent()
                .map(|p| cwd.join(p))
                .unwrap_or_else(|| cwd.clone());
            (config, base)
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (VoyageConfig::default(), cwd.clone()))
        };

        let data_dir = match data_dir_override {
            Some(dir) => cwd.join(dir),
            None => base.join(&config.storage.data_dir),
        };

        Ok(Self {
            config,
            output,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(VoyageConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = VoyageConfig::load(config_path.to_str()?) {
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the storefront over the data directory.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let store = FileStore::open(&self.data_dir).with_context(|| {
            format!("Failed to open data directory: {}", self.data_dir.display())
        })?;
        self.output
            .debug(&format!("Using data directory {}", self.data_dir.display()));
        Ok(Storefront::with_builtin_catalog(store))
    }

    /// Format an amount with the configured currency symbol.
    pub fn money(&self, amount: Money) -> String {
        amount.display_with(&self.config.storefront.currency_symbol)
    }
}
