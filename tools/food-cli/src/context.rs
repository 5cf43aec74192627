//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use food_commerce::services::JsonStore;
use food_commerce::session::FoodDetailsSession;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, searched in each directory from cwd up to the root.
pub const CONFIG_NAMES: [&str; 3] = ["food.toml", ".food.toml", "food.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in effect, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Log where the configuration came from. Called once tracing is up.
    pub fn log_resolution(&self) {
        match &self.config_path {
            Some(path) => debug!(config = %path.display(), "configuration loaded"),
            None => debug!(cwd = %self.cwd.display(), "no config file found, using defaults"),
        }
    }

    /// Open the configured JSON store.
    pub fn store(&self) -> Result<JsonStore> {
        let currency = self.config.currency()?;
        let path = self.resolve_path(&self.config.store.path);
        debug!(store = %path.display(), %currency, "opening store");
        Ok(JsonStore::new(path, currency))
    }

    /// A fresh session using the configured formatter and navigation policy.
    pub fn session(&self) -> Result<FoodDetailsSession> {
        let formatter = self.config.formatter()?;
        Ok(FoodDetailsSession::new(formatter).with_policy(self.config.session.navigation))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
