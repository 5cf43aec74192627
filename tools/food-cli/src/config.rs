//! CLI configuration.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use food_commerce::format::{LocaleFormatter, MoneyFormatter, SymbolFormatter};
use food_commerce::session::NavigationPolicy;
use food_commerce::Currency;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where foods, orders and favorites live.
    #[serde(default)]
    pub store: StoreConfig,

    /// Currency and display rules.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Session behaviour.
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config: {}", path))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        let config: CliConfig = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the commands could not act on.
    pub fn validate(&self) -> Result<()> {
        if self.store.path.trim().is_empty() {
            bail!("store.path must not be empty");
        }
        self.currency()?;
        self.formatter()?;
        Ok(())
    }

    pub fn currency(&self) -> Result<Currency> {
        match Currency::from_code(&self.pricing.currency) {
            Some(currency) => Ok(currency),
            None => bail!("Unknown currency: {}", self.pricing.currency),
        }
    }

    /// Formatter selected by `pricing.locale`.
    pub fn formatter(&self) -> Result<Arc<dyn MoneyFormatter>> {
        let formatter: Arc<dyn MoneyFormatter> = match self.pricing.locale.as_str() {
            "pt-BR" | "pt_BR" => Arc::new(LocaleFormatter::pt_br()),
            "en-US" | "en_US" => Arc::new(LocaleFormatter::en_us()),
            "symbol" => Arc::new(SymbolFormatter),
            other => bail!("Unknown locale: {} (expected pt-BR, en-US or symbol)", other),
        };
        Ok(formatter)
    }
}

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON database, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "db.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO currency code prices are read in (default: BRL).
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Display locale: pt-BR, en-US or symbol.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_currency() -> String {
    "BRL".to_string()
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            locale: default_locale(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// When to navigate after submit or favorite.
    #[serde(default)]
    pub navigation: NavigationPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default food.toml config file.
pub fn generate_default_config() -> String {
    r#"# Food CLI configuration

[store]
# JSON database with `foods`, `orders` and `favorites` arrays
path = "db.json"

[pricing]
currency = "BRL"
# pt-BR, en-US or symbol
locale = "pt-BR"

[session]
# always: navigate even when the store rejects the request
# on_success: only navigate after the store accepted it
navigation = "always"

[log]
level = "info"
"#
    .to_string()
}
