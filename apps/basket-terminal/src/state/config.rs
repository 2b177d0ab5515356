//! # Configuration State
//!
//! Store branding, VAT rate and the seed basket, loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BASKET_STORE_NAME, BASKET_VAT_RATE, BASKET_CURRENCY_SYMBOL         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $BASKET_CONFIG, or                                                 │
//! │     ~/.config/basket/basket.toml (Linux)                               │
//! │     ~/Library/Application Support/com.basket.basket/basket.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     The three-item sample basket at 20% VAT                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "AKQA"
//! currency_symbol = "£"
//! vat_rate_bps = 2000
//!
//! [[item]]
//! name = "Cotton T-Shirt, Medium"
//! price = "1.99"
//! quantity = 1
//! ```
//!
//! Read-only after startup; every run starts again from the seed items.

use std::path::{Path, PathBuf};

use basket_core::validation::validate_tax_rate_bps;
use basket_core::{CartError, CartStore, LineItem, Money, Quantity, TaxRate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but break a rule.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A seed item was rejected by the cart.
    #[error("Invalid seed item: {0}")]
    SeedItem(#[from] CartError),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// One line of the starting basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub price: Money,
    pub quantity: Quantity,
}

impl SeedItem {
    fn new(name: &str, pence: i64, quantity: u8) -> Self {
        SeedItem {
            name: name.to_string(),
            price: Money::from_pence(pence),
            quantity: Quantity::saturating(quantity),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown as the page header.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// VAT rate in basis points, e.g. 2000 = 20%
    pub vat_rate_bps: u32,

    /// Shown at the bottom of the page.
    pub footer: String,

    /// Items the basket starts with, in display order.
    #[serde(rename = "item")]
    pub seed_items: Vec<SeedItem>,
}

impl Default for ConfigState {
    /// The sample basket: three items at 20% VAT, priced in pounds.
    fn default() -> Self {
        ConfigState {
            store_name: "AKQA".to_string(),
            currency_symbol: "£".to_string(),
            vat_rate_bps: basket_core::DEFAULT_VAT_RATE_BPS,
            footer: "© 2013 AKQA Ltd. Registered in England; 2964394".to_string(),
            seed_items: vec![
                SeedItem::new("Cotton T-Shirt, Medium", 199, 1),
                SeedItem::new("Baseball Cap, One Size", 299, 2),
                SeedItem::new("Swim Shorts, Medium", 399, 1),
            ],
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform default if it exists)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            // An explicit path must exist
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading basket config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_tax_rate_bps(self.vat_rate_bps)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        // Same checks the cart applies: names, prices, uniqueness
        self.build_store()?;

        Ok(())
    }

    /// Applies environment variable overrides.
    ///
    /// ## Environment Variables
    /// - `BASKET_STORE_NAME`: Override store name
    /// - `BASKET_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BASKET_VAT_RATE`: Override VAT rate as a percentage (e.g. "17.5")
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("BASKET_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(symbol) = lookup("BASKET_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(rate) = lookup("BASKET_VAT_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(pct) if (0.0..=100.0).contains(&pct) => {
                    let rate = TaxRate::from_percentage(pct);
                    debug!(vat_rate = %rate, "Overriding VAT rate from environment");
                    self.vat_rate_bps = rate.bps();
                }
                _ => warn!(value = %rate, "Ignoring invalid BASKET_VAT_RATE"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "basket", "basket")
            .map(|dirs| dirs.config_dir().join("basket.toml"))
    }

    /// The configured VAT rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.vat_rate_bps)
    }

    /// Builds a fresh cart from the seed items.
    pub fn build_store(&self) -> Result<CartStore, CartError> {
        let items = self
            .seed_items
            .iter()
            .map(|seed| LineItem::new(seed.name.clone(), seed.price, seed.quantity))
            .collect::<Result<Vec<_>, _>>()?;

        CartStore::with_items(items, self.tax_rate())
    }

    /// Formats an amount with the currency symbol, rounded to pence.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    /// use basket_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_pence(1196)), "£11.96");
    /// assert_eq!(config.format_currency(Money::from_units(23920)), "£2.39");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let text = amount.to_string();
        match text.strip_prefix('-') {
            Some(abs) => format!("-{}{}", self.currency_symbol, abs),
            None => format!("{}{}", self.currency_symbol, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_seeds_sample_basket() {
        let config = ConfigState::default();
        assert!(config.validate().is_ok());

        let store = config.build_store().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.subtotal(), Money::from_pence(1196));
        assert_eq!(store.items()[1].quantity.get(), 2);
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_pence(1196)), "£11.96");
        assert_eq!(config.format_currency(Money::from_units(23920)), "£2.39");
        assert_eq!(config.format_currency(Money::zero()), "£0.00");
        assert_eq!(config.format_currency(Money::from_pence(-550)), "-£5.50");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[
            ("BASKET_STORE_NAME", "Seaside Outfitters"),
            ("BASKET_VAT_RATE", "17.5"),
            ("BASKET_CURRENCY_SYMBOL", "€"),
        ]));

        assert_eq!(config.store_name, "Seaside Outfitters");
        assert_eq!(config.vat_rate_bps, 1750);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_invalid_vat_override_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[("BASKET_VAT_RATE", "lots")]));
        assert_eq!(config.vat_rate_bps, 2000);

        config.apply_overrides(lookup(&[("BASKET_VAT_RATE", "250")]));
        assert_eq!(config.vat_rate_bps, 2000);
    }

    #[test]
    fn test_validation_rejects_duplicate_seed_items() {
        let mut config = ConfigState::default();
        config.seed_items.push(config.seed_items[0].clone());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SeedItem(CartError::DuplicateItem(_)))
        ));
    }

    #[test]
    fn test_validation_rejects_tax_rate_over_100_percent() {
        let config = ConfigState {
            vat_rate_bps: 10_001,
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
store_name = "Test Shop"
vat_rate_bps = 500

[[item]]
name = "Socks"
price = "2.50"
quantity = 3

[[item]]
name = "Hat"
price = 10.0
quantity = 1
"#
        )
        .unwrap();

        let config = ConfigState::from_file(file.path()).unwrap();
        assert_eq!(config.store_name, "Test Shop");
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.seed_items.len(), 2);
        assert_eq!(config.seed_items[0].price, Money::from_pence(250));
        assert_eq!(config.seed_items[1].price, Money::from_pence(1000));

        let store = config.build_store().unwrap();
        assert_eq!(store.subtotal(), Money::from_pence(1750));
        assert_eq!(store.vat(), "0.875".parse::<Money>().unwrap());
    }

    #[test]
    fn test_validation_rejects_oversized_seed_price() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[item]]\nname = \"Yacht\"\nprice = \"500000000000000\"\nquantity = 1").unwrap();

        let config = ConfigState::from_file(file.path()).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SeedItem(CartError::Validation(_)))
        ));
    }

    #[test]
    fn test_load_rejects_out_of_range_quantity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[item]]\nname = \"Socks\"\nprice = 1\nquantity = 12").unwrap();
        assert!(matches!(
            ConfigState::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = ConfigState::load(Some(PathBuf::from("/nonexistent/basket.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = ConfigState::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[[item]]"));
        assert!(toml_str.contains("store_name = \"AKQA\""));
    }
}
