//! # Shop Configuration
//!
//! Session settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FOLIO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::fmt;
use std::str::FromStr;

use folio_core::{Amount, DEFAULT_TOP_SELLERS};
use folio_store::{BookstoreConfig, IdStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `FOLIO_*` variable that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{var}={value:?} is not valid, expected {expected}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console lines
    #[default]
    Text,

    /// Pretty-printed JSON documents
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Shown in the menu header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Rows in the bestseller report
    pub top_sellers: usize,

    /// How catalog ids are issued
    pub id_strategy: IdStrategy,

    /// Load the bootstrap catalog before the first prompt
    pub seed_catalog: bool,

    pub output: OutputFormat,
}

impl Default for ShopConfig {
    /// ## Default Values
    /// - Store: "Folio Bookstore"
    /// - Currency: `$`, 2 decimals
    /// - Top sellers: 3
    /// - Ids: monotonic
    /// - Bootstrap catalog: loaded
    /// - Output: text
    fn default() -> Self {
        ShopConfig {
            store_name: "Folio Bookstore".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            top_sellers: DEFAULT_TOP_SELLERS,
            id_strategy: IdStrategy::default(),
            seed_catalog: true,
            output: OutputFormat::default(),
        }
    }
}

impl ShopConfig {
    /// Creates a ShopConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FOLIO_STORE_NAME`: Override store name
    /// - `FOLIO_CURRENCY_SYMBOL`: Override currency symbol
    /// - `FOLIO_TOP_N`: Rows in the bestseller report (≥ 1)
    /// - `FOLIO_ID_STRATEGY`: `monotonic` or `catalog-size`
    /// - `FOLIO_SEED`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    /// - `FOLIO_OUTPUT`: `text` or `json`
    pub fn from_env() -> Result<Self, ConfigError> {
        ShopConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShopConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(name) = lookup("FOLIO_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("FOLIO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("FOLIO_TOP_N") {
            config.top_sellers = match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(invalid("FOLIO_TOP_N", raw, "a positive integer")),
            };
        }

        if let Some(raw) = lookup("FOLIO_ID_STRATEGY") {
            config.id_strategy = raw
                .parse()
                .map_err(|_| invalid("FOLIO_ID_STRATEGY", &raw, "monotonic or catalog-size"))?;
        }

        if let Some(raw) = lookup("FOLIO_SEED") {
            config.seed_catalog =
                parse_flag(&raw).ok_or_else(|| invalid("FOLIO_SEED", &raw, "true or false"))?;
        }

        if let Some(raw) = lookup("FOLIO_OUTPUT") {
            config.output = raw
                .parse()
                .map_err(|_| invalid("FOLIO_OUTPUT", &raw, "text or json"))?;
        }

        Ok(config)
    }

    /// Store-layer settings derived from this configuration.
    pub fn bookstore_config(&self) -> BookstoreConfig {
        BookstoreConfig::default().id_strategy(self.id_strategy)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use folio_cli_lib::state::ShopConfig;
    /// use folio_core::Amount;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_currency(Amount::new(46.782)), "$46.78");
    /// ```
    pub fn format_currency(&self, amount: Amount) -> String {
        let value = amount.value();
        let sign = if value < 0.0 { "-" } else { "" };
        format!(
            "{}{}{:.prec$}",
            sign,
            self.currency_symbol,
            value.abs(),
            prec = self.currency_decimals as usize
        )
    }
}

fn invalid(var: &'static str, value: impl Into<String>, expected: &'static str) -> ConfigError {
    ConfigError {
        var,
        value: value.into(),
        expected,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
