//! Application configuration management.
//!
//! Settings come from `MARKET_`-prefixed environment variables via `envy`.
//! Every field has a default, so a bare run prints the stock scenario.

use serde::Deserialize;

/// Simulation configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `MARKET_BANK_NAME` (optional): name of the bank, defaults to "Digital Prosperity Bank"
/// - `MARKET_CURRENCY_SYMBOL` (optional): prefix for printed amounts, defaults to "$"
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_bank_name() -> String {
    "Digital Prosperity Bank".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_name: default_bank_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // bank_name -> MARKET_BANK_NAME
        envy::prefixed("MARKET_").from_env::<Config>()
    }
}

/// Format cents with two decimals, e.g. `77500` -> `$775.00`.
///
/// Accepts `i128` so bank-wide totals print without overflowing.
pub fn format_money(symbol: &str, cents: impl Into<i128>) -> String {
    let cents: i128 = cents.into();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{symbol}{}.{:02}", abs / 100, abs % 100)
}
