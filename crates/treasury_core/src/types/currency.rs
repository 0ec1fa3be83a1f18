//! Ledger currency codes.
//!
//! The ledger keeps every amount in a single currency chosen in the
//! settings. The currency is display metadata only: no analytics
//! computation converts or weights amounts by currency.
//!
//! # Examples
//!
//! ```
//! use treasury_core::types::currency::Currency;
//!
//! let mad = Currency::MAD;
//! assert_eq!(mad.code(), "MAD");
//! assert_eq!(mad.decimal_places(), 2);
//!
//! let eur: Currency = "eur".parse().unwrap();
//! assert_eq!(eur, Currency::EUR);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes supported by the ledger.
///
/// # Variants
/// - `EUR`: Euro, formatted with the `fr-FR` locale
/// - `MAD`: Moroccan Dirham, formatted with the `fr-MA` locale
/// - `USD`: United States Dollar, formatted with the `en-US` locale
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    EUR,

    /// Moroccan Dirham
    #[default]
    MAD,

    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::MAD => "MAD",
            Currency::USD => "USD",
        }
    }

    /// Returns the number of minor-unit digits shown for amounts.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the BCP 47 locale used by presentation layers.
    pub fn locale(&self) -> &'static str {
        match self {
            Currency::EUR => "fr-FR",
            Currency::MAD => "fr-MA",
            Currency::USD => "en-US",
        }
    }

    /// Formats an amount with the currency's precision and code,
    /// treating non-finite values as zero.
    ///
    /// ```
    /// use treasury_core::types::Currency;
    ///
    /// assert_eq!(Currency::USD.format_amount(1234.5), "1234.50 USD");
    /// assert_eq!(Currency::MAD.format_amount(f64::NAN), "0.00 MAD");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        let safe = if amount.is_finite() { amount } else { 0.0 };
        format!(
            "{:.*} {}",
            self.decimal_places() as usize,
            safe,
            self.code()
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses a currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "MAD" => Ok(Currency::MAD),
            "USD" => Ok(Currency::USD),
            other => Err(CurrencyError::UnknownCurrency(other.to_string())),
        }
    }
}
