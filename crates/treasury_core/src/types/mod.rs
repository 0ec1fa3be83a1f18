//! Core value types shared across the ledger.
//!
//! This module provides:
//! - `time`: Lenient parsing of the free-form date strings carried by check records
//! - `currency`: Ledger currency codes with display metadata
//! - `error`: Structured error types for date and currency parsing

pub mod currency;
pub mod error;
pub mod time;

pub use currency::Currency;
pub use error::{CurrencyError, DateError};
pub use time::{end_of_day, parse_instant, start_of_day};
