//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from parsing record date fields
//! - `CurrencyError`: Errors from currency parsing

use thiserror::Error;

/// Date-related errors.
///
/// Date fields on check records are free text supplied by an external store,
/// so parsing failures are expected. Callers in the analytics layer treat a
/// `DateError` as "this record does not satisfy the date predicate".
///
/// # Examples
/// ```
/// use treasury_core::types::DateError;
///
/// let err = DateError::Empty;
/// assert_eq!(format!("{}", err), "Date field is empty");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The field was empty or whitespace only.
    #[error("Date field is empty")]
    Empty,

    /// The text matched none of the accepted layouts.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use treasury_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}
