//! Identifier types for ledger records.
//!
//! Check ids are opaque strings assigned by the record store. The newtype
//! keeps them from being confused with check numbers, which are free-text
//! references and not unique.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a check record.
///
/// # Examples
///
/// ```
/// use treasury_core::model::CheckId;
///
/// let id = CheckId::new("3f1c9a");
/// assert_eq!(id.as_str(), "3f1c9a");
/// assert_eq!(id.to_string(), "3f1c9a");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckId(String);

impl CheckId {
    /// Creates a new check ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CheckId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CheckId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
