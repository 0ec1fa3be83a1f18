//! Immutable input snapshots.
//!
//! A [`Snapshot`] is the unit of work for every analytics computation: the
//! full check list and the settings in force, captured at one instant. The
//! record store refreshes it after each local mutation or remote sync and
//! hands the new value to the engine.
//!
//! Failing to obtain a snapshot at all is the one error the analytics layer
//! does not absorb; [`SnapshotError`] carries it back to the caller.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::model::{Check, Settings};

/// Errors raised while obtaining a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a valid check list.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Check list plus settings, frozen for one evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Checks in store order.
    pub checks: Vec<Check>,
    /// Settings in force.
    pub settings: Settings,
}

/// Object layout `{"checks": [...], "settings": {...}}`.
#[derive(Deserialize)]
struct SnapshotObject {
    checks: Vec<Check>,
    #[serde(default)]
    settings: Option<Settings>,
}

impl Snapshot {
    /// Creates a snapshot from its parts.
    pub fn new(checks: Vec<Check>, settings: Settings) -> Self {
        Self { checks, settings }
    }

    /// Parses a snapshot from JSON.
    ///
    /// The payload is either a bare array of checks or an object
    /// `{"checks": [...], "settings": {...}}`. When the payload carries no
    /// settings, `fallback` is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasury_core::model::Settings;
    /// use treasury_core::snapshot::Snapshot;
    ///
    /// let json = r#"[{"id": "c1", "type": "incoming", "status": "paid", "amount": 10}]"#;
    /// let snapshot = Snapshot::from_json_str(json, &Settings::default()).unwrap();
    /// assert_eq!(snapshot.len(), 1);
    ///
    /// assert!(Snapshot::from_json_str("{", &Settings::default()).is_err());
    /// ```
    pub fn from_json_str(json: &str, fallback: &Settings) -> Result<Self, SnapshotError> {
        // Bare array or `{checks, settings}` object.
        let snapshot = if json.trim_start().starts_with('[') {
            Self::new(serde_json::from_str(json)?, fallback.clone())
        } else {
            let SnapshotObject { checks, settings } = serde_json::from_str(json)?;
            Self::new(checks, settings.unwrap_or_else(|| fallback.clone()))
        };
        debug!(checks = snapshot.len(), "snapshot parsed");
        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &Path, fallback: &Settings) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, fallback)
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when the snapshot holds no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
