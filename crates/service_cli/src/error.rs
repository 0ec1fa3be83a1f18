//! CLI error types.

use thiserror::Error;
use treasury_core::config::ConfigError;
use treasury_core::snapshot::SnapshotError;
use treasury_core::types::DateError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid date on the command line.
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        /// Text as given.
        input: String,
        /// Parse failure.
        #[source]
        source: DateError,
    },

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Snapshot could not be obtained.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// I/O failure while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Shorthand for [`CliError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_passes_through() {
        let err: CliError = ConfigError::Validation(vec!["page_size must be greater than 0".into()]).into();
        assert_eq!(
            err.to_string(),
            "Validation errors: page_size must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = CliError::invalid_argument("--snapshot is required");
        assert_eq!(err.to_string(), "Invalid argument: --snapshot is required");
    }
}
