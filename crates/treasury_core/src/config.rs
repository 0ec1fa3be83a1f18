//! Engine configuration management.
//!
//! Handles loading of the engine configuration from TOML files with
//! environment variable override support, followed by validation.
//!
//! ```toml
//! log_level = "debug"
//! page_size = 10
//!
//! [settings]
//! currency = "EUR"
//! high_value_threshold = 25000.0
//! window_policy = "alert_days"
//! alert_days = 5
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::model::{Settings, WindowPolicy};
use crate::types::Currency;

/// Upper bound accepted for `alert_days`.
const MAX_ALERT_DAYS: u32 = 365;

/// Language of month abbreviations in chart labels.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    /// `Jan`, `Fév`, ..., `Déc`
    #[default]
    French,
    /// `Jan`, `Feb`, ..., `Dec`
    English,
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Settings used when a snapshot does not carry its own.
    #[serde(default)]
    pub settings: Settings,

    /// Log level for the service layer.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of checks in the "recent activity" list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Rows per page in check listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Month label language for series output.
    #[serde(default)]
    pub month_labels: MonthLabels,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_page_size() -> usize {
    8
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            log_level: default_log_level(),
            recent_limit: default_recent_limit(),
            page_size: default_page_size(),
            month_labels: MonthLabels::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return defaults when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Unparseable values are ignored and leave the current value in place;
    /// validation reports anything out of range afterwards.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(name) = std::env::var("TREASURY_COMPANY_NAME") {
            self.settings.company_name = name;
        }

        if let Ok(currency) = std::env::var("TREASURY_CURRENCY") {
            if let Ok(currency) = currency.parse::<Currency>() {
                self.settings.currency = currency;
            }
        }

        if let Ok(days) = std::env::var("TREASURY_ALERT_DAYS") {
            if let Ok(days) = days.trim().parse() {
                self.settings.alert_days = days;
            }
        }

        if let Ok(threshold) = std::env::var("TREASURY_HIGH_VALUE_THRESHOLD") {
            if let Ok(threshold) = threshold.trim().parse() {
                self.settings.high_value_threshold = threshold;
            }
        }

        if let Ok(policy) = std::env::var("TREASURY_WINDOW_POLICY") {
            self.settings.window_policy = match policy.to_lowercase().as_str() {
                "fixed" => WindowPolicy::Fixed,
                "alert_days" => WindowPolicy::AlertDays,
                _ => self.settings.window_policy,
            };
        }

        if let Ok(log_level) = std::env::var("TREASURY_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let threshold = self.settings.high_value_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            errors.push(format!(
                "high_value_threshold must be a non-negative number, got {}",
                threshold
            ));
        }

        if self.settings.alert_days > MAX_ALERT_DAYS {
            errors.push(format!(
                "alert_days {} exceeds maximum allowed ({})",
                self.settings.alert_days, MAX_ALERT_DAYS
            ));
        }

        if self.recent_limit == 0 {
            errors.push("recent_limit must be greater than 0".to_string());
        }

        if self.page_size == 0 {
            errors.push("page_size must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.settings.high_value_threshold, 50_000.0);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.page_size, 8);
        assert_eq!(config.month_labels, MonthLabels::French);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            month_labels = "english"

            [settings]
            currency = "USD"
            window_policy = "alert_days"
            alert_days = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.currency, Currency::USD);
        assert_eq!(config.settings.outgoing_window_days(), 5);
        assert_eq!(config.settings.high_value_threshold, 50_000.0);
        assert_eq!(config.month_labels, MonthLabels::English);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = EngineConfig::from_toml_str("page_size = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 20").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            EngineConfig::load_or_default(Path::new("/nonexistent/treasury.toml")).unwrap();
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("TREASURY_WINDOW_POLICY", "alert_days");
        let config = EngineConfig::default().with_env_override();
        assert_eq!(config.settings.window_policy, WindowPolicy::AlertDays);
        std::env::remove_var("TREASURY_WINDOW_POLICY");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = EngineConfig::default();
        config.log_level = "verbose".to_string();

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_negative_threshold() {
        let mut config = EngineConfig::default();
        config.settings.high_value_threshold = -1.0;

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("high_value_threshold")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = EngineConfig::default();
        config.log_level = "invalid".to_string();
        config.page_size = 0;
        config.settings.alert_days = 1000;

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 3);
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
