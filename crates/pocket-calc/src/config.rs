//! Calculator configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::history::History;
use crate::core::InvalidOperand;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for this schema
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Accumulator behaviour knobs
///
/// ```json
/// { "history_capacity": 10, "invalid_operand": "zero", "record_errors": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Behaviour when an operand is the error state
    pub invalid_operand: InvalidOperand,
    /// Record failed calculations (`9 ÷ 0 = Error`) in history
    pub record_errors: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            invalid_operand: InvalidOperand::Zero,
            record_errors: false,
        }
    }
}

impl CalculatorConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the history bound
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the invalid operand policy
    #[must_use]
    pub const fn with_invalid_operand(mut self, policy: InvalidOperand) -> Self {
        self.invalid_operand = policy;
        self
    }

    /// Enables or disables recording of failed calculations
    #[must_use]
    pub const fn with_record_errors(mut self, record: bool) -> Self {
        self.record_errors = record;
        self
    }

    /// Checks value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::invalid("history_capacity must be at least 1"));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.invalid_operand, InvalidOperand::Zero);
        assert!(!config.record_errors);
    }

    #[test]
    fn test_config_builders() {
        let config = CalculatorConfig::new()
            .with_history_capacity(3)
            .with_invalid_operand(InvalidOperand::Error)
            .with_record_errors(true);
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.invalid_operand, InvalidOperand::Error);
        assert!(config.record_errors);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = CalculatorConfig::from_json_str(r#"{"invalid_operand":"error"}"#).unwrap();
        assert_eq!(config.invalid_operand, InvalidOperand::Error);
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let err = CalculatorConfig::from_json_str(r#"{"history_capacity":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("history_capacity"));
    }

    #[test]
    fn test_config_rejects_unknown_field() {
        let err = CalculatorConfig::from_json_str(r#"{"precision":4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_capacity":5,"record_errors":true}}"#).unwrap();
        let config = CalculatorConfig::load(file.path()).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert!(config.record_errors);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = CalculatorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
