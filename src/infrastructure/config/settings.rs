//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the database URL (`SHIRTSTAT_DATABASE_URL`).
//!
//! # Example
//!
//! ```no_run
//! use shirtstat::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::database::{DatabaseConfig, DATABASE_URL_ENV};
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::survey::{FibonacciConfig, SearchConfig, SurveyConfig};
use crate::error::{ConfigError, Result};

/// Width of the `color` column in the frequency table.
pub const MAX_LABEL_LEN: usize = 50;

/// Main application configuration.
///
/// Every section is optional; omitted sections fall back to the built-in
/// sample week and demo inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Frequency store settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Observations to analyze.
    #[serde(default)]
    pub survey: SurveyConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub fibonacci: FibonacciConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.database.url = url;
            }
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.survey.observations.is_empty() {
            return Err(ConfigError::MissingField {
                field: "observations",
            }
            .into());
        }
        if let Some(label) = self
            .survey
            .observations
            .iter()
            .find(|l| l.trim().is_empty() || l.chars().count() > MAX_LABEL_LEN)
        {
            return Err(ConfigError::InvalidValue {
                field: "observations",
                reason: format!("label {label:?} must be 1 to {MAX_LABEL_LEN} characters"),
            }
            .into());
        }
        if self.survey.probability_label.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "probability_label",
            }
            .into());
        }
        if self.fibonacci.terms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "terms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.database.enabled && self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.survey.observations.len(), 94);
        assert_eq!(config.survey.probability_label, "RED");
        assert_eq!(config.search.target, 7);
        assert_eq!(config.fibonacci.terms, 50);
        assert!(config.database.enabled);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
[survey]
observations = ["RED", "BLUE", "BLUE"]
probability_label = "BLUE"

[search]
numbers = [2, 4, 6]
target = 6
start = 1

[fibonacci]
terms = 10

[database]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.survey.observations, vec!["RED", "BLUE", "BLUE"]);
        assert_eq!(config.survey.probability_label, "BLUE");
        assert_eq!(config.search.numbers, vec![2, 4, 6]);
        assert_eq!(config.search.start, 1);
        assert_eq!(config.fibonacci.terms, 10);
        assert!(!config.database.enabled);
    }

    #[test]
    fn rejects_empty_observations() {
        let result = Config::parse_toml("[survey]\nobservations = []\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "observations"
            }))
        ));
    }

    #[test]
    fn rejects_overlong_label() {
        let label = "X".repeat(MAX_LABEL_LEN + 1);
        let result = Config::parse_toml(&format!("[survey]\nobservations = [\"{label}\"]\n"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "observations",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_fibonacci_terms() {
        let result = Config::parse_toml("[fibonacci]\nterms = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "terms", .. }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[survey\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
