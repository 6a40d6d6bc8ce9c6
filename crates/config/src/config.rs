//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the mo application.

use serde::{Deserialize, Serialize};
use tracing::debug;

use mo_protocol::ColumnPolicy;
use mo_protocol::policy::UnknownColumnPolicy;

use crate::error::{ConfigError, Result};
use crate::fallback::FallbackGeometry;
use crate::persistence::{find_config_file, read_config_file};

/// Environment variable overriding [`Config::column_policy`].
pub const ENV_COLUMN_POLICY: &str = "MO_COLUMN_POLICY";

/// The main configuration struct for the mo application.
///
/// # Examples
///
/// ```
/// use mo_config::{Config, FallbackGeometry};
/// use mo_protocol::ColumnPolicy;
///
/// let config = Config::default();
/// assert_eq!(config.column_policy, ColumnPolicy::Constrained);
///
/// let config = Config {
///     column_policy: ColumnPolicy::Basic,
///     fallback: FallbackGeometry::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How buffer columns are validated against window columns.
    #[serde(default)]
    pub column_policy: ColumnPolicy,

    /// Geometry used when the terminal cannot report its own.
    #[serde(default)]
    pub fallback: FallbackGeometry,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// If no configuration file is found, starts from the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is invalid, or if the
    /// result fails validation.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                read_config_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_env_with(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mo_config::Config;
    ///
    /// # fn example() -> mo_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable holds an unusable
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_config::Config;
    /// use mo_protocol::ColumnPolicy;
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_env_with(|name| (name == "MO_COLUMN_POLICY").then(|| "basic".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.column_policy, ColumnPolicy::Basic);
    /// ```
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(ENV_COLUMN_POLICY) {
            self.column_policy = value.parse().map_err(|err: UnknownColumnPolicy| {
                ConfigError::InvalidEnv {
                    name: ENV_COLUMN_POLICY,
                    reason: err.to_string(),
                }
            })?;
            debug!(policy = %self.column_policy, "column policy set from environment");
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a fallback dimension is zero.
    pub fn validate(&self) -> Result<()> {
        self.fallback.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::new();
        assert_eq!(config.column_policy, ColumnPolicy::Constrained);
        assert_eq!(config.fallback, FallbackGeometry::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_override_is_case_insensitive() {
        let mut config = Config::default();
        config.apply_env_with(|_| Some("BASIC".to_string())).unwrap();
        assert_eq!(config.column_policy, ColumnPolicy::Basic);
    }

    #[test]
    fn env_override_absent_keeps_value() {
        let mut config = Config {
            column_policy: ColumnPolicy::Basic,
            ..Default::default()
        };
        config.apply_env_with(|_| None).unwrap();
        assert_eq!(config.column_policy, ColumnPolicy::Basic);
    }

    #[test]
    fn env_override_invalid_value() {
        let mut config = Config::default();
        let err = config
            .apply_env_with(|_| Some("strict".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_COLUMN_POLICY,
                ..
            }
        ));
        assert!(err.to_string().contains("strict"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"column_policy": "basic", "fallback": {"window_lines": 40}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.column_policy, ColumnPolicy::Basic);
        assert_eq!(config.fallback.window_lines, 40);
        assert_eq!(config.fallback.largest_width, 250);
    }
}
