//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`RosterConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::RosterConfig;

/// Loads and provides access to roster configuration.
///
/// # Example
///
/// ```no_run
/// use employee_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml")?;
/// println!("Raise rate: {}", loader.config().raise_rate);
/// # Ok::<(), employee_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for [`RosterConfig`] (`ConfigParseError`)
    /// - A value fails [`RosterConfig::validate`] (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded roster configuration");
        Ok(Self { config })
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> RosterResult<Self> {
        Ok(Self {
            config: Self::parse(content, origin)?,
        })
    }

    fn parse(content: &str, origin: &str) -> RosterResult<RosterConfig> {
        // An empty document deserializes to unit, not to a struct.
        let config = if content.trim().is_empty() {
            RosterConfig::default()
        } else {
            serde_yaml::from_str::<RosterConfig>(content).map_err(|e| {
                RosterError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RosterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/roster.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &RosterConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/roster.yaml");

        match result {
            Err(RosterError::ConfigNotFound { path }) => {
                assert!(path.contains("roster.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_partial_document_falls_back_to_defaults() {
        let yaml = r#"
email:
  separator: "_"
raise_rate: "1.10"
"#;
        let config = ConfigLoader::from_yaml_str(yaml, "inline")
            .unwrap()
            .into_config();

        assert_eq!(config.email.separator, "_");
        assert_eq!(config.email.domain, "company.com");
        assert_eq!(config.raise_rate, dec("1.10"));
        assert_eq!(config.id_length, 8);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = ConfigLoader::from_yaml_str("", "inline").unwrap();
        assert_eq!(config.config(), &RosterConfig::default());
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("id_length: [not, a, number]", "inline");

        match result {
            Err(RosterError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected_after_parsing() {
        let result = ConfigLoader::from_yaml_str("id_length: 0", "inline");
        assert!(matches!(result, Err(RosterError::InvalidConfig { .. })));
    }
}
