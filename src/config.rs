//! YAML Configuration File Support for PresiDATA
//!
//! Loads the search-core settings from a single YAML file at startup.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # PresiDATA search configuration
//! version: "1.0"
//! name: "presidata web"
//!
//! matcher:
//!   suggest_limit: 8
//!   search_limit: 5
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PresidataConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Result limits, handed unchanged to [`matcher::Matcher::with_config`]
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl PresidataConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PresidataConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Limits for [`matcher::Matcher::with_config`].
    pub fn match_config(&self) -> MatchConfig {
        self.matcher.clone()
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;

        Ok(())
    }
}

impl Default for PresidataConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  suggest_limit: 10
  search_limit: 3
"#;

        let config = PresidataConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.suggest_limit, 10);
        assert_eq!(config.match_config().search_limit, 3);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
matcher:
  suggest_limit: 4
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PresidataConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.matcher.suggest_limit, 4);
        assert_eq!(config.matcher.search_limit, 5);
    }

    #[test]
    fn test_missing_file() {
        let err = PresidataConfig::from_file("/nonexistent/presidata.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_default_config() {
        let config = PresidataConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.match_config(), MatchConfig::default());
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = PresidataConfig::from_yaml("version: \"1.0\"\n").unwrap();
        assert_eq!(config, PresidataConfig::default());
    }

    #[test]
    fn test_matcher_section_is_the_match_config() {
        let yaml = r#"
version: "1.0"
matcher:
  suggest_limit: 6
  search_limit: 2
"#;

        let config = PresidataConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.match_config(),
            MatchConfig {
                suggest_limit: 6,
                search_limit: 2,
            }
        );
        assert_eq!(config.matcher, config.match_config());
    }

    #[test]
    fn test_unsupported_version() {
        let err = PresidataConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  search_limit: 0
"#;

        let result = PresidataConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("search_limit"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = PresidataConfig::from_yaml("version: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let config = PresidataConfig {
            name: Some("roundtrip".to_string()),
            matcher: MatchConfig {
                suggest_limit: 12,
                search_limit: 1,
            },
            ..PresidataConfig::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = PresidataConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
