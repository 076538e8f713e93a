//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod encoding;
mod output;

pub use encoding::{FileEncodingConfig, SUPPORTED_DOMAINS};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("encoding.domain: unknown domain '{0}' (supported: {supported})", supported = SUPPORTED_DOMAINS.join(", "))]
    UnknownDomain(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Encoding settings
    pub encoding: FileEncodingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if !SUPPORTED_DOMAINS.contains(&self.encoding.domain.as_str()) {
            issues.push(ConfigValidationError::UnknownDomain(
                self.encoding.domain.clone(),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylcode_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[encoding]
domain = "syllogistic-generalized"
fail_fast = false

[output]
format = "jsonl"
color = false
summary = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.encoding.fail_fast);
        assert_eq!(config.output.format, Some(OutputFormat::Jsonl));
        assert!(!config.output.color);
        assert!(config.output.summary);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
summary = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert!(config.encoding.fail_fast);
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_unknown_domain() {
        let mut config = FileConfig::default();
        config.encoding.domain = "propositional".to_string();

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![ConfigValidationError::UnknownDomain("propositional".to_string())]
        );
        assert!(issues[0].to_string().contains("syllogistic-generalized"));
    }
}
