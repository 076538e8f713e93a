//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for encoding results
///
/// This is a domain concept representing how codes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines (default)
    Text,
    /// A single JSON document
    Json,
    /// One JSON object per line
    Jsonl,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
