//! Port for emitting encoded records.
//!
//! Defines the [`EncodingSink`] trait that receives each record as soon as it
//! is encoded, so long batches can be streamed instead of buffered.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while a sink produces the machine-readable
//! result stream (e.g., JSONL).

use serde::{Deserialize, Serialize};
use sylcode_domain::EncodeError;

/// Why a single record could not be encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// Error kind (e.g., "unknown_quantifier", "invalid_record")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl RecordFailure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&EncodeError> for RecordFailure {
    fn from(error: &EncodeError) -> Self {
        Self::new(error.kind(), error.to_string())
    }
}

/// Result of encoding one record
///
/// A failed record carries `error` and no codes; it is never given a
/// placeholder code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRecord {
    /// 1-based position in the source
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RecordFailure>,
}

impl EncodedRecord {
    pub fn success(
        line: usize,
        id: Option<String>,
        task_code: String,
        response_code: Option<String>,
    ) -> Self {
        Self {
            line,
            id,
            task_code: Some(task_code),
            response_code,
            error: None,
        }
    }

    pub fn failure(line: usize, id: Option<String>, error: RecordFailure) -> Self {
        Self {
            line,
            id,
            task_code: None,
            response_code: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Port for emitting encoded records.
///
/// The `emit` method is synchronous and non-fallible; adapters log their own
/// write failures.
pub trait EncodingSink: Send + Sync {
    fn emit(&self, record: &EncodedRecord);
}

/// No-op implementation for tests and when results are only collected.
pub struct NoEncodingSink;

impl EncodingSink for NoEncodingSink {
    fn emit(&self, _record: &EncodedRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_without_error() {
        let record = EncodedRecord::success(1, None, "AI1".to_string(), Some("Aac".to_string()));
        assert!(record.is_success());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"line": 1, "task_code": "AI1", "response_code": "Aac"})
        );
    }

    #[test]
    fn test_failure_carries_kind() {
        let error = EncodeError::unknown_quantifier("Each");
        let record = EncodedRecord::failure(3, Some("x".to_string()), RecordFailure::from(&error));
        assert!(!record.is_success());
        assert!(record.task_code.is_none());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["error"]["kind"], "unknown_quantifier");
        assert_eq!(value["id"], "x");
    }
}
