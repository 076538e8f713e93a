//! Record source port
//!
//! Defines where batch encoding reads its task/response records from.

use serde::{Deserialize, Serialize};
use sylcode_domain::{ResponseRepr, TaskRepr};
use thiserror::Error;

/// A task, optionally with the response given to it
///
/// One JSON object per record:
///
/// ```json
/// {"id": "p1-t3", "task": [["All","A","B"],["Some","B","C"]], "response": ["All","A","C"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingRecord {
    /// Caller-chosen identifier, echoed in the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub task: TaskRepr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseRepr>,
}

impl EncodingRecord {
    pub fn new(task: TaskRepr) -> Self {
        Self {
            id: None,
            task,
            response: None,
        }
    }

    pub fn with_response(mut self, response: ResponseRepr) -> Self {
        self.response = Some(response);
        self
    }
}

/// A record together with its 1-based position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedRecord {
    pub line: usize,
    pub record: EncodingRecord,
}

/// Errors that can occur while reading records
#[derive(Error, Debug)]
pub enum RecordSourceError {
    #[error("Line {line}: invalid record: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecordSourceError {
    /// Line of the offending record, if the error is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            RecordSourceError::InvalidRecord { line, .. } => Some(*line),
            RecordSourceError::Io(_) => None,
        }
    }
}

/// Source of encoding records
///
/// Implementations live in the infrastructure layer (e.g., JSONL files).
/// A source yields `None` once exhausted; an invalid record does not end the
/// source, an I/O error does.
pub trait RecordSource {
    fn next_record(&mut self) -> Option<Result<SourcedRecord, RecordSourceError>>;
}

/// In-memory record source, numbering records from 1
pub struct InMemoryRecordSource {
    records: std::vec::IntoIter<EncodingRecord>,
    line: usize,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<EncodingRecord>) -> Self {
        Self {
            records: records.into_iter(),
            line: 0,
        }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn next_record(&mut self) -> Option<Result<SourcedRecord, RecordSourceError>> {
        let record = self.records.next()?;
        self.line += 1;
        Some(Ok(SourcedRecord {
            line: self.line,
            record,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserialize_without_response() {
        let record: EncodingRecord =
            serde_json::from_value(json!({"task": [["All", "A", "B"], ["Some", "B", "C"]]}))
                .unwrap();
        assert!(record.id.is_none());
        assert!(record.response.is_none());
    }

    #[test]
    fn test_record_deserialize_with_wrapped_response() {
        let record: EncodingRecord = serde_json::from_value(json!({
            "id": "r1",
            "task": [["All", "A", "B"], ["Some", "B", "C"]],
            "response": [["No", "C", "A"]]
        }))
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("r1"));
        assert!(matches!(record.response, Some(ResponseRepr::Wrapped(_))));
    }

    #[test]
    fn test_in_memory_source_numbers_records() {
        let task = TaskRepr(vec![]);
        let mut source = InMemoryRecordSource::new(vec![
            EncodingRecord::new(task.clone()),
            EncodingRecord::new(task),
        ]);

        assert_eq!(source.next_record().unwrap().unwrap().line, 1);
        assert_eq!(source.next_record().unwrap().unwrap().line, 2);
        assert!(source.next_record().is_none());
    }

    #[test]
    fn test_error_line() {
        let err = RecordSourceError::InvalidRecord {
            line: 4,
            message: "expected value".to_string(),
        };
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.to_string(), "Line 4: invalid record: expected value");
    }
}
