//! Domain error types

use thiserror::Error;

/// Errors raised while encoding a task or a response
///
/// Every variant terminates the single encoding call. Callers group and
/// compare codes downstream, so a failure is never mapped to a placeholder
/// encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Unknown quantifier: '{phrase}'")]
    UnknownQuantifier { phrase: String },

    #[error("Could not determine figure of: {task}")]
    IndeterminateFigure { task: String },

    #[error("Ambiguous end term in premise 1 of: {task}")]
    AmbiguousEndTerm { task: String },

    #[error("Malformed task: {0}")]
    MalformedTask(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl EncodeError {
    pub fn unknown_quantifier(phrase: impl Into<String>) -> Self {
        EncodeError::UnknownQuantifier {
            phrase: phrase.into(),
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            EncodeError::UnknownQuantifier { .. } => "unknown_quantifier",
            EncodeError::IndeterminateFigure { .. } => "indeterminate_figure",
            EncodeError::AmbiguousEndTerm { .. } => "ambiguous_end_term",
            EncodeError::MalformedTask(_) => "malformed_task",
            EncodeError::MalformedResponse(_) => "malformed_response",
        }
    }
}
