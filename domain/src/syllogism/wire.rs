//! List representations of tasks and responses
//!
//! Callers exchange syllogisms as nested JSON arrays of strings:
//!
//! - task: `[["All", "A", "B"], ["Some", "B", "C"]]`
//! - response: `["All", "A", "C"]`, `[["All", "A", "C"]]`, `"NVC"`, `["NVC"]`
//!
//! These types deserialize any such shape without checking the vocabulary.
//! Conversion into [`Task`], [`TaskTerms`] or [`Response`] is where arity is
//! enforced and quantifiers are looked up, so errors surface as
//! [`EncodeError`] rather than as serde messages.

use super::proposition::Proposition;
use super::response::{NVC, Response};
use super::task::{Task, TaskTerms};
use crate::core::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Task in list representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRepr(pub Vec<Vec<String>>);

impl TaskRepr {
    /// Both premises as `[quantifier, subject, predicate]`, arity checked only
    fn premises(&self) -> Result<[[&str; 3]; 2], EncodeError> {
        let [first, second] = self.0.as_slice() else {
            return Err(EncodeError::MalformedTask(format!(
                "expected 2 premises, got {}",
                self.0.len()
            )));
        };

        Ok([premise_parts(first, 1)?, premise_parts(second, 2)?])
    }
}

fn premise_parts(parts: &[String], index: usize) -> Result<[&str; 3], EncodeError> {
    match parts {
        [quantifier, subject, predicate] => Ok([quantifier, subject, predicate].map(String::as_str)),
        _ => Err(EncodeError::MalformedTask(format!(
            "premise {} has {} elements, expected 3",
            index,
            parts.len()
        ))),
    }
}

impl TryFrom<&TaskRepr> for Task {
    type Error = EncodeError;

    fn try_from(repr: &TaskRepr) -> Result<Self, Self::Error> {
        let [[q1, s1, p1], [q2, s2, p2]] = repr.premises()?;
        Ok(Task::new(
            Proposition::from_parts(q1, s1, p1)?,
            Proposition::from_parts(q2, s2, p2)?,
        ))
    }
}

/// Terms only: the quantifier slots are not looked up
impl TryFrom<&TaskRepr> for TaskTerms {
    type Error = EncodeError;

    fn try_from(repr: &TaskRepr) -> Result<Self, Self::Error> {
        let [[_, s1, p1], [_, s2, p2]] = repr.premises()?;
        Ok(TaskTerms::new([s1.into(), p1.into()], [s2.into(), p2.into()]))
    }
}

/// Response in any of the accepted list shapes
///
/// Two historical caller conventions are accepted: a bare triple and a triple
/// wrapped in a one-element list. The `NVC` marker may appear as a plain
/// string or as the first element of either shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseRepr {
    /// `"NVC"`
    Marker(String),
    /// `["All", "A", "C"]` or `["NVC"]`
    Bare(Vec<String>),
    /// `[["All", "A", "C"]]` or `[["NVC"]]`
    Wrapped(Vec<Vec<String>>),
}

impl ResponseRepr {
    /// Unwrap to the single concluding list, wrapping bare triples first
    ///
    /// Only the first element of a wrapped response is considered.
    fn normalized(&self) -> Result<Vec<&str>, EncodeError> {
        match self {
            ResponseRepr::Marker(marker) => Ok(vec![marker.as_str()]),
            ResponseRepr::Bare(parts) => Ok(parts.iter().map(String::as_str).collect()),
            ResponseRepr::Wrapped(items) => items
                .first()
                .map(|parts| parts.iter().map(String::as_str).collect())
                .ok_or_else(|| EncodeError::MalformedResponse("empty response".to_string())),
        }
    }
}

impl TryFrom<&ResponseRepr> for Response {
    type Error = EncodeError;

    fn try_from(repr: &ResponseRepr) -> Result<Self, Self::Error> {
        match repr.normalized()?.as_slice() {
            [first, ..] if *first == NVC => Ok(Response::NoValidConclusion),
            [quantifier, subject, predicate] => {
                Proposition::from_parts(quantifier, subject, predicate).map(Response::Conclusion)
            }
            parts => Err(EncodeError::MalformedResponse(format!(
                "expected [quantifier, term, term] or NVC, got {:?}",
                parts
            ))),
        }
    }
}
