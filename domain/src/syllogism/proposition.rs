//! Terms and quantified propositions

use super::quantifier::Quantifier;
use crate::core::error::EncodeError;
use serde::{Deserialize, Serialize};

/// An opaque category label (e.g., "A", "artists")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quantified statement `(quantifier, subject, predicate)`
///
/// Used both for the premises of a task and for the conclusion of a response.
/// Subject and predicate positions are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Proposition {
    pub quantifier: Quantifier,
    pub subject: Term,
    pub predicate: Term,
}

impl Proposition {
    pub fn new(quantifier: Quantifier, subject: impl Into<Term>, predicate: impl Into<Term>) -> Self {
        Self {
            quantifier,
            subject: subject.into(),
            predicate: predicate.into(),
        }
    }

    /// Build from the list representation `[quantifier, subject, predicate]`
    ///
    /// Fails with `UnknownQuantifier` if the first element is not one of the
    /// ten phrases. Arity is checked by the caller, which knows whether it is
    /// decoding a task or a response.
    pub fn from_parts(quantifier: &str, subject: &str, predicate: &str) -> Result<Self, EncodeError> {
        Ok(Self::new(quantifier.parse()?, subject, predicate))
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{};{}", self.quantifier, self.subject, self.predicate)
    }
}
