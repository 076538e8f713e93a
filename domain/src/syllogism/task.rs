//! Syllogistic task (two premises) and figure classification

use super::proposition::{Proposition, Term};
use crate::core::error::EncodeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classical syllogistic figure, determined by where the premises overlap
///
/// The rules are checked in a fixed order and the first match wins:
///
/// | check                                      | figure |
/// |--------------------------------------------|--------|
/// | premise 1 predicate == premise 2 subject   | 1      |
/// | premise 1 subject == premise 2 subject     | 4      |
/// | premise 1 predicate == premise 2 predicate | 3      |
/// | premise 1 subject == premise 2 predicate   | 2      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Figure {
    First,
    Second,
    Third,
    Fourth,
}

impl Figure {
    /// Classify a pair of premises, or `None` if no rule matches
    ///
    /// Only the term positions are compared; [`Task::figure`] also requires
    /// the premises to share exactly one term.
    pub fn classify(first: &Proposition, second: &Proposition) -> Option<Self> {
        if first.predicate == second.subject {
            Some(Figure::First)
        } else if first.subject == second.subject {
            Some(Figure::Fourth)
        } else if first.predicate == second.predicate {
            Some(Figure::Third)
        } else if first.subject == second.predicate {
            Some(Figure::Second)
        } else {
            None
        }
    }

    /// The figure number (1-4)
    pub fn number(self) -> u8 {
        match self {
            Figure::First => 1,
            Figure::Second => 2,
            Figure::Third => 3,
            Figure::Fourth => 4,
        }
    }

    /// The figure number as an ASCII digit
    pub fn digit(self) -> char {
        char::from(b'0' + self.number())
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Subject and predicate of both premises, quantifiers left aside
///
/// Locating the middle and end terms needs nothing more, so a response can be
/// placed relative to a task whose quantifiers are never looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTerms {
    pub first: [Term; 2],
    pub second: [Term; 2],
}

impl TaskTerms {
    pub fn new(first: [Term; 2], second: [Term; 2]) -> Self {
        Self { first, second }
    }

    fn set(pair: &[Term; 2]) -> BTreeSet<&Term> {
        pair.iter().collect()
    }

    /// Terms shared by both premises (normally exactly one)
    pub fn middle_terms(&self) -> BTreeSet<&Term> {
        Self::set(&self.first)
            .intersection(&Self::set(&self.second))
            .copied()
            .collect()
    }

    /// The term of premise 1 that is not the middle term
    ///
    /// Fails with `AmbiguousEndTerm` unless exactly one such term exists,
    /// e.g. when the premises share no term or share both.
    pub fn subject_end_term(&self) -> Result<&Term, EncodeError> {
        let middle = self.middle_terms();
        let mut remaining = Self::set(&self.first)
            .into_iter()
            .filter(|t| !middle.contains(t));

        match (remaining.next(), remaining.next()) {
            (Some(term), None) => Ok(term),
            _ => Err(EncodeError::AmbiguousEndTerm {
                task: self.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskTerms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [s1, p1] = &self.first;
        let [s2, p2] = &self.second;
        write!(f, "{};{}/{};{}", s1, p1, s2, p2)
    }
}

/// A syllogistic task: an ordered pair of premises
///
/// # Example
///
/// ```
/// use sylcode_domain::{Figure, Proposition, Quantifier, Task};
///
/// let task = Task::new(
///     Proposition::new(Quantifier::All, "A", "B"),
///     Proposition::new(Quantifier::Some, "B", "C"),
/// );
/// assert_eq!(task.figure().unwrap(), Figure::First);
/// assert_eq!(task.to_string(), "All;A;B/Some;B;C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub first: Proposition,
    pub second: Proposition,
}

impl Task {
    pub fn new(first: Proposition, second: Proposition) -> Self {
        Self { first, second }
    }

    /// The premises' terms without their quantifiers
    pub fn terms(&self) -> TaskTerms {
        TaskTerms::new(
            [self.first.subject.clone(), self.first.predicate.clone()],
            [self.second.subject.clone(), self.second.predicate.clone()],
        )
    }

    /// Determine the figure of this task
    ///
    /// Fails with `IndeterminateFigure` unless the premises share exactly one
    /// term: with none there is no figure, with two several rules apply.
    pub fn figure(&self) -> Result<Figure, EncodeError> {
        let indeterminate = || EncodeError::IndeterminateFigure {
            task: self.to_string(),
        };

        if self.terms().middle_terms().len() != 1 {
            return Err(indeterminate());
        }
        Figure::classify(&self.first, &self.second).ok_or_else(indeterminate)
    }

    /// Task code: both quantifier symbols followed by the figure digit (e.g., "AI1")
    pub fn code(&self) -> Result<String, EncodeError> {
        let figure = self.figure()?;
        Ok([
            self.first.quantifier.symbol(),
            self.second.quantifier.symbol(),
            figure.digit(),
        ]
        .iter()
        .collect())
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}
