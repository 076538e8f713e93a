//! Syllogistic response value object

use super::proposition::Proposition;
use super::task::TaskTerms;
use crate::core::error::EncodeError;

/// Marker used for "no valid conclusion", both as input and as encoding
pub const NVC: &str = "NVC";

/// A response to a syllogistic task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Response {
    /// No syllogistic conclusion follows from the premises
    NoValidConclusion,
    /// A concluding statement relating the two end terms
    Conclusion(Proposition),
}

impl Response {
    /// Response code relative to the task it answers
    ///
    /// `NVC`, or the conclusion's quantifier symbol followed by `ac` when the
    /// conclusion's subject is the end term of premise 1 and `ca` otherwise.
    /// The task's terms are only resolved for a conclusion, so `NVC` encodes
    /// whatever the task looks like.
    pub fn code<F>(&self, task_terms: F) -> Result<String, EncodeError>
    where
        F: FnOnce() -> Result<TaskTerms, EncodeError>,
    {
        let conclusion = match self {
            Response::NoValidConclusion => return Ok(NVC.to_string()),
            Response::Conclusion(p) => p,
        };

        let terms = task_terms()?;
        let order = if &conclusion.subject == terms.subject_end_term()? {
            "ac"
        } else {
            "ca"
        };

        Ok(format!("{}{}", conclusion.quantifier.symbol(), order))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::NoValidConclusion => write!(f, "{}", NVC),
            Response::Conclusion(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllogism::proposition::Term;
    use crate::syllogism::quantifier::Quantifier;

    fn terms(first: [&str; 2], second: [&str; 2]) -> TaskTerms {
        TaskTerms::new(first.map(Term::from), second.map(Term::from))
    }

    fn ai1() -> Result<TaskTerms, EncodeError> {
        Ok(terms(["A", "B"], ["B", "C"]))
    }

    #[test]
    fn test_code_order() {
        let ac = Response::Conclusion(Proposition::new(Quantifier::No, "A", "C"));
        assert_eq!(ac.code(ai1).unwrap(), "Eac");

        let ca = Response::Conclusion(Proposition::new(Quantifier::Some, "C", "A"));
        assert_eq!(ca.code(ai1).unwrap(), "Ica");
    }

    #[test]
    fn test_code_nvc_never_resolves_task() {
        let code = Response::NoValidConclusion
            .code(|| Err(EncodeError::MalformedTask("expected 2 premises, got 0".to_string())))
            .unwrap();
        assert_eq!(code, "NVC");
    }

    #[test]
    fn test_code_propagates_task_error() {
        let r = Response::Conclusion(Proposition::new(Quantifier::All, "A", "C"));
        let err = r
            .code(|| Err(EncodeError::MalformedTask("premise 1 has 2 elements, expected 3".to_string())))
            .unwrap_err();
        assert!(matches!(err, EncodeError::MalformedTask(_)));
    }

    #[test]
    fn test_code_ambiguous_end_term() {
        let r = Response::Conclusion(Proposition::new(Quantifier::All, "A", "C"));
        assert!(matches!(
            r.code(|| Ok(terms(["A", "B"], ["C", "D"]))),
            Err(EncodeError::AmbiguousEndTerm { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Response::NoValidConclusion.to_string(), "NVC");
        let r = Response::Conclusion(Proposition::new(Quantifier::Some, "A", "C"));
        assert_eq!(r.to_string(), "Some;A;C");
    }
}
