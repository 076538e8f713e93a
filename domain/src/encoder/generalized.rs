//! Generalized syllogistic encoder

use super::traits::DomainEncoder;
use crate::core::error::EncodeError;
use crate::syllogism::quantifier::Quantifier;
use crate::syllogism::response::{NVC, Response};
use crate::syllogism::task::{Task, TaskTerms};
use crate::syllogism::wire::{ResponseRepr, TaskRepr};

/// Encoder for generalized syllogisms over the ten-quantifier vocabulary
///
/// Works on the list representation exchanged with callers.
///
/// # Example
///
/// ```
/// use sylcode_domain::{DomainEncoder, GeneralizedSyllogisticEncoder, ResponseRepr, TaskRepr};
///
/// let encoder = GeneralizedSyllogisticEncoder;
/// let task: TaskRepr = serde_json::from_str(r#"[["All","A","B"],["Some","B","C"]]"#).unwrap();
/// let response: ResponseRepr = serde_json::from_str(r#"["All","A","C"]"#).unwrap();
///
/// assert_eq!(encoder.encode_task(&task).unwrap(), "AI1");
/// assert_eq!(encoder.encode_response(&response, &task).unwrap(), "Aac");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedSyllogisticEncoder;

impl GeneralizedSyllogisticEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Every response code this encoder can produce
    ///
    /// Each quantifier in both term orders, followed by `NVC`.
    pub fn response_codes() -> Vec<String> {
        Quantifier::ALL
            .iter()
            .flat_map(|q| ["ac", "ca"].map(|order| format!("{}{}", q.symbol(), order)))
            .chain(std::iter::once(NVC.to_string()))
            .collect()
    }
}

impl DomainEncoder for GeneralizedSyllogisticEncoder {
    type Task = TaskRepr;
    type Response = ResponseRepr;

    fn domain(&self) -> &'static str {
        "syllogistic-generalized"
    }

    fn encode_task(&self, task: &TaskRepr) -> Result<String, EncodeError> {
        Task::try_from(task)?.code()
    }

    fn encode_response(
        &self,
        response: &ResponseRepr,
        task: &TaskRepr,
    ) -> Result<String, EncodeError> {
        Response::try_from(response)?.code(|| TaskTerms::try_from(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(value: serde_json::Value) -> TaskRepr {
        serde_json::from_value(value).unwrap()
    }

    fn response(value: serde_json::Value) -> ResponseRepr {
        serde_json::from_value(value).unwrap()
    }

    fn ai1() -> TaskRepr {
        task(json!([["All", "A", "B"], ["Some", "B", "C"]]))
    }

    #[test]
    fn test_encode_task_figures() {
        let encoder = GeneralizedSyllogisticEncoder;
        assert_eq!(encoder.encode_task(&ai1()).unwrap(), "AI1");
        assert_eq!(
            encoder
                .encode_task(&task(json!([["All", "B", "A"], ["All", "B", "C"]])))
                .unwrap(),
            "AA4"
        );
        assert_eq!(
            encoder
                .encode_task(&task(json!([["All", "A", "B"], ["All", "C", "B"]])))
                .unwrap(),
            "AA3"
        );
        assert_eq!(
            encoder
                .encode_task(&task(json!([["All", "B", "A"], ["All", "C", "B"]])))
                .unwrap(),
            "AA2"
        );
    }

    #[test]
    fn test_encode_task_generalized_quantifiers() {
        let encoder = GeneralizedSyllogisticEncoder;
        let t = task(json!([["Few not", "x", "y"], ["Most not", "y", "z"]]));
        assert_eq!(encoder.encode_task(&t).unwrap(), "PD1");
    }

    #[test]
    fn test_encode_task_without_shared_term() {
        let encoder = GeneralizedSyllogisticEncoder;
        let err = encoder
            .encode_task(&task(json!([["All", "A", "B"], ["Some", "C", "D"]])))
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::IndeterminateFigure {
                task: "All;A;B/Some;C;D".to_string()
            }
        );
    }

    #[test]
    fn test_encode_task_unknown_quantifier_wins_over_figure() {
        let encoder = GeneralizedSyllogisticEncoder;
        let err = encoder
            .encode_task(&task(json!([["All", "A", "B"], ["Several", "C", "D"]])))
            .unwrap_err();
        assert_eq!(err, EncodeError::unknown_quantifier("Several"));
    }

    #[test]
    fn test_encode_response_order() {
        let encoder = GeneralizedSyllogisticEncoder;
        assert_eq!(
            encoder
                .encode_response(&response(json!(["All", "A", "C"])), &ai1())
                .unwrap(),
            "Aac"
        );
        assert_eq!(
            encoder
                .encode_response(&response(json!(["All", "C", "A"])), &ai1())
                .unwrap(),
            "Aca"
        );
    }

    #[test]
    fn test_encode_response_wrapped() {
        let encoder = GeneralizedSyllogisticEncoder;
        assert_eq!(
            encoder
                .encode_response(&response(json!([["Some not", "C", "A"]])), &ai1())
                .unwrap(),
            "Oca"
        );
    }

    #[test]
    fn test_encode_response_end_term_follows_premise_one() {
        // End term of premise 1 is C here, so "C ... A" is the ac order
        let encoder = GeneralizedSyllogisticEncoder;
        let t = task(json!([["Most", "B", "C"], ["Many", "A", "B"]]));
        assert_eq!(
            encoder
                .encode_response(&response(json!(["Many not", "C", "A"])), &t)
                .unwrap(),
            "Gac"
        );
    }

    #[test]
    fn test_encode_response_nvc() {
        let encoder = GeneralizedSyllogisticEncoder;
        for value in [json!("NVC"), json!(["NVC"]), json!([["NVC"]])] {
            assert_eq!(
                encoder.encode_response(&response(value), &ai1()).unwrap(),
                "NVC"
            );
        }
    }

    #[test]
    fn test_encode_response_nvc_skips_task_checks() {
        let encoder = GeneralizedSyllogisticEncoder;
        let malformed = task(json!([["All", "A", "B"]]));
        assert_eq!(
            encoder
                .encode_response(&response(json!("NVC")), &malformed)
                .unwrap(),
            "NVC"
        );
    }

    #[test]
    fn test_encode_task_with_both_terms_shared() {
        let encoder = GeneralizedSyllogisticEncoder;
        for t in [
            task(json!([["All", "A", "B"], ["Some", "B", "A"]])),
            task(json!([["All", "A", "B"], ["Some", "A", "B"]])),
        ] {
            assert!(matches!(
                encoder.encode_task(&t),
                Err(EncodeError::IndeterminateFigure { .. })
            ));
            // The response path rejects the same task
            assert!(matches!(
                encoder.encode_response(&response(json!(["All", "A", "B"])), &t),
                Err(EncodeError::AmbiguousEndTerm { .. })
            ));
        }
    }

    #[test]
    fn test_encode_response_ignores_task_quantifiers() {
        let encoder = GeneralizedSyllogisticEncoder;
        let t = task(json!([["Several", "A", "B"], ["Some", "B", "C"]]));
        assert_eq!(
            encoder
                .encode_response(&response(json!(["All", "A", "C"])), &t)
                .unwrap(),
            "Aac"
        );
        assert_eq!(
            encoder.encode_task(&t).unwrap_err(),
            EncodeError::unknown_quantifier("Several")
        );
    }

    #[test]
    fn test_encode_response_malformed_task() {
        let encoder = GeneralizedSyllogisticEncoder;
        let err = encoder
            .encode_response(
                &response(json!(["All", "A", "C"])),
                &task(json!([["All", "A", "B"]])),
            )
            .unwrap_err();
        assert!(matches!(err, EncodeError::MalformedTask(_)));
    }

    #[test]
    fn test_encode_response_unknown_quantifier() {
        let encoder = GeneralizedSyllogisticEncoder;
        let err = encoder
            .encode_response(&response(json!(["all", "A", "C"])), &ai1())
            .unwrap_err();
        assert_eq!(err, EncodeError::unknown_quantifier("all"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = GeneralizedSyllogisticEncoder;
        let r = response(json!(["Few", "C", "A"]));
        let first = encoder.encode_response(&r, &ai1()).unwrap();
        let second = encoder.encode_response(&r, &ai1()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            encoder.encode_task(&ai1()).unwrap(),
            encoder.encode_task(&ai1()).unwrap()
        );
    }

    #[test]
    fn test_response_codes() {
        let codes = GeneralizedSyllogisticEncoder::response_codes();
        assert_eq!(codes.len(), 21);
        assert_eq!(codes[0], "Aac");
        assert_eq!(codes[1], "Aca");
        assert_eq!(codes.last().map(String::as_str), Some("NVC"));
        assert!(codes.contains(&"Oca".to_string()));
    }

    #[test]
    fn test_domain_name() {
        assert_eq!(
            GeneralizedSyllogisticEncoder::new().domain(),
            "syllogistic-generalized"
        );
    }
}
