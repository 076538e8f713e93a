//! Aggregation of encoded records by code
//!
//! Groups a batch by task code and, within each task, by response code.
//! This is what downstream comparisons work from: two records with the same
//! codes are the same syllogism answered the same way, whatever their terms.

use crate::ports::encoding_sink::EncodedRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of a batch of encoded records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingSummary {
    /// Records seen, including failures
    pub total: usize,
    /// Records that failed to encode
    pub failed: usize,
    /// Records per task code
    pub tasks: BTreeMap<String, usize>,
    /// Records per task code, then per response code
    pub responses: BTreeMap<String, BTreeMap<String, usize>>,
}

impl EncodingSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one encoded record
    pub fn record(&mut self, record: &EncodedRecord) {
        self.total += 1;

        let Some(task_code) = &record.task_code else {
            self.failed += 1;
            return;
        };

        *self.tasks.entry(task_code.clone()).or_default() += 1;

        if let Some(response_code) = &record.response_code {
            *self
                .responses
                .entry(task_code.clone())
                .or_default()
                .entry(response_code.clone())
                .or_default() += 1;
        }
    }

    /// Records that encoded successfully
    pub fn encoded(&self) -> usize {
        self.total - self.failed
    }

    /// Most frequent response code for a task, ties broken by code order
    pub fn modal_response(&self, task_code: &str) -> Option<(&str, usize)> {
        self.responses
            .get(task_code)?
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (code, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((code.as_str(), *count)),
            })
    }
}

impl<'a> FromIterator<&'a EncodedRecord> for EncodingSummary {
    fn from_iter<I: IntoIterator<Item = &'a EncodedRecord>>(iter: I) -> Self {
        let mut summary = Self::new();
        for record in iter {
            summary.record(record);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::encoding_sink::RecordFailure;

    fn ok(task: &str, response: Option<&str>) -> EncodedRecord {
        EncodedRecord::success(1, None, task.to_string(), response.map(str::to_string))
    }

    #[test]
    fn test_counts() {
        let records = [
            ok("AI1", Some("Iac")),
            ok("AI1", Some("Iac")),
            ok("AI1", Some("NVC")),
            ok("EA4", None),
            EncodedRecord::failure(5, None, RecordFailure::new("indeterminate_figure", "x")),
        ];
        let summary: EncodingSummary = records.iter().collect();

        assert_eq!(summary.total, 5);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.encoded(), 4);
        assert_eq!(summary.tasks["AI1"], 3);
        assert_eq!(summary.tasks["EA4"], 1);
        assert_eq!(summary.responses["AI1"]["Iac"], 2);
        assert_eq!(summary.responses["AI1"]["NVC"], 1);
        assert!(!summary.responses.contains_key("EA4"));
    }

    #[test]
    fn test_modal_response() {
        let records = [
            ok("AA1", Some("NVC")),
            ok("AA1", Some("Aac")),
            ok("AA1", Some("Aac")),
        ];
        let summary: EncodingSummary = records.iter().collect();
        assert_eq!(summary.modal_response("AA1"), Some(("Aac", 2)));
        assert_eq!(summary.modal_response("EE2"), None);
    }

    #[test]
    fn test_modal_response_tie_prefers_first_code() {
        let records = [ok("AA1", Some("Iac")), ok("AA1", Some("Aac"))];
        let summary: EncodingSummary = records.iter().collect();
        assert_eq!(summary.modal_response("AA1"), Some(("Aac", 1)));
    }
}
