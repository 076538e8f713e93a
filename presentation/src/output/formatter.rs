//! Output formatter trait

use sylcode_application::{EncodedRecord, EncodingSummary};

/// Trait for formatting encoding results
///
/// Rendering fails only when a value cannot be serialized.
pub trait OutputFormatter {
    /// Format a single task or response code
    fn format_code(&self, kind: &str, code: &str) -> serde_json::Result<String>;

    /// Format a whole batch, with its summary if requested
    fn format_batch(
        &self,
        records: &[EncodedRecord],
        summary: Option<&EncodingSummary>,
    ) -> serde_json::Result<String>;

    /// Format code counts of a batch
    fn format_summary(&self, summary: &EncodingSummary) -> serde_json::Result<String>;

    /// Format the quantifier vocabulary
    fn format_quantifiers(&self) -> serde_json::Result<String>;

    /// Format a list of response codes
    fn format_codes(&self, codes: &[String]) -> serde_json::Result<String>;
}
