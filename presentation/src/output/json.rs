//! JSON output formatter for encoding results

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use sylcode_application::{EncodedRecord, EncodingSummary};
use sylcode_domain::Quantifier;

/// Formats encoding results as JSON, pretty-printed or one line per value
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct Batch<'a> {
    records: &'a [EncodedRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a EncodingSummary>,
}

#[derive(Serialize)]
struct SummaryOnly<'a> {
    summary: &'a EncodingSummary,
}

#[derive(Serialize)]
struct QuantifierEntry {
    phrase: &'static str,
    symbol: String,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_code(&self, kind: &str, code: &str) -> serde_json::Result<String> {
        let mut object = serde_json::Map::new();
        object.insert(format!("{}_code", kind), code.into());
        self.render(&object)
    }

    fn format_batch(
        &self,
        records: &[EncodedRecord],
        summary: Option<&EncodingSummary>,
    ) -> serde_json::Result<String> {
        self.render(&Batch { records, summary })
    }

    fn format_summary(&self, summary: &EncodingSummary) -> serde_json::Result<String> {
        self.render(&SummaryOnly { summary })
    }

    fn format_quantifiers(&self) -> serde_json::Result<String> {
        let entries: Vec<_> = Quantifier::ALL
            .iter()
            .map(|q| QuantifierEntry {
                phrase: q.phrase(),
                symbol: q.symbol().to_string(),
            })
            .collect();
        self.render(&entries)
    }

    fn format_codes(&self, codes: &[String]) -> serde_json::Result<String> {
        self.render(codes)
    }
}
