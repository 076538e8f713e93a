//! Console output formatter for encoding results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use sylcode_application::{EncodedRecord, EncodingSink, EncodingSummary};
use sylcode_domain::{NVC, Quantifier};

/// Formats encoding results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single code; text output is the bare code
    pub fn format_code(code: &str) -> String {
        code.to_string()
    }

    /// Format one batch record as `line  [id]  task  response`
    pub fn format_record(record: &EncodedRecord) -> String {
        let prefix = match &record.id {
            Some(id) => format!("{:>5}  {}", record.line, id),
            None => format!("{:>5}", record.line),
        };

        match &record.error {
            Some(failure) => format!(
                "{}  {} {}",
                prefix.dimmed(),
                failure.kind.red().bold(),
                failure.message
            ),
            None => format!(
                "{}  {}  {}",
                prefix.dimmed(),
                record.task_code.as_deref().unwrap_or("-").yellow().bold(),
                record.response_code.as_deref().unwrap_or("-")
            ),
        }
    }

    /// Format code counts as a per-task table
    pub fn format_summary(summary: &EncodingSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "{} {}  {} {}  {} {}\n",
            "records:".cyan().bold(),
            summary.total,
            "encoded:".green().bold(),
            summary.encoded(),
            "failed:".red().bold(),
            summary.failed
        ));

        for (task_code, count) in &summary.tasks {
            output.push_str(&format!("\n{} ({})", task_code.yellow().bold(), count));
            if let Some((modal, _)) = summary.modal_response(task_code) {
                output.push_str(&format!("  {} {}", "mode".dimmed(), modal.green()));
            }
            output.push('\n');
            if let Some(responses) = summary.responses.get(task_code) {
                let line = responses
                    .iter()
                    .map(|(code, n)| format!("{}={}", code, n))
                    .collect::<Vec<_>>()
                    .join("  ");
                output.push_str(&Self::indent(&line, "  "));
                output.push('\n');
            }
        }

        output
    }

    /// Format the quantifier table
    pub fn format_quantifiers() -> String {
        Quantifier::ALL
            .iter()
            .map(|q| format!("{}  {}", q.symbol().to_string().yellow().bold(), q.phrase()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format response codes, one per line with the quantifier they carry
    pub fn format_codes(codes: &[String]) -> String {
        codes
            .iter()
            .map(|code| {
                let meaning = match code.chars().next().and_then(Quantifier::from_symbol) {
                    Some(q) if code != NVC => q.phrase(),
                    _ => "No valid conclusion",
                };
                format!("{}  {}", code.yellow().bold(), meaning)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_code(&self, _kind: &str, code: &str) -> serde_json::Result<String> {
        Ok(Self::format_code(code))
    }

    fn format_batch(
        &self,
        records: &[EncodedRecord],
        summary: Option<&EncodingSummary>,
    ) -> serde_json::Result<String> {
        let mut output = records
            .iter()
            .map(Self::format_record)
            .collect::<Vec<_>>()
            .join("\n");
        if let Some(summary) = summary {
            output.push('\n');
            output.push_str(&Self::format_summary(summary));
        }
        Ok(output)
    }

    fn format_summary(&self, summary: &EncodingSummary) -> serde_json::Result<String> {
        Ok(Self::format_summary(summary))
    }

    fn format_quantifiers(&self) -> serde_json::Result<String> {
        Ok(Self::format_quantifiers())
    }

    fn format_codes(&self, codes: &[String]) -> serde_json::Result<String> {
        Ok(Self::format_codes(codes))
    }
}

/// Sink that prints each encoded record to stdout as it arrives
pub struct ConsoleSink;

impl EncodingSink for ConsoleSink {
    fn emit(&self, record: &EncodedRecord) {
        println!("{}", ConsoleFormatter::format_record(record));
    }
}
