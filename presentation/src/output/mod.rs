//! Output formatting for encoding results

pub mod console;
pub mod formatter;
pub mod json;

use formatter::OutputFormatter;
use sylcode_domain::OutputFormat;

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter::pretty()),
        OutputFormat::Jsonl => Box::new(json::JsonFormatter::compact()),
    }
}
