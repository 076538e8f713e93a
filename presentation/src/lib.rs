//! Presentation layer for sylcode
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::{
    console::{ConsoleFormatter, ConsoleSink},
    formatter::OutputFormatter,
    formatter_for,
    json::JsonFormatter,
};
