//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for encoding results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// A single JSON document
    Json,
    /// One JSON object per line
    Jsonl,
}

impl From<OutputFormat> for sylcode_domain::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Jsonl => Self::Jsonl,
        }
    }
}

/// CLI arguments for sylcode
#[derive(Parser, Debug)]
#[command(name = "sylcode")]
#[command(author, version, about = "Encode generalized syllogisms and responses into short codes")]
#[command(long_about = r#"
sylcode abbreviates generalized syllogistic tasks and responses.

A task is two premises, each [quantifier, subject, predicate]. Its code is the
symbol of each quantifier followed by the figure (e.g. AI1). A response is a
conclusion [quantifier, term, term] or NVC; its code is the quantifier symbol
followed by ac or ca (e.g. Aac), or NVC.

Quantifiers: All (A), No (E), Few not (P), Few (B), Most (T), Most not (D),
Many (K), Many not (G), Some (I), Some not (O).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./sylcode.toml      Project-level config
3. ~/.config/sylcode/config.toml   Global config

Example:
  sylcode task '[["All","A","B"],["Some","B","C"]]'
  sylcode response '["All","A","C"]' '[["All","A","B"],["Some","B","C"]]'
  sylcode batch records.jsonl --keep-going --summary
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print codes, no headers or summaries
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a task, given as JSON: [[q, s, p], [q, s, p]]
    Task {
        /// Task JSON
        task: String,
    },

    /// Encode a response relative to its task
    Response {
        /// Response JSON: [q, s, p], [[q, s, p]], "NVC" or ["NVC"]
        response: String,
        /// Task JSON: [[q, s, p], [q, s, p]]
        task: String,
    },

    /// Encode JSONL records ({"task": ..., "response": ...}) from a file or stdin
    Batch {
        /// Input file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Write JSONL results to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Report failing records and continue instead of stopping
        #[arg(long)]
        keep_going: bool,

        /// Print code counts after the batch
        #[arg(long)]
        summary: bool,
    },

    /// List the quantifier vocabulary and symbols
    Quantifiers,

    /// List every response code
    Codes,
}
