//! CLI entrypoint for sylcode
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use sylcode_application::{
    EncodeRecordsOutput, EncodeRecordsUseCase, EncodingParams, EncodingSink, NoEncodingSink,
};
use sylcode_domain::{
    DomainEncoder, GeneralizedSyllogisticEncoder, OutputFormat, ResponseRepr, TaskRepr,
};
use sylcode_infrastructure::{ConfigLoader, FileConfig, JsonlEncodingWriter, JsonlRecordSource};
use sylcode_presentation::{Cli, Command, ConsoleSink, OutputFormatter, formatter_for};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting sylcode");

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);
    debug!("Output format: {:?}", format);

    // === Dependency Injection ===
    let encoder = Arc::new(GeneralizedSyllogisticEncoder::new());

    let Some(command) = cli.command else {
        bail!("A command is required. Use --help to list commands.");
    };

    match command {
        Command::Task { task } => {
            let task: TaskRepr = parse_json(&task, "task")?;
            let code = encoder.encode_task(&task)?;
            println!("{}", formatter.format_code("task", &code)?);
        }
        Command::Response { response, task } => {
            let response: ResponseRepr = parse_json(&response, "response")?;
            let task: TaskRepr = parse_json(&task, "task")?;
            let code = encoder.encode_response(&response, &task)?;
            println!("{}", formatter.format_code("response", &code)?);
        }
        Command::Batch {
            input,
            out,
            keep_going,
            summary,
        } => {
            let options = BatchOptions {
                input,
                out,
                format,
                params: config
                    .encoding
                    .to_params()
                    .with_fail_fast(config.encoding.fail_fast && !keep_going),
                show_summary: (summary || config.output.summary) && !cli.quiet,
            };
            run_batch(encoder, &options, formatter.as_ref())?;
        }
        Command::Quantifiers => {
            println!("{}", formatter.format_quantifiers()?);
        }
        Command::Codes => {
            let codes = GeneralizedSyllogisticEncoder::response_codes();
            println!("{}", formatter.format_codes(&codes)?);
        }
    }

    Ok(())
}

/// Load and validate configuration according to CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(first) = issues.first() {
        bail!("Invalid configuration: {}", first);
    }

    Ok(config)
}

fn parse_json<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    serde_json::from_str(text).with_context(|| format!("Invalid {} JSON: {}", what, text))
}

struct BatchOptions {
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    format: OutputFormat,
    params: EncodingParams,
    show_summary: bool,
}

fn run_batch(
    encoder: Arc<GeneralizedSyllogisticEncoder>,
    options: &BatchOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    // A single JSON document needs every record; the other formats stream
    let collect = options.out.is_none() && options.format == OutputFormat::Json;

    let sink: Arc<dyn EncodingSink> = match (&options.out, options.format) {
        (Some(path), _) => Arc::new(
            JsonlEncodingWriter::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        (None, OutputFormat::Text) => Arc::new(ConsoleSink),
        (None, OutputFormat::Jsonl) => Arc::new(JsonlEncodingWriter::stdout()),
        (None, OutputFormat::Json) => Arc::new(NoEncodingSink),
    };

    let use_case = EncodeRecordsUseCase::new(encoder).with_sink(sink);
    let params = options.params.clone().with_collect_records(collect);

    let output = match options.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let mut source = JsonlRecordSource::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            use_case.execute(&mut source, &params)?
        }
        _ => {
            let mut source = JsonlRecordSource::new(std::io::stdin().lock());
            use_case.execute(&mut source, &params)?
        }
    };
    // Flush streamed records before anything else is printed
    drop(use_case);

    match render_report(&output, options, collect, formatter)? {
        Some((Stream::Stdout, report)) => println!("{}", report),
        Some((Stream::Stderr, report)) => eprintln!("{}", report),
        None => {}
    }

    if output.summary.failed > 0 {
        bail!(
            "{} of {} records failed to encode",
            output.summary.failed,
            output.summary.total
        );
    }

    Ok(())
}

/// Stream a batch report is printed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Render what follows a batch: the collected records, the summary, or nothing
fn render_report(
    output: &EncodeRecordsOutput,
    options: &BatchOptions,
    collect: bool,
    formatter: &dyn OutputFormatter,
) -> Result<Option<(Stream, String)>> {
    let summary = options.show_summary.then_some(&output.summary);

    if collect {
        let report = formatter.format_batch(&output.records, summary)?;
        return Ok(Some((Stream::Stdout, report)));
    }

    let Some(summary) = summary else {
        return Ok(None);
    };

    // Keep a streamed JSONL stdout free of anything but records
    let stream = match (options.format, &options.out) {
        (OutputFormat::Jsonl, None) => Stream::Stderr,
        _ => Stream::Stdout,
    };
    Ok(Some((stream, formatter.format_summary(summary)?)))
}
