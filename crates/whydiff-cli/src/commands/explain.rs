//! Explain command
//!
//! Usage: whydiff explain <BEFORE> <AFTER> [--name <NAME>] [--max-depth <D>]
//!        [--no-shallow-top-level] [--exclude <FIELD>]... [--config <FILE>]
//!        [--format text|json|log] [--log-profile <PROFILE>]

use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use whydiff_core::logging_facility::{self, Profile};
use whydiff_core::{
    explain, log_op_error, ConsoleSink, ExplainOptions, RecordingSink, Result, TracingSink, Value,
    WhyDiffError,
};

/// Positional value meaning "read this document from stdin"
const STDIN: &str = "-";
const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented console trace on stdout
    Text,
    /// Recorded trace events as a JSON array on stdout
    Json,
    /// Trace routed through the logging facility on stderr
    Log,
}

#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// JSON document holding the previous value (`-` for stdin)
    pub before: String,

    /// JSON document holding the next value (`-` for stdin)
    pub after: String,

    /// Label for the top-level comparison
    #[arg(short, long, default_value = "value")]
    pub name: String,

    /// Recursion ceiling; negative aborts at the top level
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i32>,

    /// Keep going when the top level is only shallow equal
    #[arg(long)]
    pub no_shallow_top_level: bool,

    /// Field name never descended into (repeatable, replaces the defaults)
    #[arg(short = 'x', long = "exclude", value_name = "FIELD")]
    pub exclude: Vec<String>,

    /// TOML options file; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable tool logs on stderr (development or production)
    #[arg(long)]
    pub log_profile: Option<Profile>,
}

/// Execute explain command
pub fn execute(args: ExplainArgs) -> Result<()> {
    match (args.log_profile, args.format) {
        (Some(profile), _) => logging_facility::init(profile),
        (None, OutputFormat::Log) => logging_facility::init(Profile::Development),
        (None, _) => {}
    }

    let started = Instant::now();
    run(&args).inspect_err(|err| {
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log_op_error!("explain_command", err.clone(), duration_ms = duration_ms);
    })
}

fn run(args: &ExplainArgs) -> Result<()> {
    if args.before == STDIN && args.after == STDIN {
        return Err(WhyDiffError::InvalidInput {
            reason: "only one of BEFORE and AFTER can be read from stdin".to_string(),
        });
    }

    let options = layered_options(args)?;
    let before = load_value(&args.before)?;
    let after = load_value(&args.after)?;

    match args.format {
        OutputFormat::Text => {
            let mut sink = ConsoleSink::new(std::io::stdout().lock());
            explain(&args.name, &before, &after, &options, &mut sink);
            sink.finish()?;
        }
        OutputFormat::Json => {
            let mut sink = RecordingSink::new();
            explain(&args.name, &before, &after, &options, &mut sink);
            println!("{}", serde_json::to_string_pretty(sink.events())?);
        }
        OutputFormat::Log => {
            let mut sink = TracingSink::new();
            explain(&args.name, &before, &after, &options, &mut sink);
        }
    }

    Ok(())
}

/// Options file first, then flags on top
fn layered_options(args: &ExplainArgs) -> Result<ExplainOptions> {
    let from_file = match &args.config {
        Some(path) => ExplainOptions::load(path)?,
        None => ExplainOptions::new(),
    };

    let mut from_flags = ExplainOptions::new();
    if let Some(max_depth) = args.max_depth {
        from_flags = from_flags.with_max_depth(max_depth);
    }
    if args.no_shallow_top_level {
        from_flags = from_flags.with_top_level_shallow_comparable(false);
    }
    if !args.exclude.is_empty() {
        from_flags = from_flags.with_excluded_field_names(args.exclude.iter().cloned());
    }

    Ok(from_file.merge(from_flags))
}

fn load_value(source: &str) -> Result<Value> {
    if source == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| WhyDiffError::Read {
                path: PathBuf::from(STDIN_NAME),
                reason: e.to_string(),
            })?;
        return Value::from_json_str(STDIN_NAME, &text);
    }

    let text = std::fs::read_to_string(source).map_err(|e| WhyDiffError::Read {
        path: PathBuf::from(source),
        reason: e.to_string(),
    })?;
    Value::from_json_str(source, &text)
}
