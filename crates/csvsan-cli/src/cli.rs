//! CLI argument definitions for the CSV sanitizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csv-sanitize",
    version,
    about = "Canonicalize delimited event records from stdin to stdout",
    long_about = "Read delimited event records and write a canonicalized stream.\n\n\
                  Repairs invalid UTF-8, converts US Pacific timestamps to ISO 8601\n\
                  US Eastern, rewrites durations as decimal seconds, zero-pads postal\n\
                  codes, upper-cases names, and drops rows that cannot be normalized\n\
                  with a diagnostic on stderr."
)]
pub struct Cli {
    /// Input file (reads stdin when omitted).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
