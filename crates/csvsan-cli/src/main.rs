//! csv-sanitize binary.

use std::fs::File;
use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tracing::{info, level_filters::LevelFilter};

use csvsan_cli::logging::{LogConfig, LogFormat, init_logging};
use csvsan_cli::pipeline::{PipelineSummary, run};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let stdout = io::stdout().lock();
    let result = match &cli.input {
        Some(path) => File::open(path)
            .with_context(|| format!("open input file {}", path.display()))
            .and_then(|file| run(file, stdout)),
        None => run(io::stdin().lock(), stdout),
    };
    // Dropped rows are expected with dirty input and do not fail the run.
    let exit_code = match result {
        Ok(summary) => {
            log_summary(&summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn log_summary(summary: &PipelineSummary) {
    info!(
        rows_read = summary.rows_read,
        rows_written = summary.rows_written,
        rows_dropped = summary.rows_dropped,
        header_seen = summary.header_seen,
        "run complete"
    );
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
