//! Graphwalk - find paths through a CSV-defined graph
//!
//! Loads an adjacency list and searches it twice: breadth-first for a
//! minimum-hop path, then depth-first for any path.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help, version and human-format errors keep clap's own rendering
        Err(err) if !err.use_stderr() || !cli::argv_requests_json(std::env::args()) => {
            err.exit()
        }
        Err(err) => return report(&cli::parse_error(&err), OutputFormat::Json, false),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print `error` in the requested format and return its exit code
fn report(error: &GraphwalkError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}
