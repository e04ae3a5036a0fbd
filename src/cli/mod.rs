//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --timeout-secs, --max-frontier

pub mod args;
pub mod output;

use std::path::PathBuf;

use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, Subcommand};
use graphwalk_core::error::GraphwalkError;

pub use args::{DebugMode, FindArgs, ShowArgs};
pub use output::OutputFormat;

/// Graphwalk - BFS and DFS path finding over CSV graphs
///
/// Run without a subcommand for the interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "trace", "graphwalk_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Abort a traversal after this many seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Abort when the BFS frontier or DFS stack grows beyond this size
    #[arg(long, global = true)]
    pub max_frontier: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes with BFS and DFS
    Find(FindArgs),

    /// Print the adjacency list of a graph file
    Show(ShowArgs),
}

/// Whether the raw arguments ask for JSON output.
///
/// Used when clap rejects the command line before `--format` is parsed.
pub fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let json = match arg.as_str() {
            "--format=json" => true,
            "--format" => args.next().as_deref() == Some("json"),
            _ => false,
        };
        if json {
            return true;
        }
    }
    false
}

/// Map a command-line parse failure onto graphwalk's error types
pub fn parse_error(err: &clap::Error) -> GraphwalkError {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let arg = err
                .get(ContextKind::InvalidArg)
                .map(ToString::to_string)
                .unwrap_or_else(|| "argument".to_string());
            let value = err
                .get(ContextKind::InvalidValue)
                .map(ToString::to_string)
                .unwrap_or_default();
            GraphwalkError::invalid_value(&arg, value)
        }
        _ => {
            let rendered = err.to_string();
            let message = rendered.lines().next().unwrap_or_default();
            GraphwalkError::UsageError(message.trim_start_matches("error: ").to_string())
        }
    }
}
