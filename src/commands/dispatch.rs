//! Command dispatch logic for graphwalk

use std::time::{Duration, Instant};

use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::bail_invalid;
use graphwalk_core::graph::TraversalLimits;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub limits: TraversalLimits,
    /// Separator for printed paths and adjacency lines
    pub arrow: String,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration, then apply command-line overrides
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = GraphwalkConfig::resolve(cli.config.as_deref())?;

        let mut limits = config.limits();
        if let Some(secs) = cli.timeout_secs {
            limits = limits.with_timeout(Duration::from_secs(secs));
        }
        if let Some(max_frontier) = cli.max_frontier {
            limits = limits.with_max_frontier(max_frontier);
        }
        if limits.max_frontier == 0 {
            bail_invalid!("max_frontier", "0 (must be at least 1)");
        }

        debug!(
            timeout = ?limits.timeout,
            max_frontier = limits.max_frontier,
            elapsed = ?start.elapsed(),
            "resolve_config"
        );

        Ok(Self {
            cli,
            start,
            limits,
            arrow: config.output.arrow,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: run the interactive prompt
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let stdin = std::io::stdin();
        commands::interactive::execute(ctx, stdin.lock(), std::io::stdout())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Find(args) => commands::find::execute(ctx, args),
            Commands::Show(args) => commands::show::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
