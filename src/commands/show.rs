//! Show command: print a graph's adjacency list

use std::io::Write;

use graphwalk_core::error::Result;
use graphwalk_core::loader::load_graph;
use graphwalk_core::render::format_adjacency;
use graphwalk_core::trace_time;

use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::adjacency_json;

pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let graph = load_graph(&args.file)?;
    trace_time!(ctx.start, "load_graph", nodes = graph.len());

    let mut out = std::io::stdout().lock();
    match ctx.cli.format {
        OutputFormat::Human => write!(out, "{}", format_adjacency(&graph, &ctx.arrow))?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&adjacency_json(&graph))?
        )?,
    }
    Ok(())
}
