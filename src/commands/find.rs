//! Find command: run BFS and DFS between two nodes
//!
//! Each search runs independently. A search that aborts on a guard is
//! reported and the next search still runs.

use std::io::{self, Write};
use std::path::{Path as FsPath, PathBuf};

use graphwalk_core::error::{GraphwalkError, Result, TraversalError};
use graphwalk_core::graph::{
    find_path, verify_path, Algorithm, Graph, Path, TracingObserver, TraversalLimits,
    TraversalObserver, WriterObserver,
};
use graphwalk_core::loader::load_graph;
use graphwalk_core::render::{format_adjacency, write_dot};
use graphwalk_core::{bail_usage, trace_time};

use crate::cli::{DebugMode, FindArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format;

/// How one search ended
#[derive(Debug)]
pub enum Outcome {
    Found(Path),
    NoPath,
    Aborted(TraversalError),
}

#[derive(Debug)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    /// DOT file written for the found path
    pub visualization: Option<PathBuf>,
}

#[derive(Debug)]
pub struct QueryReport {
    pub start: String,
    pub end: String,
    pub results: Vec<AlgorithmResult>,
}

impl QueryReport {
    pub fn first_error(&self) -> Option<&TraversalError> {
        self.results.iter().find_map(|r| match &r.outcome {
            Outcome::Aborted(e) => Some(e),
            _ => None,
        })
    }
}

/// Per-query switches shared by the find command and the interactive prompt
#[derive(Debug, Clone)]
pub struct QueryOptions<'a> {
    pub print: bool,
    pub debug: Option<DebugMode>,
    /// Directory receiving DOT files; `None` disables visualization
    pub visualize: Option<PathBuf>,
    pub algorithms: &'a [Algorithm],
    pub format: OutputFormat,
}

/// Run one search, tracing it to the terminal when `debug` selects it
pub fn search(
    graph: &Graph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
    limits: &TraversalLimits,
    debug: Option<DebugMode>,
    format: OutputFormat,
) -> Outcome {
    let mut observer: Box<dyn TraversalObserver> = match debug {
        Some(mode) if mode.applies_to(algorithm) => match format {
            // Keep stdout parseable when emitting JSON
            OutputFormat::Json => Box::new(WriterObserver::new(io::stderr())),
            OutputFormat::Human => Box::new(WriterObserver::new(io::stdout())),
        },
        _ => Box::new(TracingObserver),
    };

    match find_path(algorithm, graph, start, end, limits, observer.as_mut()) {
        Ok(Some(path)) => {
            if let Err(defect) = verify_path(graph, &path, start, end) {
                tracing::error!(
                    algorithm = %algorithm,
                    ?defect,
                    "returned path is not a valid walk"
                );
            }
            Outcome::Found(path)
        }
        Ok(None) => Outcome::NoPath,
        Err(e) => Outcome::Aborted(e),
    }
}

/// Directory next to the graph file, used when no explicit directory is given
pub fn default_visualize_dir(graph_file: &FsPath) -> PathBuf {
    graph_file
        .parent()
        .map(FsPath::to_path_buf)
        .unwrap_or_default()
}

fn dot_file_name(graph_file: &FsPath, algorithm: Algorithm) -> String {
    let stem = graph_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    format!("{}.{}.dot", stem, algorithm.as_str())
}

/// Run the selected searches and write the results to `out`
pub fn run_query<W: Write>(
    ctx: &CommandContext,
    graph: &Graph,
    graph_file: &FsPath,
    start: &str,
    end: &str,
    opts: &QueryOptions,
    out: &mut W,
) -> Result<QueryReport> {
    let format = opts.format;

    if opts.print && format == OutputFormat::Human {
        writeln!(out, "Graph:")?;
        write!(out, "{}", format_adjacency(graph, &ctx.arrow))?;
    }

    let mut results = Vec::with_capacity(opts.algorithms.len());
    for &algorithm in opts.algorithms {
        let outcome = search(graph, start, end, algorithm, &ctx.limits, opts.debug, format);
        trace_time!(ctx.start, "search", algorithm = algorithm.as_str());

        let visualization = match (&outcome, &opts.visualize) {
            (Outcome::Found(path), Some(dir)) => {
                let target = dir.join(dot_file_name(graph_file, algorithm));
                write_dot(graph, Some(path), &target)?;
                Some(target)
            }
            _ => None,
        };

        results.push(AlgorithmResult {
            algorithm,
            outcome,
            visualization,
        });
    }

    let report = QueryReport {
        start: start.to_string(),
        end: end.to_string(),
        results,
    };

    match format {
        OutputFormat::Human => format::write_human(out, &report, &ctx.arrow, ctx.cli.quiet)?,
        OutputFormat::Json => {
            let adjacency = opts.print.then_some(graph);
            let json = format::report_json(&report, adjacency);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }

    Ok(report)
}

fn require_node(graph: &Graph, id: &str) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(GraphwalkError::NodeNotFound { id: id.to_string() })
    }
}

/// Execute the find command
pub fn execute(ctx: &CommandContext, args: &FindArgs) -> Result<()> {
    if let Some(Some(dir)) = &args.visualize {
        if !dir.is_dir() {
            bail_usage!(format!("not a directory: {}", dir.display()));
        }
    }

    let graph = load_graph(&args.file)?;
    trace_time!(ctx.start, "load_graph", nodes = graph.len());

    require_node(&graph, &args.start)?;
    require_node(&graph, &args.end)?;

    let opts = QueryOptions {
        print: args.print,
        debug: args.debug,
        visualize: args
            .visualize
            .as_ref()
            .map(|dir| dir.clone().unwrap_or_else(|| default_visualize_dir(&args.file))),
        algorithms: args.algorithm.algorithms(),
        format: ctx.cli.format,
    };

    let report = run_query(
        ctx,
        &graph,
        &args.file,
        &args.start,
        &args.end,
        &opts,
        &mut io::stdout().lock(),
    )?;

    match report.first_error() {
        Some(e) => Err(e.clone().into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_file_name() {
        assert_eq!(
            dot_file_name(FsPath::new("data/roads.csv"), Algorithm::Bfs),
            "roads.bfs.dot"
        );
        assert_eq!(
            dot_file_name(FsPath::new("roads.csv"), Algorithm::Dfs),
            "roads.dfs.dot"
        );
    }

    #[test]
    fn test_default_visualize_dir() {
        assert_eq!(
            default_visualize_dir(FsPath::new("data/roads.csv")),
            PathBuf::from("data")
        );
        assert_eq!(default_visualize_dir(FsPath::new("roads.csv")), PathBuf::new());
    }

    #[test]
    fn test_search_outcomes() {
        let graph: Graph = [("1", vec!["2"]), ("2", vec![]), ("3", vec![])]
            .into_iter()
            .collect();
        let limits = TraversalLimits::default();

        let found = search(&graph, "1", "2", Algorithm::Bfs, &limits, None, OutputFormat::Human);
        assert!(matches!(found, Outcome::Found(ref p) if p.hops() == 1));

        let none = search(&graph, "1", "3", Algorithm::Dfs, &limits, None, OutputFormat::Human);
        assert!(matches!(none, Outcome::NoPath));

        let aborted = search(
            &graph,
            "1",
            "2",
            Algorithm::Dfs,
            &limits.with_timeout(std::time::Duration::ZERO),
            None,
            OutputFormat::Human,
        );
        assert!(matches!(aborted, Outcome::Aborted(TraversalError::Timeout { .. })));
    }
}
