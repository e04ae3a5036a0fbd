use std::path::PathBuf;

use clap::{Args, ValueEnum};
use graphwalk_core::graph::Algorithm;

/// Which traversals print a debug trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DebugMode {
    /// Trace both searches
    All,
    /// Trace breadth-first search only
    Bfs,
    /// Trace depth-first search only
    Dfs,
}

impl DebugMode {
    /// Map the interactive single-letter flag (`d`, `b`, `f`)
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "d" => Some(DebugMode::All),
            "b" => Some(DebugMode::Bfs),
            "f" => Some(DebugMode::Dfs),
            _ => None,
        }
    }

    pub fn applies_to(&self, algorithm: Algorithm) -> bool {
        matches!(
            (self, algorithm),
            (DebugMode::All, _)
                | (DebugMode::Bfs, Algorithm::Bfs)
                | (DebugMode::Dfs, Algorithm::Dfs)
        )
    }
}

/// Which searches to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmChoice {
    #[default]
    Both,
    Bfs,
    Dfs,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Both => &Algorithm::ALL,
            AlgorithmChoice::Bfs => &[Algorithm::Bfs],
            AlgorithmChoice::Dfs => &[Algorithm::Dfs],
        }
    }
}

/// Arguments for the find command.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Graph file (.csv)
    pub file: PathBuf,

    /// Start node id
    pub start: String,

    /// End node id
    pub end: String,

    /// Print the adjacency list before searching
    #[arg(long, short)]
    pub print: bool,

    /// Print a traversal trace (all, bfs, dfs)
    #[arg(long, short, value_enum, num_args = 0..=1, default_missing_value = "all")]
    pub debug: Option<DebugMode>,

    /// Write a Graphviz DOT file per found path (defaults to the graph's directory)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub visualize: Option<Option<PathBuf>>,

    /// Searches to run
    #[arg(long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmChoice,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Graph file (.csv)
    pub file: PathBuf,
}
