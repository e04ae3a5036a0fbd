//! Configuration type definitions

use serde::Deserialize;

use crate::graph::{DEFAULT_ARROW, DEFAULT_MAX_FRONTIER, DEFAULT_TIMEOUT};

/// Top-level graphwalk configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GraphwalkConfig {
    /// Traversal ceilings
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Human output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ceilings applied to every traversal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Wall-clock ceiling per traversal, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum BFS frontier length / DFS stack depth
    #[serde(default = "default_max_frontier")]
    pub max_frontier: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_frontier: default_max_frontier(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Separator between nodes when printing paths and adjacency lists
    #[serde(default = "default_arrow")]
    pub arrow: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            arrow: default_arrow(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_max_frontier() -> usize {
    DEFAULT_MAX_FRONTIER
}

fn default_arrow() -> String {
    DEFAULT_ARROW.to_string()
}
