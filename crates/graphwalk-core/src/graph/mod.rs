//! Graph model and path-finding engines
//!
//! - `bfs`: minimum-hop search over a FIFO frontier
//! - `dfs`: backtracking search over an explicit frame stack
//! - `path`: predecessor-map reconstruction shared by both
//! - `guard`: timeout and size ceilings shared by both
//! - `observer`: injected sink for traversal events

pub mod bfs;
pub mod dfs;
pub mod guard;
pub mod observer;
pub mod path;
pub mod traversal;
pub mod types;
pub mod verify;

pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use guard::{TraversalLimits, DEFAULT_MAX_FRONTIER, DEFAULT_TIMEOUT};
pub use observer::{
    NoopObserver, TracingObserver, TraversalEvent, TraversalObserver, WriterObserver,
};
pub use path::{reconstruct_path, Predecessors};
pub use traversal::GraphProvider;
pub use types::{Algorithm, Graph, NodeId, Path, DEFAULT_ARROW};
pub use verify::{verify_path, PathDefect};

use crate::error::TraversalError;

/// Run the search selected by `algorithm`
pub fn find_path(
    algorithm: Algorithm,
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    limits: &TraversalLimits,
    observer: &mut dyn TraversalObserver,
) -> Result<Option<Path>, TraversalError> {
    match algorithm {
        Algorithm::Bfs => bfs_find_path(provider, start, end, limits, observer),
        Algorithm::Dfs => dfs_find_path(provider, start, end, limits, observer),
    }
}
