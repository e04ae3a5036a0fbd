//! Breadth-first path search
//!
//! Returns a path with the fewest edges. Among several shortest paths the one
//! returned follows neighbor enumeration order.

use std::collections::{HashSet, VecDeque};

use crate::error::TraversalError;
use crate::graph::guard::{TraversalGuard, TraversalLimits};
use crate::graph::observer::{TraversalEvent, TraversalObserver};
use crate::graph::path::{reconstruct_path, Predecessors};
use crate::graph::types::{Algorithm, NodeId, Path};
use crate::graph::GraphProvider;

/// Per-call traversal state, dropped when the call returns
struct BfsState {
    frontier: VecDeque<(NodeId, usize)>,
    visited: HashSet<NodeId>,
    predecessors: Predecessors,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let start = start.to_string();
        let mut state = Self {
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            predecessors: Predecessors::new(),
        };
        state.frontier.push_back((start.clone(), 0));
        state.visited.insert(start.clone());
        state.predecessors.insert(start, None);
        state
    }

    /// Enqueue every not-yet-visited neighbor of `current`
    fn expand(&mut self, provider: &dyn GraphProvider, current: &str, level: usize) {
        for neighbor in provider.neighbors(current) {
            if self.visited.insert(neighbor.clone()) {
                self.predecessors
                    .insert(neighbor.clone(), Some(current.to_string()));
                self.frontier.push_back((neighbor.clone(), level + 1));
            }
        }
    }
}

/// Find a minimum-hop path from `start` to `end`.
///
/// Returns `Ok(None)` when `end` is unreachable. The frontier length and the
/// elapsed time are checked before every dequeue; exceeding either aborts
/// the call with an error.
#[tracing::instrument(
    skip(provider, limits, observer),
    fields(start = %start, end = %end, max_frontier = limits.max_frontier)
)]
pub fn bfs_find_path(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    limits: &TraversalLimits,
    observer: &mut dyn TraversalObserver,
) -> Result<Option<Path>, TraversalError> {
    let guard = TraversalGuard::start(Algorithm::Bfs, *limits);
    let mut state = BfsState::new(start);

    while !state.frontier.is_empty() {
        guard.check(state.frontier.len())?;

        let Some((current, level)) = state.frontier.pop_front() else {
            break;
        };

        observer.on_event(
            Algorithm::Bfs,
            &TraversalEvent::Dequeued {
                node: &current,
                level,
                frontier: &state.frontier,
                visited: &state.visited,
                elapsed: guard.elapsed(),
            },
        );

        if current == end {
            let path = reconstruct_path(&state.predecessors, start, end)?;
            tracing::debug!(
                hops = path.hops(),
                visited = state.visited.len(),
                elapsed = ?guard.elapsed(),
                "bfs_path_found"
            );
            return Ok(Some(path));
        }

        state.expand(provider, &current, level);
    }

    tracing::debug!(
        visited = state.visited.len(),
        elapsed = ?guard.elapsed(),
        "bfs_no_path"
    );
    Ok(None)
}
