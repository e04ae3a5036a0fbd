//! Depth-first path search with backtracking
//!
//! The traversal stack is an explicit `Vec` of frames, so its depth is an
//! ordinary integer that the guard can bound. Visited nodes are shared by
//! every branch: a node is explored at most once per call.

use std::collections::HashSet;

use crate::error::TraversalError;
use crate::graph::guard::{TraversalGuard, TraversalLimits};
use crate::graph::observer::{TraversalEvent, TraversalObserver};
use crate::graph::path::{reconstruct_path, Predecessors};
use crate::graph::types::{Algorithm, NodeId, Path};
use crate::graph::GraphProvider;

/// A node on the DFS stack and how far its neighbor list has been consumed
struct Frame<'a> {
    node: NodeId,
    neighbors: &'a [NodeId],
    next: usize,
}

impl<'a> Frame<'a> {
    /// Advance to the next neighbor that has not been visited yet
    fn next_unvisited(&mut self, visited: &HashSet<NodeId>) -> Option<&'a NodeId> {
        let neighbors = self.neighbors;
        while let Some(neighbor) = neighbors.get(self.next) {
            self.next += 1;
            if !visited.contains(neighbor) {
                return Some(neighbor);
            }
        }
        None
    }
}

struct DfsWalk<'a, 'o> {
    provider: &'a dyn GraphProvider,
    end: &'a str,
    guard: TraversalGuard,
    visited: HashSet<NodeId>,
    predecessors: Predecessors,
    frames: Vec<Frame<'a>>,
    observer: &'o mut dyn TraversalObserver,
}

impl<'a, 'o> DfsWalk<'a, 'o> {
    /// Arrive at `node`. Returns `true` when it is the target.
    fn enter(&mut self, node: &str) -> Result<bool, TraversalError> {
        let stack_size = self.frames.len();
        self.guard.check(stack_size)?;

        self.observer.on_event(
            Algorithm::Dfs,
            &TraversalEvent::Entered {
                node,
                depth: stack_size,
                stack_size,
                visited: &self.visited,
                elapsed: self.guard.elapsed(),
            },
        );

        if node == self.end {
            return Ok(true);
        }

        let provider = self.provider;
        self.visited.insert(node.to_string());
        self.frames.push(Frame {
            node: node.to_string(),
            neighbors: provider.neighbors(node),
            next: 0,
        });
        Ok(false)
    }

    /// Run from `start` until the target is entered or the stack empties
    fn run(&mut self, start: &str) -> Result<bool, TraversalError> {
        if self.enter(start)? {
            return Ok(true);
        }

        while let Some(top) = self.frames.last_mut() {
            match top.next_unvisited(&self.visited) {
                Some(neighbor) => {
                    // Set once: the neighbor becomes visited on entry
                    let parent = top.node.clone();
                    self.predecessors.insert(neighbor.clone(), Some(parent));
                    if self.enter(neighbor)? {
                        return Ok(true);
                    }
                }
                None => {
                    if let Some(done) = self.frames.pop() {
                        self.observer.on_event(
                            Algorithm::Dfs,
                            &TraversalEvent::Backtracked {
                                node: &done.node,
                                depth: self.frames.len(),
                            },
                        );
                    }
                }
            }
        }

        Ok(false)
    }
}

/// Find some path from `start` to `end` by depth-first exploration.
///
/// No shortest-path guarantee. Returns `Ok(None)` when `end` is unreachable.
/// The stack depth and the elapsed time are checked on entry to every node.
#[tracing::instrument(
    skip(provider, limits, observer),
    fields(start = %start, end = %end, max_frontier = limits.max_frontier)
)]
pub fn dfs_find_path(
    provider: &dyn GraphProvider,
    start: &str,
    end: &str,
    limits: &TraversalLimits,
    observer: &mut dyn TraversalObserver,
) -> Result<Option<Path>, TraversalError> {
    let mut predecessors = Predecessors::new();
    predecessors.insert(start.to_string(), None);

    let mut walk = DfsWalk {
        provider,
        end,
        guard: TraversalGuard::start(Algorithm::Dfs, *limits),
        visited: HashSet::new(),
        predecessors,
        frames: Vec::new(),
        observer,
    };

    if !walk.run(start)? {
        tracing::debug!(
            visited = walk.visited.len(),
            elapsed = ?walk.guard.elapsed(),
            "dfs_no_path"
        );
        return Ok(None);
    }

    let path = reconstruct_path(&walk.predecessors, start, end)?;
    tracing::debug!(
        hops = path.hops(),
        visited = walk.visited.len(),
        elapsed = ?walk.guard.elapsed(),
        "dfs_path_found"
    );
    Ok(Some(path))
}

#[cfg(test)]
mod tests;
