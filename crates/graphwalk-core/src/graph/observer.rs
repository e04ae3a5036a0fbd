//! Traversal observers
//!
//! Engines report well-defined events to a [`TraversalObserver`] instead of
//! printing. The CLI plugs in a [`WriterObserver`] when debug output is
//! requested and a [`NoopObserver`] otherwise.

use std::collections::{HashSet, VecDeque};
use std::io::Write;
use std::time::Duration;

use crate::graph::types::{Algorithm, NodeId};

/// A point of interest during a traversal
#[derive(Debug)]
pub enum TraversalEvent<'a> {
    /// BFS removed `node` from the front of the frontier
    Dequeued {
        node: &'a str,
        level: usize,
        frontier: &'a VecDeque<(NodeId, usize)>,
        visited: &'a HashSet<NodeId>,
        elapsed: Duration,
    },
    /// DFS arrived at `node`
    Entered {
        node: &'a str,
        depth: usize,
        stack_size: usize,
        visited: &'a HashSet<NodeId>,
        elapsed: Duration,
    },
    /// DFS exhausted every neighbor of `node`
    Backtracked { node: &'a str, depth: usize },
}

impl TraversalEvent<'_> {
    pub fn node(&self) -> &str {
        match self {
            TraversalEvent::Dequeued { node, .. }
            | TraversalEvent::Entered { node, .. }
            | TraversalEvent::Backtracked { node, .. } => *node,
        }
    }
}

pub trait TraversalObserver {
    fn on_event(&mut self, algorithm: Algorithm, event: &TraversalEvent<'_>);
}

impl<F> TraversalObserver for F
where
    F: FnMut(Algorithm, &TraversalEvent<'_>),
{
    fn on_event(&mut self, algorithm: Algorithm, event: &TraversalEvent<'_>) {
        self(algorithm, event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {
    fn on_event(&mut self, _algorithm: Algorithm, _event: &TraversalEvent<'_>) {}
}

/// Forwards events to `tracing` at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TraversalObserver for TracingObserver {
    fn on_event(&mut self, algorithm: Algorithm, event: &TraversalEvent<'_>) {
        match event {
            TraversalEvent::Dequeued {
                node,
                level,
                frontier,
                visited,
                elapsed,
            } => tracing::trace!(
                algorithm = %algorithm,
                node,
                level,
                frontier_len = frontier.len(),
                visited_len = visited.len(),
                elapsed = ?elapsed,
                "dequeued"
            ),
            TraversalEvent::Entered {
                node,
                depth,
                stack_size,
                elapsed,
                ..
            } => tracing::trace!(
                algorithm = %algorithm,
                node,
                depth,
                stack_size,
                elapsed = ?elapsed,
                "entered"
            ),
            TraversalEvent::Backtracked { node, depth } => {
                tracing::trace!(algorithm = %algorithm, node, depth, "backtracked")
            }
        }
    }
}

/// Writes a human-readable trace of each event
pub struct WriterObserver<W: Write> {
    writer: W,
}

impl<W: Write> WriterObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &TraversalEvent<'_>) -> std::io::Result<()> {
        match event {
            TraversalEvent::Dequeued {
                node,
                level,
                frontier,
                visited,
                elapsed,
            } => {
                let queued: Vec<&str> = frontier.iter().map(|(id, _)| id.as_str()).collect();
                writeln!(self.writer, "Current Node: {}", node)?;
                writeln!(self.writer, "Current Level: {}", level)?;
                writeln!(self.writer, "Queue Size: {}", frontier.len())?;
                writeln!(self.writer, "Queue: [{}]", queued.join(", "))?;
                writeln!(self.writer, "Visited: [{}]", sorted(visited).join(", "))?;
                writeln!(self.writer, "Time Elapsed: {:.2} seconds", elapsed.as_secs_f64())
            }
            TraversalEvent::Entered {
                node,
                depth,
                stack_size,
                visited,
                elapsed,
            } => {
                writeln!(self.writer, "Current Node: {}", node)?;
                writeln!(self.writer, "Current Recursion Depth: {}", depth)?;
                writeln!(self.writer, "Stack Size: {}", stack_size)?;
                writeln!(self.writer, "Visited: [{}]", sorted(visited).join(", "))?;
                writeln!(self.writer, "Time Elapsed: {:.2} seconds", elapsed.as_secs_f64())
            }
            TraversalEvent::Backtracked { node, .. } => {
                writeln!(self.writer, "Backtracking from: {}", node)
            }
        }
    }
}

impl<W: Write> TraversalObserver for WriterObserver<W> {
    fn on_event(&mut self, _algorithm: Algorithm, event: &TraversalEvent<'_>) {
        if let Err(e) = self.write_event(event) {
            tracing::warn!(error = %e, "failed to write traversal trace");
        }
    }
}

fn sorted(visited: &HashSet<NodeId>) -> Vec<&str> {
    let mut ids: Vec<&str> = visited.iter().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}
