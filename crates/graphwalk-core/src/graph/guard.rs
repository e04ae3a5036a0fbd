//! Timeout and size ceilings shared by the traversal engines

use std::time::{Duration, Instant};

use crate::error::TraversalError;
use crate::graph::types::Algorithm;

/// Default wall-clock ceiling for a single traversal
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default ceiling on BFS frontier length and DFS stack depth
pub const DEFAULT_MAX_FRONTIER: usize = 1_000_000;

/// Bounds applied to every traversal call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    pub timeout: Duration,
    pub max_frontier: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_frontier: DEFAULT_MAX_FRONTIER,
        }
    }
}

impl TraversalLimits {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_frontier(mut self, max_frontier: usize) -> Self {
        self.max_frontier = max_frontier;
        self
    }
}

/// Guard for one in-flight traversal; created when the traversal starts
#[derive(Debug)]
pub struct TraversalGuard {
    algorithm: Algorithm,
    limits: TraversalLimits,
    started: Instant,
}

impl TraversalGuard {
    pub fn start(algorithm: Algorithm, limits: TraversalLimits) -> Self {
        Self {
            algorithm,
            limits,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Name of the bounded structure for this algorithm
    pub fn resource(&self) -> &'static str {
        match self.algorithm {
            Algorithm::Bfs => "frontier",
            Algorithm::Dfs => "stack",
        }
    }

    /// Abort if the elapsed time has reached the timeout or `size` is above
    /// the size ceiling. Time is checked first.
    pub fn check(&self, size: usize) -> Result<(), TraversalError> {
        let elapsed = self.elapsed();
        if elapsed >= self.limits.timeout {
            tracing::warn!(
                algorithm = %self.algorithm,
                elapsed = ?elapsed,
                limit = ?self.limits.timeout,
                "traversal_timeout"
            );
            return Err(TraversalError::Timeout {
                algorithm: self.algorithm,
                elapsed,
                limit: self.limits.timeout,
            });
        }

        if size > self.limits.max_frontier {
            tracing::warn!(
                algorithm = %self.algorithm,
                resource = self.resource(),
                size,
                limit = self.limits.max_frontier,
                "traversal_resource_exceeded"
            );
            return Err(TraversalError::ResourceExceeded {
                algorithm: self.algorithm,
                resource: self.resource(),
                size,
                limit: self.limits.max_frontier,
            });
        }

        Ok(())
    }
}
