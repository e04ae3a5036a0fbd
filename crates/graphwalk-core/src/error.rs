//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including an aborted traversal)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable graph file, unknown node id)

mod macros;

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::graph::{Algorithm, NodeId};

/// Exit codes reported by the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph file, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failures raised by a single traversal call.
///
/// "No path" is not represented here: engines return `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("{algorithm} timed out after {elapsed:?} (limit {limit:?})")]
    Timeout {
        algorithm: Algorithm,
        elapsed: Duration,
        limit: Duration,
    },

    #[error("{algorithm} {resource} size {size} exceeded limit {limit}")]
    ResourceExceeded {
        algorithm: Algorithm,
        resource: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("predecessor chain from {end} ended at {reached}, not at start {start}")]
    ReconstructionInconsistency {
        start: NodeId,
        end: NodeId,
        reached: NodeId,
    },
}

impl TraversalError {
    /// Stable identifier used in structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            TraversalError::Timeout { .. } => "traversal_timeout",
            TraversalError::ResourceExceeded { .. } => "resource_exceeded",
            TraversalError::ReconstructionInconsistency { .. } => {
                "reconstruction_inconsistency"
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid file extension: {path:?} (expected a {expected} file)")]
    InvalidExtension { path: PathBuf, expected: String },

    // Data errors (exit code 3)
    #[error("error loading graph from {path:?}: {reason}")]
    GraphLoad { path: PathBuf, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for a graph file that could not be loaded
    pub fn graph_load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphwalkError::GraphLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidExtension { .. }
            | GraphwalkError::InvalidValue { .. } => ExitCode::Usage,

            GraphwalkError::GraphLoad { .. } | GraphwalkError::NodeNotFound { .. } => {
                ExitCode::Data
            }

            GraphwalkError::Io(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::Traversal(_)
            | GraphwalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidExtension { .. } => "invalid_extension",
            GraphwalkError::GraphLoad { .. } => "graph_load",
            GraphwalkError::NodeNotFound { .. } => "node_not_found",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::Traversal(err) => err.error_type(),
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphwalkError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphwalkError::NodeNotFound { id: "7".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphwalkError::graph_load("g.csv", "missing").exit_code(),
            ExitCode::Data
        );
        let timeout = TraversalError::Timeout {
            algorithm: Algorithm::Bfs,
            elapsed: Duration::from_secs(2),
            limit: Duration::from_secs(1),
        };
        assert_eq!(GraphwalkError::from(timeout).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_traversal_error_type_passthrough() {
        let err = GraphwalkError::from(TraversalError::ResourceExceeded {
            algorithm: Algorithm::Dfs,
            resource: "stack",
            size: 11,
            limit: 10,
        });
        assert_eq!(err.error_type(), "resource_exceeded");
        assert_eq!(err.to_string(), "DFS stack size 11 exceeded limit 10");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphwalkError::NodeNotFound { id: "x".into() };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(json["error"]["message"], "node not found: x");
    }
}
