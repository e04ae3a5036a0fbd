//! Structural checks on a returned path

use std::collections::HashSet;

use crate::graph::types::{NodeId, Path};
use crate::graph::GraphProvider;

/// Why a path does not describe a simple walk through the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDefect {
    Empty,
    WrongStart { expected: NodeId, found: NodeId },
    WrongEnd { expected: NodeId, found: NodeId },
    MissingEdge { from: NodeId, to: NodeId },
    RepeatedNode(NodeId),
}

/// Check that `path` runs from `start` to `end`, repeats no node, and that
/// every consecutive pair is a directed edge of `provider`.
pub fn verify_path(
    provider: &dyn GraphProvider,
    path: &Path,
    start: &str,
    end: &str,
) -> Result<(), PathDefect> {
    let (Some(first), Some(last)) = (path.start(), path.end()) else {
        return Err(PathDefect::Empty);
    };

    if first != start {
        return Err(PathDefect::WrongStart {
            expected: start.to_string(),
            found: first.to_string(),
        });
    }
    if last != end {
        return Err(PathDefect::WrongEnd {
            expected: end.to_string(),
            found: last.to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for node in path.nodes() {
        if !seen.insert(node) {
            return Err(PathDefect::RepeatedNode(node.clone()));
        }
    }

    for (from, to) in path.edges() {
        if !provider.neighbors(from).iter().any(|n| n == to) {
            return Err(PathDefect::MissingEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn path(nodes: &[&str]) -> Path {
        Path::from_nodes(nodes.iter().map(|s| s.to_string()).collect())
    }

    fn graph() -> Graph {
        [("1", vec!["2"]), ("2", vec!["3", "1"]), ("3", vec![])]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_valid_path() {
        assert_eq!(verify_path(&graph(), &path(&["1", "2", "3"]), "1", "3"), Ok(()));
    }

    #[test]
    fn test_missing_edge() {
        assert_eq!(
            verify_path(&graph(), &path(&["1", "3"]), "1", "3"),
            Err(PathDefect::MissingEdge {
                from: "1".into(),
                to: "3".into()
            })
        );
    }

    #[test]
    fn test_repeated_node() {
        assert_eq!(
            verify_path(&graph(), &path(&["1", "2", "1", "2", "3"]), "1", "3"),
            Err(PathDefect::RepeatedNode("1".into()))
        );
    }

    #[test]
    fn test_wrong_endpoints() {
        assert!(matches!(
            verify_path(&graph(), &path(&["2", "3"]), "1", "3"),
            Err(PathDefect::WrongStart { .. })
        ));
        assert!(matches!(
            verify_path(&graph(), &path(&["1", "2"]), "1", "3"),
            Err(PathDefect::WrongEnd { .. })
        ));
        assert_eq!(verify_path(&graph(), &path(&[]), "1", "3"), Err(PathDefect::Empty));
    }
}
