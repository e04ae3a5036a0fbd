use std::collections::HashMap;

use crate::graph::types::{Graph, NodeId};

/// Read-only adjacency lookup used by the traversal engines
pub trait GraphProvider {
    /// Outgoing neighbors of `id` in enumeration order; empty when unknown
    fn neighbors(&self, id: &str) -> &[NodeId];
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: &str) -> &[NodeId] {
        Graph::neighbors(self, id)
    }
}

/// A plain adjacency map; lookups follow each list's order
impl GraphProvider for HashMap<NodeId, Vec<NodeId>> {
    fn neighbors(&self, id: &str) -> &[NodeId] {
        self.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TraversalError;
    use crate::graph::{
        bfs_find_path, dfs_find_path, verify_path, NoopObserver, TraversalLimits,
    };

    fn adjacency(records: &[(&str, &[&str])]) -> HashMap<NodeId, Vec<NodeId>> {
        records
            .iter()
            .map(|(node, neighbors)| {
                (
                    node.to_string(),
                    neighbors.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_map_provider_diamond() {
        let map = adjacency(&[("1", &["2", "3"]), ("2", &["4"]), ("3", &["4"]), ("4", &[])]);
        let limits = TraversalLimits::default();

        let bfs = bfs_find_path(&map, "1", "4", &limits, &mut NoopObserver)
            .unwrap()
            .unwrap();
        let dfs = dfs_find_path(&map, "1", "4", &limits, &mut NoopObserver)
            .unwrap()
            .unwrap();

        assert_eq!(bfs.nodes(), ["1", "2", "4"]);
        assert_eq!(dfs.nodes(), ["1", "2", "4"]);
        assert_eq!(verify_path(&map, &dfs, "1", "4"), Ok(()));
    }

    #[test]
    fn test_map_provider_missing_key_is_leaf() {
        let map = adjacency(&[("1", &["2"]), ("3", &[])]);
        let limits = TraversalLimits::default();

        assert!(map.neighbors("2").is_empty());
        assert_eq!(
            bfs_find_path(&map, "1", "3", &limits, &mut NoopObserver),
            Ok(None)
        );
        assert_eq!(
            dfs_find_path(&map, "1", "3", &limits, &mut NoopObserver),
            Ok(None)
        );
    }

    #[test]
    fn test_map_provider_respects_ceiling() {
        let map = adjacency(&[("hub", &["a", "b", "c", "d"]), ("end", &[])]);
        let limits = TraversalLimits::default().with_max_frontier(2);

        assert!(matches!(
            bfs_find_path(&map, "hub", "end", &limits, &mut NoopObserver),
            Err(TraversalError::ResourceExceeded { size: 4, .. })
        ));
    }
}
