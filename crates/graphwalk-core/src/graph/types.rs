use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier; compared exactly, never normalized
pub type NodeId = String;

/// Separator used when rendering a path or an adjacency line
pub const DEFAULT_ARROW: &str = " -> ";

/// Directed adjacency list that remembers the order nodes were declared in
///
/// Neighbor lists keep their declared order, including duplicates and
/// self-loops; the engines rely on that order for tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<NodeId>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `node` with its outgoing neighbors.
    ///
    /// Re-declaring a node replaces its neighbor list but keeps the position
    /// of its first declaration. Returns the replaced list, if any.
    pub fn insert(
        &mut self,
        node: impl Into<NodeId>,
        neighbors: Vec<NodeId>,
    ) -> Option<Vec<NodeId>> {
        let node = node.into();
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.adjacency.insert(node, neighbors)
    }

    /// Whether `id` was declared as a node (has its own record)
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Outgoing neighbors of `id`; empty for undeclared nodes
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the directed edge `from -> to` exists
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Declared nodes in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// `(node, neighbors)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.order
            .iter()
            .map(move |node| (node, self.neighbors(node)))
    }
}

impl<K, I, V> FromIterator<(K, I)> for Graph
where
    K: Into<NodeId>,
    I: IntoIterator<Item = V>,
    V: Into<NodeId>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for (node, neighbors) in iter {
            graph.insert(node, neighbors.into_iter().map(Into::into).collect());
        }
        graph
    }
}

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    /// Heading printed above a found path
    pub fn heading(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-first traversal",
            Algorithm::Dfs => "Depth-first Search",
        }
    }

    /// Message printed when the search space is exhausted
    pub fn no_path_message(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "No path found in breadth-first traversal",
            Algorithm::Dfs => "No path found in depth-first search",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
        }
    }
}

/// Ordered node sequence from start to end, inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub(crate) fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Path(nodes)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.0
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|n| n == id)
    }

    /// Join nodes with a custom separator
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_ARROW))
    }
}
