use super::*;
use crate::graph::bfs_find_path;
use crate::graph::observer::NoopObserver;
use crate::graph::types::Graph;
use crate::graph::verify_path;
use std::collections::HashMap;
use std::time::Duration;

fn graph(records: &[(&str, &[&str])]) -> Graph {
    records
        .iter()
        .map(|(node, neighbors)| (*node, neighbors.iter().copied()))
        .collect()
}

fn dfs(graph: &Graph, start: &str, end: &str) -> Option<Vec<NodeId>> {
    dfs_find_path(graph, start, end, &TraversalLimits::default(), &mut NoopObserver)
        .unwrap()
        .map(Path::into_nodes)
}

#[test]
fn test_diamond() {
    let g = graph(&[("1", &["2", "3"]), ("2", &["4"]), ("3", &["4"]), ("4", &[])]);
    assert_eq!(dfs(&g, "1", "4"), Some(vec!["1".into(), "2".into(), "4".into()]));
}

#[test]
fn test_start_equals_end_on_cycle() {
    let g = graph(&[("1", &["2"]), ("2", &["1"])]);
    assert_eq!(dfs(&g, "1", "1"), Some(vec!["1".to_string()]));
}

#[test]
fn test_disconnected_returns_none() {
    let g = graph(&[("1", &["2"]), ("2", &[]), ("3", &["4"]), ("4", &[])]);
    assert_eq!(dfs(&g, "1", "3"), None);
}

#[test]
fn test_cycle_through_start_terminates() {
    let g = graph(&[("1", &["2"]), ("2", &["3"]), ("3", &["1"]), ("4", &[])]);
    assert_eq!(dfs(&g, "1", "4"), None);
}

#[test]
fn test_may_return_longer_path_than_bfs() {
    let g = graph(&[("1", &["2", "4"]), ("2", &["3"]), ("3", &["4"]), ("4", &[])]);
    let limits = TraversalLimits::default();

    let dfs_path = dfs_find_path(&g, "1", "4", &limits, &mut NoopObserver)
        .unwrap()
        .unwrap();
    let bfs_path = bfs_find_path(&g, "1", "4", &limits, &mut NoopObserver)
        .unwrap()
        .unwrap();

    assert_eq!(dfs_path.nodes(), ["1", "2", "3", "4"]);
    assert_eq!(bfs_path.nodes(), ["1", "4"]);
    assert!(bfs_path.hops() <= dfs_path.hops());
}

#[test]
fn test_backtracks_out_of_dead_ends() {
    let g = graph(&[
        ("1", &["2", "3"]),
        ("2", &["5"]),
        ("5", &[]),
        ("3", &["4"]),
        ("4", &[]),
    ]);
    let mut backtracked = Vec::new();
    let mut record = |_: Algorithm, event: &TraversalEvent<'_>| {
        if let TraversalEvent::Backtracked { node, .. } = event {
            backtracked.push(node.to_string());
        }
    };

    let path = dfs_find_path(&g, "1", "4", &TraversalLimits::default(), &mut record)
        .unwrap()
        .unwrap();

    assert_eq!(path.nodes(), ["1", "3", "4"]);
    assert_eq!(backtracked, vec!["5".to_string(), "2".to_string()]);
}

#[test]
fn test_each_node_entered_at_most_once() {
    // 4 is first reached through the failing branch under 2, then skipped
    // when 3 lists it again
    let g = graph(&[
        ("1", &["2", "3"]),
        ("2", &["4"]),
        ("4", &[]),
        ("3", &["4", "5"]),
        ("5", &[]),
    ]);
    let mut entered: HashMap<String, usize> = HashMap::new();
    let mut record = |_: Algorithm, event: &TraversalEvent<'_>| {
        if let TraversalEvent::Entered { node, .. } = event {
            *entered.entry(node.to_string()).or_default() += 1;
        }
    };

    let path = dfs_find_path(&g, "1", "5", &TraversalLimits::default(), &mut record)
        .unwrap()
        .unwrap();

    assert_eq!(path.nodes(), ["1", "3", "5"]);
    assert_eq!(verify_path(&g, &path, "1", "5"), Ok(()));
    assert!(entered.values().all(|&count| count == 1), "{:?}", entered);
    assert_eq!(entered.len(), 5);
}

#[test]
fn test_depth_reported_on_entry() {
    let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    let mut depths = Vec::new();
    let mut record = |_: Algorithm, event: &TraversalEvent<'_>| {
        if let TraversalEvent::Entered {
            node,
            depth,
            stack_size,
            ..
        } = event
        {
            assert_eq!(depth, stack_size);
            depths.push((node.to_string(), *depth));
        }
    };

    dfs_find_path(&g, "a", "c", &TraversalLimits::default(), &mut record).unwrap();

    assert_eq!(
        depths,
        vec![("a".to_string(), 0), ("b".to_string(), 1), ("c".to_string(), 2)]
    );
}

#[test]
fn test_stack_ceiling_aborts() {
    let mut g = Graph::new();
    for i in 0..20 {
        g.insert(format!("c{}", i), vec![format!("c{}", i + 1)]);
    }
    g.insert("target", vec![]);

    let limits = TraversalLimits::default().with_max_frontier(5);
    let err = dfs_find_path(&g, "c0", "target", &limits, &mut NoopObserver).unwrap_err();
    assert_eq!(
        err,
        TraversalError::ResourceExceeded {
            algorithm: Algorithm::Dfs,
            resource: "stack",
            size: 6,
            limit: 5,
        }
    );
}

#[test]
fn test_timeout_aborts() {
    let g = graph(&[("1", &["2"]), ("2", &[])]);
    let limits = TraversalLimits::default().with_timeout(Duration::ZERO);
    let err = dfs_find_path(&g, "1", "2", &limits, &mut NoopObserver).unwrap_err();
    assert!(matches!(
        err,
        TraversalError::Timeout {
            algorithm: Algorithm::Dfs,
            ..
        }
    ));
}

#[test]
fn test_self_loop_and_duplicates() {
    let g = graph(&[("1", &["1", "2", "2"]), ("2", &["1", "3"]), ("3", &[])]);
    assert_eq!(
        dfs(&g, "1", "3"),
        Some(vec!["1".into(), "2".into(), "3".into()])
    );
}
