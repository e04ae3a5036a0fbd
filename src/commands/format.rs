//! Human and JSON output for query reports

use std::io::{self, Write};

use graphwalk_core::graph::Graph;
use serde_json::{json, Map, Value};

use crate::commands::find::{AlgorithmResult, Outcome, QueryReport};

/// Write results in the terminal format:
///
/// ```text
/// Breadth-first traversal
/// 1 -> 2 -> 4
/// No path found in depth-first search
/// ```
pub fn write_human<W: Write>(
    out: &mut W,
    report: &QueryReport,
    arrow: &str,
    quiet: bool,
) -> io::Result<()> {
    for result in &report.results {
        match &result.outcome {
            Outcome::Found(path) => {
                writeln!(out, "{}", result.algorithm.heading())?;
                writeln!(out, "{}", path.join(arrow))?;
                if let (Some(file), false) = (&result.visualization, quiet) {
                    writeln!(out, "Visualization written to {}", file.display())?;
                }
            }
            Outcome::NoPath => writeln!(out, "{}", result.algorithm.no_path_message())?,
            Outcome::Aborted(e) => {
                writeln!(out, "{} aborted: {}", result.algorithm.heading(), e)?
            }
        }
    }
    Ok(())
}

fn result_json(result: &AlgorithmResult) -> Value {
    let mut obj = match &result.outcome {
        Outcome::Found(path) => json!({
            "status": "found",
            "path": path,
            "hops": path.hops(),
        }),
        Outcome::NoPath => json!({ "status": "no_path" }),
        Outcome::Aborted(e) => json!({
            "status": "error",
            "error": e.to_json(),
        }),
    };
    if let Some(file) = &result.visualization {
        obj["visualization"] = json!(file.display().to_string());
    }
    obj
}

/// `[{"node": .., "neighbors": [..]}, ..]` in declaration order
pub fn adjacency_json(graph: &Graph) -> Value {
    Value::Array(
        graph
            .iter()
            .map(|(node, neighbors)| json!({ "node": node, "neighbors": neighbors }))
            .collect(),
    )
}

/// `{"start", "end", "bfs": {..}, "dfs": {..}}`, plus `"graph"` when requested
pub fn report_json(report: &QueryReport, graph: Option<&Graph>) -> Value {
    let mut obj = Map::new();
    obj.insert("start".to_string(), json!(report.start));
    obj.insert("end".to_string(), json!(report.end));
    for result in &report.results {
        obj.insert(result.algorithm.as_str().to_string(), result_json(result));
    }
    if let Some(graph) = graph {
        obj.insert("graph".to_string(), adjacency_json(graph));
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::error::TraversalError;
    use graphwalk_core::graph::{bfs_find_path, Algorithm, NoopObserver, TraversalLimits};

    fn report() -> QueryReport {
        let graph: Graph = [("1", vec!["2"]), ("2", vec![])].into_iter().collect();
        let path = bfs_find_path(&graph, "1", "2", &TraversalLimits::default(), &mut NoopObserver)
            .unwrap()
            .unwrap();
        QueryReport {
            start: "1".to_string(),
            end: "2".to_string(),
            results: vec![
                AlgorithmResult {
                    algorithm: Algorithm::Bfs,
                    outcome: Outcome::Found(path),
                    visualization: None,
                },
                AlgorithmResult {
                    algorithm: Algorithm::Dfs,
                    outcome: Outcome::Aborted(TraversalError::ResourceExceeded {
                        algorithm: Algorithm::Dfs,
                        resource: "stack",
                        size: 2,
                        limit: 1,
                    }),
                    visualization: None,
                },
            ],
        }
    }

    #[test]
    fn test_write_human() {
        let mut out = Vec::new();
        write_human(&mut out, &report(), " -> ", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Breadth-first traversal\n1 -> 2\n\
             Depth-first Search aborted: DFS stack size 2 exceeded limit 1\n"
        );
    }

    #[test]
    fn test_report_json() {
        let json = report_json(&report(), None);
        assert_eq!(json["start"], "1");
        assert_eq!(json["bfs"]["status"], "found");
        assert_eq!(json["bfs"]["path"], json!(["1", "2"]));
        assert_eq!(json["bfs"]["hops"], 1);
        assert_eq!(json["dfs"]["status"], "error");
        assert_eq!(json["dfs"]["error"]["type"], "resource_exceeded");
        assert!(json.get("graph").is_none());
    }

    #[test]
    fn test_adjacency_json() {
        let graph: Graph = [("b", vec!["a"]), ("a", vec![])].into_iter().collect();
        assert_eq!(
            adjacency_json(&graph),
            json!([
                { "node": "b", "neighbors": ["a"] },
                { "node": "a", "neighbors": [] }
            ])
        );
    }
}
