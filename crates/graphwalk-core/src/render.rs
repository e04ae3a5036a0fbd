//! Graph printing and Graphviz DOT export

use std::collections::HashSet;
use std::fs;
use std::path::Path as FsPath;

use crate::error::Result;
use crate::graph::{Graph, Path};

const PATH_COLOR: &str = "#d20f39";
const PATH_FILL: &str = "#f38ba8";

/// Render the adjacency list, one `node -> n1 -> n2` line per declared node
pub fn format_adjacency(graph: &Graph, arrow: &str) -> String {
    let mut out = String::new();
    for (node, neighbors) in graph.iter() {
        out.push_str(node);
        out.push_str(arrow);
        out.push_str(&neighbors.join(arrow));
        out.push('\n');
    }
    out
}

/// Convert a graph to DOT, highlighting the nodes and edges of `path`
pub fn to_dot(graph: &Graph, path: Option<&Path>) -> String {
    let path_nodes: HashSet<&str> = path
        .map(|p| p.nodes().iter().map(String::as_str).collect())
        .unwrap_or_default();
    let path_edges: HashSet<(&str, &str)> = path
        .map(|p| p.edges().collect())
        .unwrap_or_default();

    let mut lines = Vec::new();
    lines.push("digraph Graph {".to_string());
    lines.push("    rankdir=LR;".to_string());
    lines.push("    node [fontname=\"Helvetica\", fontsize=12];".to_string());
    lines.push("".to_string());

    // Declared nodes first, then neighbors that have no record of their own
    let mut emitted: HashSet<&str> = HashSet::new();
    let referenced = graph
        .nodes()
        .map(String::as_str)
        .chain(graph.iter().flat_map(|(_, n)| n.iter().map(String::as_str)));
    for node in referenced {
        if !emitted.insert(node) {
            continue;
        }
        let id = escape_label(node);
        if path_nodes.contains(node) {
            lines.push(format!(
                "    \"{}\" [style=filled, fillcolor=\"{}\", color=\"{}\"];",
                id, PATH_FILL, PATH_COLOR
            ));
        } else {
            lines.push(format!("    \"{}\";", id));
        }
    }

    lines.push("".to_string());

    let mut drawn: HashSet<(&str, &str)> = HashSet::new();
    for (from, neighbors) in graph.iter() {
        for to in neighbors {
            let edge = (from.as_str(), to.as_str());
            if !drawn.insert(edge) {
                continue;
            }
            let style = if path_edges.contains(&edge) {
                format!(" [color=\"{}\", penwidth=2]", PATH_COLOR)
            } else {
                String::new()
            };
            lines.push(format!(
                "    \"{}\" -> \"{}\"{};",
                escape_label(from),
                escape_label(to),
                style
            ));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Write the DOT rendering of `graph` to `out`
pub fn write_dot(graph: &Graph, path: Option<&Path>, out: &FsPath) -> Result<()> {
    fs::write(out, to_dot(graph, path))?;
    tracing::debug!(out = %out.display(), "dot_written");
    Ok(())
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
