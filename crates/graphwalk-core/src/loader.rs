//! Graph loading from delimited text
//!
//! Each record is `node,neighbor,neighbor,...`. The first field is the node
//! identifier; empty neighbor fields are dropped. Fields may be
//! double-quoted, with `""` standing for a literal quote.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{GraphwalkError, Result};
use crate::graph::Graph;
use crate::trace_time;

/// Required suffix for graph files
pub const CSV_FILE_EXTENSION: &str = ".csv";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reject names that do not end with [`CSV_FILE_EXTENSION`]
pub fn check_extension(path: &Path) -> Result<()> {
    if path.to_string_lossy().ends_with(CSV_FILE_EXTENSION) {
        Ok(())
    } else {
        Err(GraphwalkError::InvalidExtension {
            path: path.to_path_buf(),
            expected: CSV_FILE_EXTENSION.to_string(),
        })
    }
}

/// Read a graph file. Any failure yields an error, never a partial graph.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    check_extension(path)?;

    let content =
        fs::read_to_string(path).map_err(|e| GraphwalkError::graph_load(path, e))?;
    let graph = parse_graph(&content).map_err(|reason| GraphwalkError::graph_load(path, reason))?;

    trace_time!(start, "load_graph", nodes = graph.len(), edges = graph.edge_count());
    Ok(graph)
}

/// Parse graph records from text
pub fn parse_graph(content: &str) -> std::result::Result<Graph, String> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut graph = Graph::new();

    for record in parse_records(content)? {
        let mut fields = record.into_iter();
        let Some(node) = fields.next() else {
            continue;
        };
        let neighbors: Vec<String> = fields.filter(|f| !f.is_empty()).collect();
        if let Some(previous) = graph.insert(node.clone(), neighbors) {
            tracing::debug!(node = %node, replaced = previous.len(), "duplicate_record");
        }
    }

    Ok(graph)
}

/// Split text into records of fields. Blank lines produce no record.
///
/// A quote opens a quoted field only as the first character of the field;
/// anywhere else it is kept as an ordinary character.
fn parse_records(content: &str) -> std::result::Result<Vec<Vec<String>>, String> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut line = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_start = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                line += 1;
                finish_record(&mut records, &mut record, &mut field);
                field_start = true;
            }
            _ => {
                field.push(c);
                field_start = false;
            }
        }
    }

    if in_quotes {
        return Err(format!("unterminated quoted field at line {}", line));
    }
    finish_record(&mut records, &mut record, &mut field);

    Ok(records)
}

fn finish_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    if record.is_empty() && field.is_empty() {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_basic_records() {
        let graph = parse_graph("1,2,3\n2,4\n3,4\n4\n").unwrap();
        assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), vec!["1", "2", "3", "4"]);
        assert_eq!(graph.neighbors("1"), ["2", "3"]);
        assert!(graph.neighbors("4").is_empty());
    }

    #[test]
    fn test_empty_fields_dropped() {
        let graph = parse_graph("a,,b,\nb,,,\n").unwrap();
        assert_eq!(graph.neighbors("a"), ["b"]);
        assert!(graph.contains("b"));
        assert!(graph.neighbors("b").is_empty());
    }

    #[test]
    fn test_identifiers_not_normalized() {
        let graph = parse_graph("A, b\n").unwrap();
        assert!(graph.contains("A"));
        assert!(!graph.contains("a"));
        assert_eq!(graph.neighbors("A"), [" b"]);
    }

    #[test]
    fn test_bom_and_crlf() {
        let graph = parse_graph("\u{feff}1,2\r\n2,1\r\n\r\n").unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.neighbors("1"), ["2"]);
        assert_eq!(graph.neighbors("2"), ["1"]);
    }

    #[test]
    fn test_quoted_fields() {
        let graph = parse_graph("\"New York\",\"Boston, MA\",\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(graph.neighbors("New York"), ["Boston, MA", "say \"hi\""]);
    }

    #[test]
    fn test_quote_inside_unquoted_field_is_literal() {
        let graph = parse_graph("a\"b,c\nc\n").unwrap();
        assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), vec!["a\"b", "c"]);
        assert_eq!(graph.neighbors("a\"b"), ["c"]);

        let graph = parse_graph("x,5\"\n").unwrap();
        assert_eq!(graph.neighbors("x"), ["5\""]);
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        let err = parse_graph("1,\"2\n3,4\n").unwrap_err();
        assert!(err.contains("unterminated"), "{}", err);
    }

    #[test]
    fn test_duplicate_record_replaces_neighbors() {
        let graph = parse_graph("1,2\n2\n1,3\n").unwrap();
        assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(graph.neighbors("1"), ["3"]);
    }

    #[test]
    fn test_extension_check() {
        assert!(check_extension(Path::new("graph.csv")).is_ok());
        assert!(matches!(
            check_extension(Path::new("graph.txt")),
            Err(GraphwalkError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, GraphwalkError::GraphLoad { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.csv");
        fs::write(&path, "1,2\n2,1\n").unwrap();
        let graph = load_graph(&path).unwrap();
        assert!(graph.has_edge("1", "2"));
        assert!(graph.has_edge("2", "1"));
    }
}
