//! Path reconstruction shared by both traversal engines

use std::collections::HashMap;

use crate::error::TraversalError;
use crate::graph::types::{NodeId, Path};

/// Node -> the node that discovered it; the start node maps to `None`
pub type Predecessors = HashMap<NodeId, Option<NodeId>>;

/// Rebuild the path from `start` to `end` by walking predecessor links back
/// from `end`.
///
/// The walk must end at `start`. Anything else (including a chain that loops)
/// means the map was never linked from `start` to `end`, and is reported as
/// [`TraversalError::ReconstructionInconsistency`] rather than a partial path.
pub fn reconstruct_path(
    predecessors: &Predecessors,
    start: &str,
    end: &str,
) -> Result<Path, TraversalError> {
    let mut walk: Vec<NodeId> = vec![end.to_string()];
    let mut current = end;

    while let Some(Some(pred)) = predecessors.get(current) {
        // A well-formed chain visits each mapped node at most once
        if walk.len() > predecessors.len() {
            return Err(inconsistency(start, end, current));
        }
        walk.push(pred.clone());
        current = pred.as_str();
    }

    if current != start {
        return Err(inconsistency(start, end, current));
    }

    walk.reverse();
    Ok(Path::from_nodes(walk))
}

fn inconsistency(start: &str, end: &str, reached: &str) -> TraversalError {
    tracing::error!(start, end, reached, "predecessor chain does not reach start");
    TraversalError::ReconstructionInconsistency {
        start: start.to_string(),
        end: end.to_string(),
        reached: reached.to_string(),
    }
}
