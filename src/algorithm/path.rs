use log::warn;

use crate::algorithm::traits::PredecessorMap;
use crate::graph::Vertex;

/// Reconstructs the path from `source` to `target` by walking `predecessors` backwards.
///
/// Returns `[source]` when `target == source`, the source-to-target sequence when
/// the walk reaches `source`, and an empty vector when it runs into a vertex
/// without predecessor first (no path exists). The map is trusted as produced by
/// a single run; a walk longer than the map itself is treated as no path.
pub fn path<V: Vertex>(predecessors: &PredecessorMap<V>, source: &V, target: &V) -> Vec<V> {
    if target == source {
        return vec![source.clone()];
    }

    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(Some(pred)) = predecessors.get(current) {
        path.push(pred.clone());
        if pred == source {
            path.reverse();
            return path;
        }
        if path.len() > predecessors.len() {
            warn!("Predecessor walk from {:?} does not terminate; map is cyclic", target);
            return Vec::new();
        }
        current = pred;
    }

    Vec::new()
}
