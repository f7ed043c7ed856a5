pub mod dijkstra;
pub mod path;
pub mod traits;

pub use traits::{DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Runs Dijkstra from `source` and returns the distance and predecessor maps.
///
/// Fails with [`crate::Error::SourceNotFound`] if `source` is not a vertex of `graph`.
pub fn compute<V, W, G>(graph: &G, source: &V) -> Result<(DistanceMap<V, W>, PredecessorMap<V>)>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    dijkstra::Dijkstra::new()
        .compute_shortest_paths(graph, source)
        .map(ShortestPathResult::into_maps)
}
