use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::path::path;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Vertex -> shortest known distance; `W::infinity()` marks unreachable vertices
pub type DistanceMap<V, W> = HashMap<V, W>;

/// Vertex -> vertex immediately before it on the shortest path from the source
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

/// Counters collected during one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices whose distance became final
    pub settled: usize,
    /// Outgoing edges examined from settled vertices
    pub edges_scanned: usize,
    /// Edges that lowered a tentative distance
    pub relaxations: usize,
    /// Entries pushed onto the frontier, the initial source entry included
    pub frontier_pushes: usize,
    /// Popped entries discarded because their vertex was already settled
    pub stale_entries: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Distances from source to each vertex
    pub distances: DistanceMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorMap<V>,

    /// Source vertex
    pub source: V,

    /// Vertices in the order they were settled
    pub settle_order: Vec<V>,

    /// Counters collected while the run progressed
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Distance to `vertex`, or `None` if the vertex was not part of the graph
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if `vertex` has a finite distance from the source
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Shortest path from the source to `target`, empty when there is none
    pub fn path_to(&self, target: &V) -> Vec<V> {
        path(&self.predecessors, &self.source, target)
    }

    /// Edges of the shortest path tree as (predecessor, vertex), in settle order
    pub fn tree_edges(&self) -> Vec<(V, V)> {
        self.settle_order
            .iter()
            .filter_map(|v| match self.predecessors.get(v) {
                Some(Some(pred)) => Some((pred.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Splits the result into the bare distance and predecessor maps
    pub fn into_maps(self) -> (DistanceMap<V, W>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        G: Graph<V, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Vec<V> {
        result.path_to(target)
    }
}
