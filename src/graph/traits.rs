use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::Result;

/// Bounds required of a vertex label
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Bounds required of an edge weight; `infinity()` doubles as the unreachable distance
pub trait Weight: Float + Zero + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Zero + Debug + Copy + Ord {}

/// Trait representing a weighted directed graph with labeled vertices
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices in construction order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex, in the order they were added.
    ///
    /// Fails with [`crate::Error::UnknownVertex`] when the vertex is not part of the graph.
    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let mut edges = self.outgoing_edges(from).ok()?;
        edges.find(|(target, _)| *target == to).map(|(_, weight)| weight)
    }
}
