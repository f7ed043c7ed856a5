use crate::graph::labeled::LabeledGraph;
use crate::graph::traits::{Vertex, Weight};
use crate::Result;

/// Incrementally collects vertices and edges, then validates them into a [`LabeledGraph`]
#[derive(Debug, Clone)]
pub struct GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    vertices: Vec<V>,
    edges: Vec<(V, V, W)>,
}

impl<V, W> GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        GraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a vertex; adding the same label twice has no further effect
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Adds a directed edge, registering both endpoints as vertices
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> &mut Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> &mut Self {
        self.edges.push((a.clone(), b.clone(), weight));
        self.edges.push((b, a, weight));
        self
    }

    /// Validates every edge weight and produces the immutable graph.
    ///
    /// Vertices from `add_vertex` come first, then edge endpoints not yet seen,
    /// in the order they were added.
    pub fn build(self) -> Result<LabeledGraph<V, W>> {
        let mut graph = LabeledGraph::empty();
        for vertex in self.vertices {
            graph.insert_vertex(vertex);
        }
        for (from, to, weight) in self.edges {
            let from = graph.insert_vertex(from);
            let to = graph.insert_vertex(to);
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<V, W> Default for GraphBuilder<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
