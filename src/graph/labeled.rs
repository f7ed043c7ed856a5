use crate::graph::traits::{Graph, Vertex, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// An immutable directed graph over labeled vertices, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct LabeledGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex labels in construction order
    vertices: Vec<V>,

    /// Label -> dense index into `vertices` and `outgoing_edges`
    index: HashMap<V, usize>,

    /// Outgoing edges for each vertex: vertex_index -> [(target_index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<V, W> LabeledGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    pub(crate) fn empty() -> Self {
        LabeledGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Builds a graph from a vertex -> [(neighbor, weight)] mapping.
    ///
    /// Every key becomes a vertex. Each neighbor must itself appear as a key,
    /// otherwise the edge is rejected as dangling. Repeated keys append to the
    /// edges already collected for that vertex.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, E)> = adjacency.into_iter().collect();
        let mut graph = LabeledGraph::empty();

        for (vertex, _) in &entries {
            graph.insert_vertex(vertex.clone());
        }

        for (vertex, edges) in entries {
            let from = graph.index[&vertex];
            for (neighbor, weight) in edges {
                let to = match graph.index.get(&neighbor) {
                    Some(&to) => to,
                    None => {
                        return Err(Error::DanglingEdge {
                            from: format!("{:?}", vertex),
                            to: format!("{:?}", neighbor),
                        })
                    }
                };
                graph.insert_edge(from, to, weight)?;
            }
        }

        Ok(graph)
    }

    /// Registers a vertex if it is not already present and returns its index
    pub(crate) fn insert_vertex(&mut self, vertex: V) -> usize {
        if let Some(&existing) = self.index.get(&vertex) {
            return existing;
        }
        let id = self.vertices.len();
        self.index.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        id
    }

    /// Appends a validated edge between two registered vertices
    pub(crate) fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", self.vertices[from]),
                to: format!("{:?}", self.vertices[to]),
            });
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from: format!("{:?}", self.vertices[from]),
                to: format!("{:?}", self.vertices[to]),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.outgoing_edges[from].push((to, weight));
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Iterates every edge as (from, to, weight), grouped by source vertex in construction order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.outgoing_edges.iter().enumerate().flat_map(move |(from, edges)| {
            edges
                .iter()
                .map(move |&(to, weight)| (&self.vertices[from], &self.vertices[to], weight))
        })
    }
}

impl<V, W> Graph<V, W> for LabeledGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        let id = self
            .index
            .get(vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))?;
        Ok(Box::new(
            self.outgoing_edges[*id]
                .iter()
                .map(move |&(to, weight)| (&self.vertices[to], weight)),
        ))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}
