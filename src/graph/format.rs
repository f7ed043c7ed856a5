//! JSON adjacency documents: `{"A": [["B", 4], ["C", 2]], "B": []}`

use crate::graph::labeled::LabeledGraph;
use crate::graph::traits::Graph;
use crate::Result;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Vertex label -> ordered list of (neighbor label, weight)
pub type AdjacencyDocument = BTreeMap<String, Vec<(String, f64)>>;

/// The graph type produced from JSON documents
pub type JsonGraph = LabeledGraph<String, OrderedFloat<f64>>;

/// Builds a graph from an already deserialized document
pub fn from_document(document: &AdjacencyDocument) -> Result<JsonGraph> {
    LabeledGraph::from_adjacency(document.iter().map(|(vertex, edges)| {
        (
            vertex.clone(),
            edges
                .iter()
                .map(|(neighbor, weight)| (neighbor.clone(), OrderedFloat(*weight))),
        )
    }))
}

/// Parses a JSON adjacency document into a validated graph
pub fn parse_graph(json: &str) -> Result<JsonGraph> {
    let document: AdjacencyDocument = serde_json::from_str(json)?;
    from_document(&document)
}

/// Reads and parses a JSON adjacency file
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<JsonGraph> {
    let json = fs::read_to_string(path)?;
    parse_graph(&json)
}

/// Converts a graph back into its document form
pub fn to_document(graph: &JsonGraph) -> AdjacencyDocument {
    let mut document = AdjacencyDocument::new();
    for vertex in graph.vertices() {
        document.entry(vertex.clone()).or_default();
    }
    for (from, to, weight) in graph.edges() {
        document
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight.into_inner()));
    }
    document
}
