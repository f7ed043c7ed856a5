use crate::graph::labeled::LabeledGraph;
use crate::Result;
use ordered_float::OrderedFloat;

/// The six-vertex symmetric graph used throughout the docs and tests.
///
/// Shortest distances from `A`: A=0, B=3, C=2, D=8, E=10, F=13.
pub fn textbook_graph() -> Result<LabeledGraph<String, OrderedFloat<f64>>> {
    let adjacency: [(&str, &[(&str, f64)]); 6] = [
        ("A", &[("B", 4.0), ("C", 2.0)]),
        ("B", &[("A", 4.0), ("C", 1.0), ("D", 5.0), ("F", 12.0)]),
        ("C", &[("A", 2.0), ("B", 1.0), ("D", 8.0), ("E", 10.0)]),
        ("D", &[("B", 5.0), ("C", 8.0), ("E", 2.0), ("F", 6.0)]),
        ("E", &[("C", 10.0), ("D", 2.0), ("F", 3.0)]),
        ("F", &[("B", 12.0), ("D", 6.0), ("E", 3.0)]),
    ];

    LabeledGraph::from_adjacency(adjacency.iter().map(|(vertex, edges)| {
        (
            vertex.to_string(),
            edges
                .iter()
                .map(|(neighbor, weight)| (neighbor.to_string(), OrderedFloat(*weight))),
        )
    }))
}
