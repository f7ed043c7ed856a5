use lazy_sssp::algorithm::dijkstra::Dijkstra;
use lazy_sssp::algorithm::traits::ShortestPathAlgorithm;
use lazy_sssp::graph::generators::generate_grid;
use lazy_sssp::graph::samples::textbook_graph;
use lazy_sssp::graph::{Graph, GraphBuilder, LabeledGraph};
use lazy_sssp::{compute, path, Error};
use num_traits::Float;
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

fn labels(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}

fn path_weight<V, G>(graph: &G, path: &[V]) -> W
where
    V: lazy_sssp::graph::Vertex,
    G: Graph<V, W>,
{
    path.windows(2)
        .map(|pair| graph.get_edge_weight(&pair[0], &pair[1]).unwrap())
        .fold(OrderedFloat(0.0), |acc, w| acc + w)
}

fn textbook_with_isolated_vertex() -> LabeledGraph<String, W> {
    let base = textbook_graph().unwrap();
    let mut builder = GraphBuilder::new();
    for (from, to, weight) in base.edges() {
        builder.add_edge(from.clone(), to.clone(), weight);
    }
    builder.add_vertex("G".to_string());
    builder.build().unwrap()
}

#[test]
fn test_textbook_distances_and_paths() {
    let graph = textbook_graph().unwrap();
    let source = "A".to_string();
    let (distances, predecessors) = compute(&graph, &source).unwrap();

    let expected = [
        ("A", 0.0, vec!["A"]),
        ("B", 3.0, vec!["A", "C", "B"]),
        ("C", 2.0, vec!["A", "C"]),
        ("D", 8.0, vec!["A", "C", "B", "D"]),
        ("E", 10.0, vec!["A", "C", "B", "D", "E"]),
        ("F", 13.0, vec!["A", "C", "B", "D", "E", "F"]),
    ];

    for (vertex, distance, expected_path) in expected {
        let vertex = vertex.to_string();
        assert_eq!(distances[&vertex], OrderedFloat(distance), "distance to {}", vertex);
        assert_eq!(path(&predecessors, &source, &vertex), labels(&expected_path));
    }
    assert_eq!(predecessors[&source], None);
}

#[test]
fn test_distance_equals_path_weight() {
    let graph = textbook_graph().unwrap();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &"A".to_string())
        .unwrap();

    for vertex in graph.vertices() {
        let path = result.path_to(vertex);
        assert_eq!(path.first(), Some(&"A".to_string()));
        assert_eq!(path.last(), Some(vertex));
        assert_eq!(path_weight(&graph, &path), result.distances[vertex]);
    }
}

#[test]
fn test_source_path_is_single_vertex() {
    let graph = textbook_graph().unwrap();
    let source = "D".to_string();
    let (distances, predecessors) = compute(&graph, &source).unwrap();

    assert_eq!(distances[&source], OrderedFloat(0.0));
    assert_eq!(path(&predecessors, &source, &source), vec![source.clone()]);
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    let graph = textbook_with_isolated_vertex();
    let source = "A".to_string();
    let isolated = "G".to_string();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &source).unwrap();

    assert!(result.distances[&isolated].is_infinite());
    assert!(!result.is_reachable(&isolated));
    assert_eq!(result.predecessors[&isolated], None);
    assert!(result.path_to(&isolated).is_empty());
    assert!(!result.settle_order.contains(&isolated));

    // The rest of the graph is unaffected
    assert_eq!(result.distances[&"F".to_string()], OrderedFloat(13.0));
}

#[test]
fn test_isolated_source_reaches_only_itself() {
    let graph = textbook_with_isolated_vertex();
    let source = "G".to_string();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &source).unwrap();

    assert_eq!(result.settle_order, vec![source.clone()]);
    for vertex in graph.vertices().filter(|v| **v != source) {
        assert!(!result.is_reachable(vertex));
        assert!(result.path_to(vertex).is_empty());
    }
}

#[test]
fn test_equal_cost_routes_report_correct_distance() {
    // S -> A -> T and S -> B -> T both cost 4
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("S", "A", OrderedFloat(1.0))
        .add_edge("S", "B", OrderedFloat(2.0))
        .add_edge("A", "T", OrderedFloat(3.0))
        .add_edge("B", "T", OrderedFloat(2.0));
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"S").unwrap();

    assert_eq!(result.distances[&"T"], OrderedFloat(4.0));
    let path = result.path_to(&"T");
    assert_eq!(path.first(), Some(&"S"));
    assert_eq!(path.last(), Some(&"T"));
    assert_eq!(path_weight(&graph, &path), OrderedFloat(4.0));
}

#[test]
fn test_equal_cost_tie_keeps_first_predecessor() {
    // A settles at 1 and reaches T at 4 first; B later offers the same 4
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("S", "A", OrderedFloat(1.0))
        .add_edge("S", "B", OrderedFloat(2.0))
        .add_edge("A", "T", OrderedFloat(3.0))
        .add_edge("B", "T", OrderedFloat(2.0));
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"S").unwrap();

    assert_eq!(result.predecessors[&"T"], Some("A"));
    assert_eq!(result.path_to(&"T"), vec!["S", "A", "T"]);
    // Only the first route to T counts as a relaxation
    assert_eq!(result.stats.relaxations, 3);
}

#[test]
fn test_compute_is_idempotent() {
    let graph = textbook_graph().unwrap();
    let source = "A".to_string();

    let first = compute(&graph, &source).unwrap();
    let second = compute(&graph, &source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_vertices_settle_in_nondecreasing_distance() {
    let graph = textbook_graph().unwrap();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &"A".to_string())
        .unwrap();

    let settled: Vec<W> = result
        .settle_order
        .iter()
        .map(|v| result.distances[v])
        .collect();
    assert!(settled.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(result.stats.settled, graph.vertex_count());
    assert_eq!(result.settle_order.first(), Some(&"A".to_string()));
}

#[test]
fn test_stale_entries_are_skipped() {
    // C is pushed at 10 via A, then improved to 3 via B; the 10 entry turns stale
    let mut builder = GraphBuilder::new();
    builder
        .add_edge('A', 'C', OrderedFloat(10.0))
        .add_edge('A', 'B', OrderedFloat(1.0))
        .add_edge('B', 'C', OrderedFloat(2.0));
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &'A').unwrap();

    assert_eq!(result.distances[&'C'], OrderedFloat(3.0));
    assert_eq!(result.predecessors[&'C'], Some('B'));
    assert_eq!(result.stats.relaxations, 3);
    assert_eq!(result.stats.frontier_pushes, 4);
    assert_eq!(result.stats.stale_entries, 1);
    assert_eq!(result.stats.settled, 3);
}

#[test]
fn test_edges_are_directed() {
    let mut builder = GraphBuilder::new();
    builder.add_edge(1u32, 2u32, OrderedFloat(5.0));
    let graph = builder.build().unwrap();

    let from_one = Dijkstra::new().compute_shortest_paths(&graph, &1).unwrap();
    assert_eq!(from_one.distances[&2], OrderedFloat(5.0));

    let from_two = Dijkstra::new().compute_shortest_paths(&graph, &2).unwrap();
    assert!(from_two.distances[&1].is_infinite());
    assert!(from_two.path_to(&1).is_empty());
}

#[test]
fn test_zero_weight_edges() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("a", "b", OrderedFloat(0.0))
        .add_edge("b", "c", OrderedFloat(0.0))
        .add_edge("a", "c", OrderedFloat(1.0));
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"a").unwrap();
    assert_eq!(result.distances[&"c"], OrderedFloat(0.0));
    assert_eq!(result.path_to(&"c"), vec!["a", "b", "c"]);
}

#[test]
fn test_missing_source_is_rejected() {
    let graph = textbook_graph().unwrap();
    let err = compute(&graph, &"Z".to_string()).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
}

#[test]
fn test_tree_edges_follow_predecessors() {
    let graph = textbook_graph().unwrap();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &"A".to_string())
        .unwrap();

    let tree: Vec<(String, String)> = result.tree_edges();
    assert_eq!(tree.len(), graph.vertex_count() - 1);
    for (pred, vertex) in &tree {
        assert_eq!(result.predecessors[vertex].as_ref(), Some(pred));
        assert!(graph.has_edge(pred, vertex));
    }
}

// Test that paths can be found in a grid and only use existing edges
#[test]
fn test_path_finding_grid() {
    let graph = generate_grid(10, 10).unwrap();
    let source = (0, 0);
    let target = (9, 9);

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
    let path = <Dijkstra as ShortestPathAlgorithm<(usize, usize), W>>::get_path(&dijkstra, &result, &target);

    assert_eq!(path.first(), Some(&source), "Path should start at source");
    assert_eq!(path.last(), Some(&target), "Path should end at target");
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }
    // Nine diagonal steps
    assert!((result.distances[&target].into_inner() - 12.6).abs() < 1e-9);
}

#[test]
fn test_inconsistent_predecessor_cycle_yields_empty_path() {
    let mut predecessors = std::collections::HashMap::new();
    predecessors.insert("x", Some("y"));
    predecessors.insert("y", Some("x"));
    predecessors.insert("s", None);

    assert!(path(&predecessors, &"s", &"x").is_empty());
}
