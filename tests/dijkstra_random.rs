use lazy_sssp::graph::generators::generate_random_graph;
use lazy_sssp::graph::{Graph, GraphBuilder};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use proptest::prelude::*;

/// Brute-force reference: relax every edge until nothing changes
fn repeated_relaxation(n: usize, edges: &[(usize, usize, u32)], source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            let cand = dist[u] + w as f64;
            if cand < dist[v] {
                dist[v] = cand;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn cheapest_edge<G: Graph<usize, OrderedFloat<f64>>>(graph: &G, from: &usize, to: &usize) -> f64 {
    graph
        .outgoing_edges(from)
        .unwrap()
        .filter(|(target, _)| *target == to)
        .map(|(_, weight)| weight.into_inner())
        .fold(f64::INFINITY, f64::min)
}

proptest! {
    #[test]
    fn randomized_graph_matches_relaxation(
        n in 1usize..12,
        raw_edges in prop::collection::vec((0usize..12, 0usize..12, 0u32..20), 0usize..40),
        source in 0usize..12,
    ) {
        let source = source % n;
        let edges: Vec<(usize, usize, u32)> = raw_edges
            .into_iter()
            .map(|(u, v, w)| (u % n, v % n, w))
            .collect();

        let mut builder = GraphBuilder::new();
        for v in 0..n {
            builder.add_vertex(v);
        }
        for &(u, v, w) in &edges {
            builder.add_edge(u, v, OrderedFloat(w as f64));
        }
        let graph = builder.build().unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &source).unwrap();
        let expected = repeated_relaxation(n, &edges, source);

        for v in 0..n {
            prop_assert_eq!(result.distances[&v].into_inner(), expected[v]);

            let path = result.path_to(&v);
            if expected[v].is_finite() {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&v));
                // Parallel edges may differ; the cheapest one between each pair is the one relaxed
                let cheapest: f64 = path
                    .windows(2)
                    .map(|pair| cheapest_edge(&graph, &pair[0], &pair[1]))
                    .sum();
                prop_assert_eq!(cheapest, expected[v]);
            } else {
                prop_assert!(path.is_empty());
            }
        }

        let settled: Vec<f64> = result
            .settle_order
            .iter()
            .map(|v| result.distances[v].into_inner())
            .collect();
        prop_assert!(settled.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_generated_graph_paths_are_consistent() {
    let graph = generate_random_graph(500, 4.0, 11).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    for v in graph.vertices() {
        let path = result.path_to(v);
        if result.is_reachable(v) {
            let weight: f64 = path
                .windows(2)
                .map(|pair| cheapest_edge(&graph, &pair[0], &pair[1]))
                .sum();
            assert!((weight - result.distances[v].into_inner()).abs() < 1e-6);
        } else {
            assert!(path.is_empty());
        }
    }
}
