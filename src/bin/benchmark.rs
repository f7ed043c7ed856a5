use std::time::{Duration, Instant};
use lazy_sssp::graph::generators::generate_random_graph;
use lazy_sssp::graph::{Graph, LabeledGraph};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

// Function to benchmark Dijkstra on a graph
fn benchmark_dijkstra(
    graph: &LabeledGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> Result<Duration, lazy_sssp::Error> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let result = Dijkstra::new().compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    println!(
        "  - Settled {} vertices in {:?} ({} relaxations, {} stale entries)",
        result.stats.settled, duration, result.stats.relaxations, result.stats.stale_entries
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with lazy deletion");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, size as u64)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let time = benchmark_dijkstra(&graph, 0)?;
        results.push((size, graph.edge_count(), time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12}", "Vertices", "Edges", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, time) in &results {
        println!("{:<10} | {:<10} | {:<12.2}", size, edges, time.as_secs_f64() * 1000.0);
    }

    Ok(())
}
