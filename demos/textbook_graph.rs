use colored::Colorize;
use lazy_sssp::graph::samples::textbook_graph;
use lazy_sssp::graph::Graph;
use lazy_sssp::report::{format_distance, format_path, non_tree_edges};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = textbook_graph()?;
    let source = "A".to_string();

    println!("--- Shortest paths on the six-vertex sample graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let result = Dijkstra::new().compute_shortest_paths(&graph, &source)?;

    for vertex in graph.vertices() {
        let distance = result.distance(vertex).map(format_distance).unwrap_or_default();
        let path = result.path_to(vertex);
        let label = if *vertex == source {
            vertex.green().bold()
        } else {
            vertex.cyan()
        };
        println!("{}: distance = {}, path: {}", label, distance.yellow(), format_path(&path));
    }

    println!("\nShortest path tree:");
    for (pred, vertex) in result.tree_edges() {
        println!("  {}", format!("{} → {}", pred, vertex).red());
    }

    println!("\nEdges off the tree:");
    for (from, to, weight) in non_tree_edges(&graph, &result) {
        println!("  {}", format!("{} → {} ({})", from, to, weight).dimmed());
    }

    println!(
        "\nSettled {} vertices with {} relaxations; {} stale frontier entries skipped",
        result.stats.settled, result.stats.relaxations, result.stats.stale_entries
    );

    Ok(())
}
