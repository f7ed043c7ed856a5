use clap::{Parser, ValueEnum};
use lazy_sssp::graph::format::{load_graph, JsonGraph};
use lazy_sssp::graph::samples::textbook_graph;
use lazy_sssp::report::{build_report, render_text};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Shortest distances and paths from one source vertex
#[derive(Parser, Debug)]
#[command(name = "sssp", version)]
struct Cli {
    /// JSON adjacency file ({"A": [["B", 4]], ...}); the built-in six-vertex graph when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Source vertex label
    #[arg(short, long, default_value = "A")]
    source: String,

    /// Only report this vertex
    #[arg(short, long)]
    target: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log the search at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let graph: JsonGraph = match &cli.graph {
        Some(path) => load_graph(path)?,
        None => textbook_graph()?,
    };

    let result = Dijkstra::new().compute_shortest_paths(&graph, &cli.source)?;
    let mut lines = build_report(&graph, &result);
    if let Some(target) = &cli.target {
        lines.retain(|line| &line.vertex == target);
        if lines.is_empty() {
            return Err(format!("Target vertex not found in graph: {}", target).into());
        }
    }

    match cli.format {
        OutputFormat::Text => {
            println!("Shortest paths from '{}':", cli.source);
            println!("{}", "-".repeat(40));
            println!("{}", render_text(&lines));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
    }

    Ok(())
}
