//! Lazy SSSP - Single-Source Shortest Paths over labeled graphs
//!
//! This library implements Dijkstra's algorithm with a binary-heap frontier and
//! lazy deletion: stale frontier entries are discarded when popped instead of
//! being decreased in place. Results are a distance map and a predecessor map
//! keyed by vertex label, from which explicit paths can be reconstructed.
//!
//! Edge weights must be non-negative; graphs are validated when built.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod web;

pub use algorithm::{
    compute, dijkstra::Dijkstra, path::path, DistanceMap, PredecessorMap, SearchStats,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Graph, GraphBuilder, LabeledGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Edge from {from} references unknown vertex {to}")]
    DanglingEdge { from: String, to: String },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Invalid edge weight on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String },

    #[error("Failed to parse graph: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read graph: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
