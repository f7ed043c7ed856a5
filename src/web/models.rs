use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::SearchStats;
use crate::graph::format::{AdjacencyDocument, JsonGraph};
use crate::graph::Graph;

/// Parameters for a shortest path run on a stored graph
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub source: String,
    /// Restrict reported paths to these vertices; all vertices when absent
    #[serde(default)]
    pub targets: Option<Vec<String>>,
}

/// Response containing the results of one run
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub execution_time_ms: f64,
    /// `null` for unreachable vertices
    pub distances: BTreeMap<String, Option<f64>>,
    pub predecessors: BTreeMap<String, Option<String>>,
    pub paths: BTreeMap<String, Vec<String>>,
    pub tree_edges: Vec<(String, String)>,
    pub stats: SearchStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a validated graph and its latest result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: AdjacencyDocument,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub last_result: Option<ShortestPathResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub compiled: Arc<JsonGraph>,
}

impl Session {
    pub fn new(graph: AdjacencyDocument, compiled: JsonGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            vertex_count: compiled.vertex_count(),
            edge_count: compiled.edge_count(),
            last_result: None,
            created_at: Utc::now(),
            compiled: Arc::new(compiled),
        }
    }
}
