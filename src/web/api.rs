use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::format::{from_document, AdjacencyDocument};
use crate::graph::Graph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Status code and JSON body returned by failing handlers
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/shortest-paths", post(run_shortest_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Validate an adjacency document and store it in a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(document): Json<AdjacencyDocument>,
) -> Result<Json<Session>, ApiError> {
    let compiled = from_document(&document)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string()))?;
    let session = Session::new(document, compiled);

    {
        let mut sessions = lock_live_sessions(&state)?;
        if sessions.len() >= state.config.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions may be open", state.config.max_sessions),
            ));
        }
        sessions.insert(session.id, session.clone());
    }

    log::debug!(
        "Created session {} ({} vertices, {} edges)",
        session.id,
        session.vertex_count,
        session.edge_count
    );
    Ok(Json(session))
}

/// Get a stored graph and its latest result
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = lock_live_sessions(&state)?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Run Dijkstra on a stored graph
pub async fn run_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let graph = {
        let sessions = lock_live_sessions(&state)?;
        match sessions.get(&session_id) {
            Some(session) => Arc::clone(&session.compiled),
            None => return Err(session_not_found()),
        }
    };

    let targets: Vec<String> = match request.targets {
        Some(targets) => targets,
        None => graph.vertices().cloned().collect(),
    };
    if let Some(unknown) = targets.iter().find(|t| !graph.has_vertex(t)) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "unknown_target",
            format!("Target vertex not found in graph: {}", unknown),
        ));
    }

    let dijkstra = Dijkstra::new();
    let start_time = Instant::now();
    let result = dijkstra
        .compute_shortest_paths(graph.as_ref(), &request.source)
        .map_err(|err| match err {
            Error::SourceNotFound(_) => {
                api_error(StatusCode::BAD_REQUEST, "source_not_found", err.to_string())
            }
            other => api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "algorithm_execution_failed",
                other.to_string(),
            ),
        })?;
    let execution_time = start_time.elapsed();

    let distances: BTreeMap<String, Option<f64>> = result
        .distances
        .iter()
        .map(|(vertex, distance)| (vertex.clone(), finite(*distance)))
        .collect();
    let predecessors: BTreeMap<String, Option<String>> = result
        .predecessors
        .iter()
        .map(|(vertex, pred)| (vertex.clone(), pred.clone()))
        .collect();
    let paths: BTreeMap<String, Vec<String>> = targets
        .iter()
        .map(|target| (target.clone(), result.path_to(target)))
        .collect();

    let response = ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<String, OrderedFloat<f64>>>::name(&dijkstra)
            .to_string(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances,
        predecessors,
        paths,
        tree_edges: result.tree_edges(),
        stats: result.stats,
    };

    // Update session with result
    {
        let mut sessions = lock_sessions(&state)?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = lock_live_sessions(&state)?;
    let mut session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    session_ids.sort();
    Ok(Json(session_ids))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn lock_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    state.sessions.lock().map_err(|_| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session_store_poisoned",
            "Session store is unavailable",
        )
    })
}

/// Locks the session table after dropping sessions older than the configured timeout
fn lock_live_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    let mut sessions = lock_sessions(state)?;
    prune_expired(&mut sessions, state.config.session_timeout_minutes);
    Ok(sessions)
}

fn prune_expired(sessions: &mut HashMap<Uuid, Session>, timeout_minutes: u64) {
    let minutes = i64::try_from(timeout_minutes)
        .unwrap_or(i64::MAX)
        .min(i64::MAX / 60_000);
    if let Some(cutoff) = chrono::Utc::now().checked_sub_signed(chrono::Duration::minutes(minutes)) {
        sessions.retain(|_, session| session.created_at >= cutoff);
    }
}

fn finite(distance: OrderedFloat<f64>) -> Option<f64> {
    let distance = distance.into_inner();
    if distance.is_finite() {
        Some(distance)
    } else {
        None
    }
}
