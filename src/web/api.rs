use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use rand::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::all_pairs::AllPairs;
use crate::algorithm::dijkstra::{Dijkstra, Selection};
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::generators::generate_random;
use crate::graph::{Graph, MutableGraph};
use crate::web::models::*;
use crate::Error;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    /// Largest graph a session may hold
    pub max_vertices: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            max_vertices: 2000,
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/vertices", post(add_vertex))
        .route("/api/graphs/:session_id/edges", post(add_edge))
        .route("/api/algorithms/all-pairs/:session_id", post(run_all_pairs))
}

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

fn poisoned() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "lock_poisoned",
        "A previous request panicked while holding the graph",
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn graph_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::VertexAlreadyExists(_) => (StatusCode::CONFLICT, "vertex_already_exists"),
        Error::EdgeAlreadyExists(..) => (StatusCode::CONFLICT, "edge_already_exists"),
        Error::VertexMissing(_) => (StatusCode::NOT_FOUND, "vertex_missing"),
        Error::NegativeWeight(_) => (StatusCode::UNPROCESSABLE_ENTITY, "negative_weight"),
        Error::SourceNotFound(_) => (StatusCode::NOT_FOUND, "source_not_found"),
    };
    api_error(status, code, err.to_string())
}

fn session_graph(state: &AppState, session_id: Uuid) -> Result<Arc<RwLock<KeyedGraph>>, ApiError> {
    let sessions = state.sessions.read().map_err(|_| poisoned())?;
    sessions
        .get(&session_id)
        .map(|session| Arc::clone(&session.graph))
        .ok_or_else(session_not_found)
}

fn insert_session(state: &AppState, graph: KeyedGraph) -> Result<SessionInfo, ApiError> {
    let session = Session::new(graph);
    let info = {
        let graph = session.graph.read().map_err(|_| poisoned())?;
        SessionInfo::new(&session, &graph)
    };

    let mut sessions = state.sessions.write().map_err(|_| poisoned())?;
    if sessions.len() >= state.max_sessions {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "session_limit",
            format!("Session limit of {} reached", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);
    log::info!("created session {} ({} sessions)", info.id, sessions.len());

    Ok(info)
}

fn parse_selection(selection: Option<&str>) -> Result<Selection, ApiError> {
    match selection {
        None | Some("linear-scan") => Ok(Selection::LinearScan),
        Some("binary-heap") => Ok(Selection::BinaryHeap),
        Some(other) => Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_selection",
            format!("Unknown selection strategy: {}", other),
        )),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Create a session holding an empty graph
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    let graph = if request.strict {
        KeyedGraph::strict()
    } else {
        KeyedGraph::new()
    };
    let info = insert_session(&state, graph)?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// Create a session holding a random graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    if request.node_count > state.max_vertices {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_node_count",
            format!("Node count {} exceeds the limit of {}", request.node_count, state.max_vertices),
        ));
    }
    if request.edge_factor < 0.0 || !request.edge_factor.is_finite() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_edge_factor",
            format!("Edge factor must be a non-negative number, got {}", request.edge_factor),
        ));
    }

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = generate_random(request.node_count, request.edge_factor, request.max_weight, &mut rng);

    let info = insert_session(&state, graph)?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// List all sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionInfo>>, ApiError> {
    let sessions = state.sessions.read().map_err(|_| poisoned())?;

    let mut infos = Vec::with_capacity(sessions.len());
    for session in sessions.values() {
        let graph = session.graph.read().map_err(|_| poisoned())?;
        infos.push(SessionInfo::new(session, &graph));
    }
    infos.sort_by_key(|info| info.created_at);

    Ok(Json(infos))
}

/// Get a session summary
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions.read().map_err(|_| poisoned())?;
    let session = sessions.get(&session_id).ok_or_else(session_not_found)?;
    let graph = session.graph.read().map_err(|_| poisoned())?;

    Ok(Json(SessionInfo::new(session, &graph)))
}

/// Get graph data for rendering
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let graph = session_graph(&state, session_id)?;
    let graph = graph.read().map_err(|_| poisoned())?;

    Ok(Json(WebGraph::from(graph.snapshot())))
}

/// Add a vertex to a session's graph
pub async fn add_vertex(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddVertexRequest>,
) -> Result<StatusCode, ApiError> {
    let graph = session_graph(&state, session_id)?;
    let mut graph = graph.write().map_err(|_| poisoned())?;

    if graph.vertex_count() >= state.max_vertices && !graph.contains(&request.key) {
        return Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "vertex_limit",
            format!("Graph already holds the limit of {} vertices", state.max_vertices),
        ));
    }
    graph.add_vertex(request.key).map_err(graph_error)?;
    Ok(StatusCode::CREATED)
}

/// Add an edge to a session's graph
pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgeRequest>,
) -> Result<StatusCode, ApiError> {
    let graph = session_graph(&state, session_id)?;
    let mut graph = graph.write().map_err(|_| poisoned())?;

    graph
        .add_edge(request.src, request.dest, request.weight)
        .map_err(graph_error)?;
    Ok(StatusCode::CREATED)
}

/// Compute the all-pairs distance table of a session's graph
pub async fn run_all_pairs(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AllPairsRequest>,
) -> Result<Json<AllPairsResponse>, ApiError> {
    let graph = session_graph(&state, session_id)?;
    let selection = parse_selection(request.selection.as_deref())?;
    let all_pairs =
        AllPairs::new(Dijkstra::new().with_selection(selection)).with_parallel(request.parallel);

    let response = tokio::task::spawn_blocking(move || {
        let graph = graph.read().map_err(|_| poisoned())?;

        let start_time = Instant::now();
        let table = all_pairs.compute(&*graph).map_err(graph_error)?;
        let execution_time = start_time.elapsed();

        let distances = table
            .entries()
            .into_iter()
            .map(|(source, target, distance)| DistanceEntry {
                source: *source,
                target: *target,
                distance,
            })
            .collect();

        Ok::<_, ApiError>(AllPairsResponse {
            execution_id: Uuid::new_v4(),
            algorithm: <Dijkstra as ShortestPathAlgorithm<i64, i64, KeyedGraph>>::name(
                all_pairs.algorithm(),
            )
            .to_string(),
            parallel: all_pairs.is_parallel(),
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            distances,
        })
    })
    .await
    .map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "task_failed",
            format!("All-pairs task failed: {}", err),
        )
    })??;

    Ok(Json(response))
}
