use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::algorithm::Distance;
use crate::graph::{DirectedGraph, Graph, GraphSnapshot};

/// Graph type served over HTTP: integer keys and integer weights
pub type KeyedGraph = DirectedGraph<i64, i64>;

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebNode {
    pub id: i64,
    pub label: String,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebEdge {
    pub source: i64,
    pub target: i64,
    pub weight: i64,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl From<GraphSnapshot<i64, i64>> for WebGraph {
    fn from(snapshot: GraphSnapshot<i64, i64>) -> Self {
        WebGraph {
            nodes: snapshot
                .vertices
                .into_iter()
                .map(|id| WebNode {
                    id,
                    label: id.to_string(),
                })
                .collect(),
            links: snapshot
                .edges
                .into_iter()
                .map(|(source, target, weight)| WebEdge {
                    source,
                    target,
                    weight,
                })
                .collect(),
        }
    }
}

/// Parameters for creating an empty session
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub strict: bool,
}

/// Parameters for random graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub node_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edge_factor() -> f64 { 2.0 }
fn default_max_weight() -> i64 { 10 }

#[derive(Debug, Deserialize)]
pub struct AddVertexRequest {
    pub key: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub src: i64,
    pub dest: i64,
    pub weight: i64,
}

/// Parameters for an all-pairs run
#[derive(Debug, Default, Deserialize)]
pub struct AllPairsRequest {
    /// "linear-scan" (default) or "binary-heap"
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub parallel: bool,
}

/// One cell of the distance table; `distance` is `null` when unreachable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistanceEntry {
    pub source: i64,
    pub target: i64,
    pub distance: Distance<i64>,
}

/// Response containing all-pairs results
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub parallel: bool,
    pub execution_time_ms: f64,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub distances: Vec<DistanceEntry>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// A graph owned by one client. Mutations take the write lock, queries the read lock.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<RwLock<KeyedGraph>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: KeyedGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(RwLock::new(graph)),
            created_at: Utc::now(),
        }
    }
}

/// Serializable summary of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub strict: bool,
    pub created_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new(session: &Session, graph: &KeyedGraph) -> Self {
        SessionInfo {
            id: session.id,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            strict: graph.is_strict(),
            created_at: session.created_at,
        }
    }
}
