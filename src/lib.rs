//! All-pairs shortest distances over a keyed, weighted directed graph.
//!
//! The graph store keeps vertices under caller-supplied keys and owns every
//! edge as an adjacency entry of its source vertex. Distances between every
//! ordered pair are computed by running Dijkstra's algorithm once per vertex,
//! so edge weights must be non-negative for the results to be correct.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod shell;
pub mod web;

pub use algorithm::{
    all_pairs::{AllPairs, DistanceTable},
    dijkstra::{Dijkstra, Selection},
    Distance, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

use graph::{VertexKey, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(String),

    #[error("Vertex {0} does not exist")]
    VertexMissing(String),

    #[error("Edge from {0} to {1} already exists")]
    EdgeAlreadyExists(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Creates an empty graph that accepts any edge weight.
pub fn new_graph<K: VertexKey, W: Weight>() -> DirectedGraph<K, W> {
    DirectedGraph::new()
}

/// Runs Dijkstra from every vertex of `graph` with the default linear-scan
/// selection and collects the results per source.
pub fn compute_all_pairs<K, W, G>(graph: &G) -> Result<DistanceTable<K, W>>
where
    K: VertexKey,
    W: Weight,
    G: graph::Graph<K, W> + Sync,
{
    AllPairs::new(Dijkstra::new()).compute(graph)
}
