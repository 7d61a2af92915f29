use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};

use crate::Result;

/// Identifier of a vertex. Anything totally ordered and hashable qualifies.
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

/// Edge weight. Dijkstra's results are only correct for non-negative values.
/// Path lengths that overflow the type are treated as unreachable.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + Debug + Send + Sync {}

impl<T> Weight for T where T: Copy + Ord + Zero + CheckedAdd + Debug + Send + Sync {}

/// Trait representing a weighted directed graph keyed by vertex identifier
pub trait Graph<K, W>: Debug
where
    K: VertexKey,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if a vertex with this key exists
    fn contains(&self, key: &K) -> bool;

    /// Returns true if there's an edge from `src` to `dest`
    fn edge_exists(&self, src: &K, dest: &K) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, src: &K, dest: &K) -> Option<W>;

    /// Returns an iterator over every vertex key, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex.
    /// Unknown keys have no neighbours.
    fn neighbors(&self, key: &K) -> Box<dyn Iterator<Item = (&K, W)> + '_>;
}

/// Trait for insertion into a graph. Rejected operations leave the graph untouched.
pub trait MutableGraph<K, W>: Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Adds a vertex with no outgoing edges
    fn add_vertex(&mut self, key: K) -> Result<()>;

    /// Adds a directed edge between two existing vertices
    fn add_edge(&mut self, src: K, dest: K, weight: W) -> Result<()>;
}
