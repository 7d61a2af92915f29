use std::collections::{HashMap, HashSet};

use crate::algorithm::Distance;
use crate::graph::{Graph, VertexKey, Weight};
use crate::Result;

/// Result of a single-source shortest path run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Distance from the source to every vertex of the graph
    pub distances: HashMap<K, Distance<W>>,

    /// Predecessor in the shortest path tree, for every reached vertex except the source
    pub predecessors: HashMap<K, K>,

    /// Source vertex key
    pub source: K,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Distance to `target`, or `None` if the vertex was not in the graph
    pub fn distance(&self, target: &K) -> Option<Distance<W>> {
        self.distances.get(target).copied()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Vertices from the source to `target` along the shortest path tree
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut visited = HashSet::new();
        let mut current = target;

        while *current != self.source {
            if !visited.insert(current) {
                log::warn!("cycle in predecessor chain at vertex {:?}", current);
                return None;
            }
            match self.predecessors.get(current) {
                Some(pred) => {
                    path.push(pred.clone());
                    current = pred;
                }
                None => {
                    log::warn!("vertex {:?} is reachable but has no predecessor", current);
                    return None;
                }
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: VertexKey,
    W: Weight,
    G: Graph<K, W>,
{
    /// Compute shortest distances from `source` to every vertex of `graph`
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
