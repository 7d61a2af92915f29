use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexKey, Weight};
use crate::Result;

/// Runs a single-source algorithm once per vertex and gathers the results.
///
/// Each run only reads the graph, so with `parallel` set the runs are spread
/// over the rayon thread pool.
#[derive(Debug, Clone, Default)]
pub struct AllPairs<A> {
    algorithm: A,
    parallel: bool,
}

impl<A> AllPairs<A> {
    pub fn new(algorithm: A) -> Self {
        AllPairs {
            algorithm,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Computes the distance table of `graph`. An empty graph gives an empty table.
    pub fn compute<K, W, G>(&self, graph: &G) -> Result<DistanceTable<K, W>>
    where
        K: VertexKey,
        W: Weight,
        G: Graph<K, W> + Sync,
        A: ShortestPathAlgorithm<K, W, G> + Sync,
    {
        let start = Instant::now();
        let sources: Vec<&K> = graph.vertices().collect();
        log::debug!(
            "all-pairs with {} over {} vertices (parallel: {})",
            self.algorithm.name(),
            sources.len(),
            self.parallel
        );

        let results: Vec<ShortestPathResult<K, W>> = if self.parallel {
            sources
                .par_iter()
                .map(|source| self.algorithm.compute_shortest_paths(graph, source))
                .collect::<Result<_>>()?
        } else {
            sources
                .iter()
                .map(|source| self.algorithm.compute_shortest_paths(graph, source))
                .collect::<Result<_>>()?
        };

        let rows = results
            .into_iter()
            .map(|result| (result.source.clone(), result))
            .collect();

        log::debug!("all-pairs finished in {:?}", start.elapsed());
        Ok(DistanceTable { rows })
    }
}

/// Shortest distances between every ordered pair of vertices, keyed by source
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<K, W>
where
    K: VertexKey,
    W: Weight,
{
    rows: HashMap<K, ShortestPathResult<K, W>>,
}

impl<K, W> DistanceTable<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Number of sources
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from `source` to `target`, `None` if either key is unknown
    pub fn distance(&self, source: &K, target: &K) -> Option<Distance<W>> {
        self.rows.get(source)?.distance(target)
    }

    /// Every destination's distance from `source`
    pub fn row(&self, source: &K) -> Option<&HashMap<K, Distance<W>>> {
        self.rows.get(source).map(|r| &r.distances)
    }

    /// Shortest path from `source` to `target` as a vertex sequence
    pub fn path(&self, source: &K, target: &K) -> Option<Vec<K>> {
        self.rows.get(source)?.path_to(target)
    }

    /// Source keys in ascending order
    pub fn sources(&self) -> Vec<&K> {
        let mut sources: Vec<&K> = self.rows.keys().collect();
        sources.sort();
        sources
    }

    /// `(source, target, distance)` for every pair, sorted by source then target
    pub fn entries(&self) -> Vec<(&K, &K, Distance<W>)> {
        let mut entries: Vec<(&K, &K, Distance<W>)> = self
            .rows
            .iter()
            .flat_map(|(source, result)| {
                result
                    .distances
                    .iter()
                    .map(move |(target, d)| (source, target, *d))
            })
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries
    }

    /// Plain nested map: source -> destination -> distance
    pub fn into_map(self) -> HashMap<K, HashMap<K, Distance<W>>> {
        self.rows
            .into_iter()
            .map(|(source, result)| (source, result.distances))
            .collect()
    }
}
