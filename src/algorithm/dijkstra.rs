use std::collections::{HashMap, HashSet};

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, VertexKey, Weight};
use crate::{Error, Result};

/// How the next vertex to settle is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every unvisited vertex for the minimum, O(V^2) overall
    #[default]
    LinearScan,
    /// Pop the minimum from a binary heap, O((V + E) log V) overall
    BinaryHeap,
}

/// Classic Dijkstra's algorithm. Assumes non-negative edge weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    selection: Selection,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using linear-scan selection
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn initial_labels<K, W, G>(graph: &G, source: &K) -> HashMap<K, Distance<W>>
    where
        K: VertexKey,
        W: Weight,
        G: Graph<K, W>,
    {
        let mut distances: HashMap<K, Distance<W>> = graph
            .vertices()
            .map(|k| (k.clone(), Distance::Infinite))
            .collect();
        distances.insert(source.clone(), Distance::zero());
        distances
    }

    fn run_linear_scan<K, W, G>(&self, graph: &G, source: &K) -> ShortestPathResult<K, W>
    where
        K: VertexKey,
        W: Weight,
        G: Graph<K, W>,
    {
        let mut distances = Self::initial_labels(graph, source);
        let mut predecessors = HashMap::new();
        let mut unvisited: HashSet<K> = graph.vertices().cloned().collect();

        loop {
            let Some(closest) = unvisited
                .iter()
                .min_by(|a, b| distances[*a].cmp(&distances[*b]).then_with(|| a.cmp(b)))
                .cloned()
            else {
                break;
            };
            unvisited.remove(&closest);

            // Only unreachable vertices remain
            let Distance::Finite(dist_closest) = distances[&closest] else {
                break;
            };
            log::trace!("settled {:?} at {:?}", closest, dist_closest);

            for (neighbour, weight) in graph.neighbors(&closest) {
                if !unvisited.contains(neighbour) {
                    continue;
                }
                let candidate = Distance::Finite(dist_closest).extend(weight);
                if candidate < distances[neighbour] {
                    distances.insert(neighbour.clone(), candidate);
                    predecessors.insert(neighbour.clone(), closest.clone());
                }
            }
        }

        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        }
    }

    fn run_binary_heap<K, W, G>(&self, graph: &G, source: &K) -> ShortestPathResult<K, W>
    where
        K: VertexKey,
        W: Weight,
        G: Graph<K, W>,
    {
        let mut distances = Self::initial_labels(graph, source);
        let mut predecessors = HashMap::new();
        let mut settled: HashSet<K> = HashSet::with_capacity(graph.vertex_count());

        let mut queue = MinQueue::with_capacity(graph.vertex_count());
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry left behind by a later improvement
            if !settled.insert(u.clone()) {
                continue;
            }
            log::trace!("settled {:?} at {:?}", u, dist_u);

            for (v, weight) in graph.neighbors(&u) {
                if settled.contains(v) {
                    continue;
                }
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };
                if Distance::Finite(new_dist) < distances[v] {
                    distances.insert(v.clone(), Distance::Finite(new_dist));
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), new_dist);
                }
            }
        }

        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        }
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: VertexKey,
    W: Weight,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        match self.selection {
            Selection::LinearScan => "Dijkstra (linear scan)",
            Selection::BinaryHeap => "Dijkstra (binary heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>> {
        if !graph.contains(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        Ok(match self.selection {
            Selection::LinearScan => self.run_linear_scan(graph, source),
            Selection::BinaryHeap => self.run_binary_heap(graph, source),
        })
    }
}
