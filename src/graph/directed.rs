use crate::graph::traits::{Graph, MutableGraph, VertexKey, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A vertex and its outgoing adjacency: neighbour key -> edge weight
#[derive(Debug, Clone)]
pub struct Vertex<K, W> {
    key: K,
    neighbours: HashMap<K, W>,
}

impl<K, W> Vertex<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn new(key: K) -> Self {
        Vertex {
            key,
            neighbours: HashMap::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Outgoing neighbours with their edge weights
    pub fn neighbours(&self) -> impl Iterator<Item = (&K, W)> + '_ {
        self.neighbours.iter().map(|(k, w)| (k, *w))
    }

    pub fn weight(&self, neighbour: &K) -> Option<W> {
        self.neighbours.get(neighbour).copied()
    }

    pub fn out_degree(&self) -> usize {
        self.neighbours.len()
    }
}

/// A directed graph stored as an arena of vertices keyed by identifier.
///
/// Edges live in the adjacency map of their source vertex and refer to the
/// destination by key, never by reference.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, W> {
    vertices: HashMap<K, Vertex<K, W>>,

    /// Number of edges across all adjacency maps
    edge_count: usize,

    /// Whether `add_edge` refuses negative weights
    reject_negative: bool,
}

impl<K, W> Default for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Creates a new empty directed graph that accepts any weight
    pub fn new() -> Self {
        DirectedGraph {
            vertices: HashMap::new(),
            edge_count: 0,
            reject_negative: false,
        }
    }

    /// Creates a new empty directed graph whose `add_edge` rejects negative weights
    pub fn strict() -> Self {
        DirectedGraph {
            reject_negative: true,
            ..Self::new()
        }
    }

    /// Creates a new directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: HashMap::with_capacity(vertices),
            ..Self::new()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.reject_negative
    }

    pub fn vertex(&self, key: &K) -> Option<&Vertex<K, W>> {
        self.vertices.get(key)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.vertices
            .values()
            .flat_map(|v| v.neighbours.values())
            .all(|w| *w >= W::zero())
    }

    /// Sorted view of every vertex and edge, for printing or rendering
    pub fn snapshot(&self) -> GraphSnapshot<K, W> {
        let mut vertices: Vec<K> = self.vertices.keys().cloned().collect();
        vertices.sort();

        let mut edges: Vec<(K, K, W)> = self
            .vertices
            .values()
            .flat_map(|v| {
                v.neighbours
                    .iter()
                    .map(move |(dest, w)| (v.key.clone(), dest.clone(), *w))
            })
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

        GraphSnapshot { vertices, edges }
    }
}

impl<K, W> Graph<K, W> for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    fn edge_exists(&self, src: &K, dest: &K) -> bool {
        self.edge_weight(src, dest).is_some()
    }

    fn edge_weight(&self, src: &K, dest: &K) -> Option<W> {
        self.vertices.get(src).and_then(|v| v.weight(dest))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.vertices.keys())
    }

    fn neighbors(&self, key: &K) -> Box<dyn Iterator<Item = (&K, W)> + '_> {
        if let Some(vertex) = self.vertices.get(key) {
            Box::new(vertex.neighbours())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<K, W> MutableGraph<K, W> for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn add_vertex(&mut self, key: K) -> Result<()> {
        if self.vertices.contains_key(&key) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", key)));
        }
        self.vertices.insert(key.clone(), Vertex::new(key));
        Ok(())
    }

    fn add_edge(&mut self, src: K, dest: K, weight: W) -> Result<()> {
        for endpoint in [&src, &dest] {
            if !self.vertices.contains_key(endpoint) {
                return Err(Error::VertexMissing(format!("{:?}", endpoint)));
            }
        }
        if self.reject_negative && weight < W::zero() {
            return Err(Error::NegativeWeight(format!("{:?}", weight)));
        }

        let vertex = self
            .vertices
            .get_mut(&src)
            .ok_or_else(|| Error::VertexMissing(format!("{:?}", src)))?;
        if vertex.neighbours.contains_key(&dest) {
            return Err(Error::EdgeAlreadyExists(
                format!("{:?}", src),
                format!("{:?}", dest),
            ));
        }

        vertex.neighbours.insert(dest, weight);
        self.edge_count += 1;
        Ok(())
    }
}

/// Vertices and edges of a graph sorted by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSnapshot<K, W> {
    pub vertices: Vec<K>,
    /// `(src, dest, weight)` sorted by `(src, dest)`
    pub edges: Vec<(K, K, W)>,
}
