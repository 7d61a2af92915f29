use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::prelude::*;

/// Generates a directed path 0 -> 1 -> ... -> n-1 where every edge has the same weight
pub fn generate_chain(n: usize, weight: i64) -> DirectedGraph<i64, i64> {
    let mut graph = DirectedGraph::with_capacity(n);

    for key in 0..n as i64 {
        // keys are fresh, insertion cannot collide
        let _ = graph.add_vertex(key);
    }
    for key in 1..n as i64 {
        let _ = graph.add_edge(key - 1, key, weight);
    }

    graph
}

/// Generates a width*height grid with unit edges to the east and south neighbours.
/// Vertex (x, y) has key `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<i64, i64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for key in 0..(width * height) as i64 {
        let _ = graph.add_vertex(key);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = (y * width + x) as i64;
            if x + 1 < width {
                let _ = graph.add_edge(vertex, vertex + 1, 1);
            }
            if y + 1 < height {
                let _ = graph.add_edge(vertex, vertex + width as i64, 1);
            }
        }
    }

    graph
}

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Weights are drawn from `1..=max_weight`; self-loops and duplicate edges are skipped.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> DirectedGraph<i64, i64> {
    let mut graph = DirectedGraph::with_capacity(n);

    for key in 0..n as i64 {
        let _ = graph.add_vertex(key);
    }
    if n < 2 {
        return graph;
    }

    // A simple directed graph has at most n * (n - 1) edges
    let num_edges = ((edge_factor * n as f64) as usize).min(n.saturating_mul(n - 1));
    let max_weight = max_weight.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n as i64);
        let v = rng.gen_range(0..n as i64);
        if u != v && !graph.edge_exists(&u, &v) {
            let weight = rng.gen_range(1..=max_weight);
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Same as [`generate_random`] with a reproducible seed
pub fn generate_random_seeded(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    seed: u64,
) -> DirectedGraph<i64, i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random(n, edge_factor, max_weight, &mut rng)
}
