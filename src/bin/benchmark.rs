use std::time::{Duration, Instant};

use all_pairs_sssp::graph::generators::generate_random_seeded;
use all_pairs_sssp::graph::Graph;
use all_pairs_sssp::{AllPairs, DirectedGraph, Dijkstra, Selection};

// Time one all-pairs run and report how many pairs are connected
fn benchmark_all_pairs(name: &str, all_pairs: &AllPairs<Dijkstra>, graph: &DirectedGraph<i64, i64>) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let table = match all_pairs.compute(graph) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("  - failed: {}", err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    let reachable = table.entries().iter().filter(|(_, _, d)| d.is_finite()).count();
    println!("  - Found {} connected pairs in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [50, 100, 200, 400, 800];

    // Edge factor: average number of edges per vertex
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: all-pairs selection strategies");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let linear = AllPairs::new(Dijkstra::new());
    let heap = AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap));
    let heap_parallel = AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap)).with_parallel(true);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_seeded(size, edge_factor, 100, size as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let linear_time = benchmark_all_pairs("linear scan", &linear, &graph);
        let heap_time = benchmark_all_pairs("binary heap", &heap, &graph);
        let parallel_time = benchmark_all_pairs("binary heap, parallel", &heap_parallel, &graph);

        results.push((size, linear_time, heap_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12} | {:<10}",
             "Vertices", "Linear (ms)", "Heap (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, linear_time, heap_time, parallel_time) in &results {
        let speedup = linear_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!("{:<10} | {:<12} | {:<12} | {:<12} | {:<10.2}",
                 size,
                 linear_time.as_millis(),
                 heap_time.as_millis(),
                 parallel_time.as_millis(),
                 speedup);
    }
}
