use all_pairs_sssp::graph::generators::generate_random_seeded;
use all_pairs_sssp::{AllPairs, Dijkstra, Selection};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");

    for &size in &[32usize, 128, 256] {
        let graph = generate_random_seeded(size, 3.0, 100, 7);

        let linear = AllPairs::new(Dijkstra::new());
        let heap = AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap));
        let parallel = AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap)).with_parallel(true);

        group.bench_with_input(BenchmarkId::new("linear_scan", size), &graph, |b, g| {
            b.iter(|| linear.compute(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("binary_heap", size), &graph, |b, g| {
            b.iter(|| heap.compute(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("binary_heap_parallel", size), &graph, |b, g| {
            b.iter(|| parallel.compute(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
