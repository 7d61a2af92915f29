use all_pairs_sssp::graph::generators::generate_random_seeded;
use all_pairs_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use all_pairs_sssp::{compute_all_pairs, new_graph, AllPairs, Dijkstra, Distance, Selection};

fn graph_with(vertices: &[i64], edges: &[(i64, i64, i64)]) -> DirectedGraph<i64, i64> {
    let mut graph = new_graph();
    for &key in vertices {
        graph.add_vertex(key).unwrap();
    }
    for &(src, dest, weight) in edges {
        graph.add_edge(src, dest, weight).unwrap();
    }
    graph
}

#[test]
fn test_chain_of_three() {
    let graph = graph_with(&[1, 2, 3], &[(1, 2, 5), (2, 3, 2)]);
    let table = compute_all_pairs(&graph).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.distance(&1, &2), Some(Distance::Finite(5)));
    assert_eq!(table.distance(&1, &3), Some(Distance::Finite(7)));
    assert_eq!(table.distance(&2, &3), Some(Distance::Finite(2)));
    assert_eq!(table.distance(&2, &1), Some(Distance::Infinite));
    assert_eq!(table.distance(&3, &1), Some(Distance::Infinite));
    assert_eq!(table.distance(&3, &2), Some(Distance::Infinite));
    assert_eq!(table.distance(&3, &3), Some(Distance::Finite(0)));
    assert_eq!(table.path(&1, &3), Some(vec![1, 2, 3]));
}

#[test]
fn test_single_vertex_table() {
    let graph = graph_with(&[1], &[]);
    let map = compute_all_pairs(&graph).unwrap().into_map();

    assert_eq!(map.len(), 1);
    assert_eq!(map[&1].len(), 1);
    assert_eq!(map[&1][&1], Distance::Finite(0));
}

#[test]
fn test_disconnected_pair() {
    let graph = graph_with(&[1, 2], &[]);
    let table = compute_all_pairs(&graph).unwrap();

    assert_eq!(table.distance(&1, &1), Some(Distance::Finite(0)));
    assert_eq!(table.distance(&2, &2), Some(Distance::Finite(0)));
    assert_eq!(table.distance(&1, &2), Some(Distance::Infinite));
    assert_eq!(table.distance(&2, &1), Some(Distance::Infinite));
}

#[test]
fn test_empty_graph_gives_empty_table() {
    let graph: DirectedGraph<i64, i64> = new_graph();
    let table = compute_all_pairs(&graph).unwrap();

    assert!(table.is_empty());
    assert!(table.entries().is_empty());
    assert_eq!(table.distance(&1, &1), None);
}

#[test]
fn test_rejected_edge_leaves_table_unchanged() {
    let mut graph = graph_with(&[1], &[]);
    assert!(graph.add_edge(1, 2, 3).is_err());
    assert_eq!(graph.edge_count(), 0);

    let table = compute_all_pairs(&graph).unwrap();
    assert_eq!(table.entries(), vec![(&1, &1, Distance::Finite(0))]);
}

#[test]
fn test_entries_are_sorted() {
    let graph = graph_with(&[2, 1], &[(2, 1, 4)]);
    let table = compute_all_pairs(&graph).unwrap();

    assert_eq!(table.sources(), vec![&1, &2]);
    assert_eq!(
        table.entries(),
        vec![
            (&1, &1, Distance::Finite(0)),
            (&1, &2, Distance::Infinite),
            (&2, &1, Distance::Finite(4)),
            (&2, &2, Distance::Finite(0)),
        ]
    );
}

#[test]
fn test_distances_are_not_symmetric() {
    let graph = graph_with(&[1, 2], &[(1, 2, 1), (2, 1, 9)]);
    let table = compute_all_pairs(&graph).unwrap();

    assert_eq!(table.distance(&1, &2), Some(Distance::Finite(1)));
    assert_eq!(table.distance(&2, &1), Some(Distance::Finite(9)));
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = AllPairs::new(Dijkstra::new());
    let parallel = AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap)).with_parallel(true);

    for seed in 0..4 {
        let graph = generate_random_seeded(45, 2.0, 25, seed);
        let a = sequential.compute(&graph).unwrap();
        let b = parallel.compute(&graph).unwrap();
        assert_eq!(a.entries(), b.entries(), "seed {}", seed);
    }
}

#[test]
fn test_triangle_inequality_across_all_sources() {
    let graph = generate_random_seeded(30, 3.0, 15, 99);
    let table = AllPairs::new(Dijkstra::new()).with_parallel(true).compute(&graph).unwrap();

    for u in graph.vertices() {
        let row = table.row(u).unwrap();
        for v in graph.vertices() {
            for (w, weight) in graph.neighbors(v) {
                assert!(row[w] <= row[v].extend(weight));
            }
        }
    }
}

#[test]
fn test_unsigned_weights_and_char_keys() {
    let mut graph: DirectedGraph<char, u8> = DirectedGraph::new();
    for key in ['a', 'b', 'c', 'd'] {
        graph.add_vertex(key).unwrap();
    }
    graph.add_edge('a', 'b', 200).unwrap();
    graph.add_edge('b', 'c', 50).unwrap();
    graph.add_edge('a', 'c', 255).unwrap();
    graph.add_edge('c', 'd', 10).unwrap();

    let table = compute_all_pairs(&graph).unwrap();
    assert_eq!(table.distance(&'a', &'c'), Some(Distance::Finite(250)));
    // 250 + 10 does not fit in a u8
    assert_eq!(table.distance(&'a', &'d'), Some(Distance::Infinite));
    assert_eq!(table.distance(&'b', &'d'), Some(Distance::Finite(60)));
    assert_eq!(table.distance(&'c', &'a'), Some(Distance::Infinite));
}
