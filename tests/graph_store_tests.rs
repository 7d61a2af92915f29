use all_pairs_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use all_pairs_sssp::Error;

fn three_vertices() -> DirectedGraph<i64, i64> {
    let mut graph = DirectedGraph::new();
    for key in 1..=3 {
        graph.add_vertex(key).unwrap();
    }
    graph
}

#[test]
fn test_add_vertex_and_contains() {
    let graph = three_vertices();

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.contains(&1));
    assert!(graph.contains(&3));
    assert!(!graph.contains(&4));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_vertex_is_rejected_once() {
    let mut graph = three_vertices();

    let err = graph.add_vertex(2).unwrap_err();
    assert_eq!(err, Error::VertexAlreadyExists("2".to_string()));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.vertices().filter(|k| **k == 2).count(), 1);
}

#[test]
fn test_add_edge_and_edge_exists() {
    let mut graph = three_vertices();
    graph.add_edge(1, 2, 5).unwrap();

    assert!(graph.edge_exists(&1, &2));
    assert!(!graph.edge_exists(&2, &1), "edges are directed");
    assert_eq!(graph.edge_weight(&1, &2), Some(5));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_edge_to_missing_vertex_is_rejected() {
    let mut graph: DirectedGraph<i64, i64> = DirectedGraph::new();
    graph.add_vertex(1).unwrap();

    let err = graph.add_edge(1, 2, 4).unwrap_err();
    assert_eq!(err, Error::VertexMissing("2".to_string()));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.neighbors(&1).count(), 0);
}

#[test]
fn test_missing_source_is_reported_first() {
    let mut graph: DirectedGraph<i64, i64> = DirectedGraph::new();

    let err = graph.add_edge(7, 8, 1).unwrap_err();
    assert_eq!(err, Error::VertexMissing("7".to_string()));

    graph.add_vertex(8).unwrap();
    let err = graph.add_edge(7, 8, 1).unwrap_err();
    assert_eq!(err, Error::VertexMissing("7".to_string()));
}

#[test]
fn test_duplicate_edge_keeps_original_weight() {
    let mut graph = three_vertices();
    graph.add_edge(1, 2, 5).unwrap();

    let err = graph.add_edge(1, 2, 1).unwrap_err();
    assert_eq!(err, Error::EdgeAlreadyExists("1".to_string(), "2".to_string()));
    assert_eq!(graph.edge_weight(&1, &2), Some(5));
    assert_eq!(graph.edge_count(), 1);

    // The reverse direction is a different edge
    graph.add_edge(2, 1, 1).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_neighbors_lists_outgoing_edges_only() {
    let mut graph = three_vertices();
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(1, 3, 9).unwrap();
    graph.add_edge(3, 1, 2).unwrap();

    let mut out: Vec<(i64, i64)> = graph.neighbors(&1).map(|(k, w)| (*k, w)).collect();
    out.sort();
    assert_eq!(out, vec![(2, 5), (3, 9)]);

    assert_eq!(graph.neighbors(&2).count(), 0);
    assert_eq!(graph.neighbors(&42).count(), 0);
    assert_eq!(graph.vertex(&1).map(|v| v.out_degree()), Some(2));
    assert_eq!(graph.vertex(&3).map(|v| *v.key()), Some(3));
}

#[test]
fn test_negative_weights_accepted_unless_strict() {
    let mut permissive = three_vertices();
    permissive.add_edge(1, 2, -3).unwrap();
    assert!(!permissive.validate_non_negative());

    let mut strict: DirectedGraph<i64, i64> = DirectedGraph::strict();
    strict.add_vertex(1).unwrap();
    strict.add_vertex(2).unwrap();
    let err = strict.add_edge(1, 2, -3).unwrap_err();
    assert_eq!(err, Error::NegativeWeight("-3".to_string()));
    assert_eq!(strict.edge_count(), 0);

    strict.add_edge(1, 2, 0).unwrap();
    assert!(strict.validate_non_negative());
}

#[test]
fn test_strict_graph_reports_missing_endpoint_before_weight() {
    let mut graph: DirectedGraph<i64, i64> = DirectedGraph::strict();
    graph.add_vertex(2).unwrap();

    assert_eq!(graph.add_edge(1, 2, -1), Err(Error::VertexMissing("1".to_string())));
    assert_eq!(graph.add_edge(2, 3, -1), Err(Error::VertexMissing("3".to_string())));
    assert_eq!(graph.add_edge(7, 8, -1), Err(Error::VertexMissing("7".to_string())));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_string_keys() {
    let mut graph: DirectedGraph<String, u32> = DirectedGraph::new();
    graph.add_vertex("a".to_string()).unwrap();
    graph.add_vertex("b".to_string()).unwrap();
    graph.add_edge("a".to_string(), "b".to_string(), 3).unwrap();

    assert!(graph.edge_exists(&"a".to_string(), &"b".to_string()));
    assert_eq!(
        graph.add_vertex("a".to_string()),
        Err(Error::VertexAlreadyExists("\"a\"".to_string()))
    );
}

#[test]
fn test_snapshot_is_sorted() {
    let mut graph: DirectedGraph<i64, i64> = DirectedGraph::new();
    for key in [3, 1, 2] {
        graph.add_vertex(key).unwrap();
    }
    graph.add_edge(3, 1, 4).unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph.add_edge(1, 2, 7).unwrap();

    let snapshot = graph.snapshot();
    assert_eq!(snapshot.vertices, vec![1, 2, 3]);
    assert_eq!(snapshot.edges, vec![(1, 2, 7), (1, 3, 2), (3, 1, 4)]);
}
