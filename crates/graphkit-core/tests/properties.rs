//! Behavioural properties of the graph engine

use graphkit_core::config::{EngineConfig, SpanningTreeGuard, TraversalMode};
use graphkit_core::{Graph, Vertex, VertexId};

fn add(graph: &mut Graph, label: &str) -> VertexId {
    graph.add_vertex(Vertex::new(label, 0.0, 0.0)).unwrap()
}

fn labels(graph: &Graph, ids: impl IntoIterator<Item = VertexId>) -> Vec<String> {
    ids.into_iter()
        .map(|id| graph.label(id).unwrap().to_string())
        .collect()
}

#[test]
fn test_one_vertex_per_label() {
    let mut graph = Graph::new();
    add(&mut graph, "A");
    add(&mut graph, "B");

    assert!(graph.add_vertex(Vertex::new("A", 5.0, 5.0)).is_none());
    assert_eq!(graph.vertex_count(), 2);
    let count = graph.vertices().filter(|(_, v)| v.label() == "A").count();
    assert_eq!(count, 1);
}

#[test]
fn test_undirected_edge_exists_both_ways() {
    let mut graph = Graph::new();
    let a = add(&mut graph, "A");
    let b = add(&mut graph, "B");
    graph.add_edge(a, b, 3.0, false, "ab").unwrap();

    assert!(graph.does_edge_exist(a, b));
    assert!(graph.does_edge_exist(b, a));
    let sharing: Vec<_> = graph.edges().filter(|e| e.id().as_str() == "ab").collect();
    assert_eq!(sharing.len(), 2);
}

#[test]
fn test_directed_edge_has_no_reverse() {
    let mut graph = Graph::new();
    let a = add(&mut graph, "A");
    let b = add(&mut graph, "B");
    graph.add_edge(a, b, 1.0, true, "ab").unwrap();
    assert!(!graph.does_edge_exist(b, a));

    graph.add_edge(b, a, 1.0, true, "ba").unwrap();
    assert!(graph.does_edge_exist(b, a));
}

#[test]
fn test_removed_vertex_leaves_no_records() {
    let mut graph = Graph::new();
    let a = add(&mut graph, "A");
    let b = add(&mut graph, "B");
    let c = add(&mut graph, "C");
    graph.add_edge(a, b, 1.0, false, "ab").unwrap();
    graph.add_edge(c, b, 1.0, true, "cb").unwrap();
    graph.add_edge(b, b, 1.0, false, "bb").unwrap();

    graph.remove_vertex(b);
    assert!(graph.edges().all(|e| e.from() != b && e.to() != b));
    assert_eq!(labels(&graph, graph.vertex_ids()), vec!["A", "C"]);
}

/// Cycle A-B:1, B-C:2, C-D:1, D-A:4
fn square() -> (Graph, [VertexId; 4]) {
    let mut graph = Graph::new();
    let ids = [
        add(&mut graph, "A"),
        add(&mut graph, "B"),
        add(&mut graph, "C"),
        add(&mut graph, "D"),
    ];
    graph.connect(ids[0], ids[1], 1.0, false).unwrap();
    graph.connect(ids[1], ids[2], 2.0, false).unwrap();
    graph.connect(ids[2], ids[3], 1.0, false).unwrap();
    graph.connect(ids[3], ids[0], 4.0, false).unwrap();
    (graph, ids)
}

#[test]
fn test_dijkstra_is_idempotent() {
    let (graph, [a, _, c, _]) = square();
    let first = graph.dijkstra(a, c).unwrap();
    let second = graph.dijkstra(a, c).unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.path, second.path);
}

#[test]
fn test_dijkstra_on_square() {
    let (graph, [a, _, c, _]) = square();
    let result = graph.dijkstra(a, c).unwrap();
    assert_eq!(result.distance_to(c), 3.0);
    assert_eq!(labels(&graph, result.path.iter().copied()), vec!["A", "B", "C"]);
}

#[test]
fn test_prims_on_triangle() {
    for guard in [SpanningTreeGuard::Strict, SpanningTreeGuard::Reference] {
        let mut graph =
            Graph::with_config(EngineConfig::default().with_spanning_tree_guard(guard));
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let c = add(&mut graph, "C");
        graph.connect(a, b, 1.0, false).unwrap();
        graph.connect(b, c, 2.0, false).unwrap();
        graph.connect(a, c, 5.0, false).unwrap();

        let tree = graph.prims_mst(a).unwrap();
        if guard == SpanningTreeGuard::Strict {
            assert_eq!(tree.logical_edges().len(), 2);
            assert_eq!(tree.total_weight(), 3.0);
        }
        assert!(tree.does_edge_exist(a, b));
        assert!(tree.does_edge_exist(b, c));
    }
}

#[test]
fn test_bfs_visits_neighbours_before_two_hop_vertices() {
    for mode in [TraversalMode::Discoverer, TraversalMode::Reference] {
        let mut graph = Graph::with_config(EngineConfig::default().with_traversal_mode(mode));
        let a = add(&mut graph, "A");
        let b = add(&mut graph, "B");
        let c = add(&mut graph, "C");
        let d = add(&mut graph, "D");
        graph.connect(a, b, 9.0, false).unwrap();
        graph.connect(a, c, 1.0, false).unwrap();
        graph.connect(b, d, 1.0, false).unwrap();

        let order: Vec<_> = graph.bfs_order(a).into_iter().map(|v| v.vertex).collect();
        let visited = labels(&graph, order);
        let tail: Vec<_> = visited.iter().filter(|l| *l != "A").cloned().collect();
        assert_eq!(tail, vec!["B", "C", "D"], "mode {:?}", mode);
    }
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let (mut graph, [a, _, c, _]) = square();
    let before = graph.edge_count();
    assert!(!graph.remove_edge(a, c));
    assert_eq!(graph.edge_count(), before);
}

#[test]
fn test_one_record_per_ordered_pair() {
    let mut graph = Graph::new();
    let a = add(&mut graph, "A");
    let b = add(&mut graph, "B");
    graph.add_edge(b, a, 5.0, true, "B>A").unwrap();
    graph.add_edge(a, b, 1.0, false, "A-B").unwrap();

    for id in [a, b] {
        let edges = graph.adjacency(id).unwrap();
        for edge in edges {
            let same_pair = edges.iter().filter(|e| e.to() == edge.to()).count();
            assert_eq!(same_pair, 1);
        }
    }

    let undirected = graph.adjacency(a).unwrap()[0].clone();
    graph.remove_logical_edge(&undirected);
    let remaining: Vec<_> = graph.edges().map(|e| e.id().to_string()).collect();
    assert_eq!(remaining, vec!["B>A"]);
}
