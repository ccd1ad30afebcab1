//! Graph construction, order/size, vertex and adjacency queries.

use std::collections::HashSet;

use edge_graph::graph::{Graph, GraphBuilder};
use edge_graph::types::Edge;
use rand::Rng;

// ==================== Helper ====================

/// The edge set used by the demo driver.
fn demo_graph() -> Graph<i32> {
    Graph::from_edges([(1, 5), (5, 2), (7, 2), (1, 3), (2, 6), (2, 7), (7, 3)])
}

/// Random edge list over vertices `0..vertex_count`, self-loops and duplicates allowed.
fn random_edges(rng: &mut impl Rng, vertex_count: u32, edge_count: usize) -> Vec<(u32, u32)> {
    (0..edge_count)
        .map(|_| {
            (
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
            )
        })
        .collect()
}

// ==================== Construction ====================

#[test]
fn test_empty_graph() {
    let graph: Graph<i32> = Graph::new();
    assert_eq!(graph.size(), 0);
    assert_eq!(graph.order(), 0);
    assert!(graph.is_empty());
    assert!(graph.vertices().is_empty());
    assert_eq!(graph, Graph::default());
}

#[test]
fn test_from_empty_edge_list() {
    let graph: Graph<i32> = Graph::from_edges(Vec::<(i32, i32)>::new());
    assert_eq!(graph.size(), 0);
    assert_eq!(graph.order(), 0);
}

#[test]
fn test_edges_keep_storage_order() {
    let graph = demo_graph();
    let pairs: Vec<(i32, i32)> = graph.edges().iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(
        pairs,
        vec![(1, 5), (5, 2), (7, 2), (1, 3), (2, 6), (2, 7), (7, 3)]
    );
}

#[test]
fn test_builder_matches_from_edges() {
    let mut builder = GraphBuilder::new();
    builder.link(1, 5).link(5, 2).link(7, 2);
    builder.extend([(1, 3), (2, 6)]);
    builder.extend([Edge::new(2, 7), Edge::new(7, 3)]);
    assert_eq!(builder.edge_count(), 7);
    assert_eq!(builder.build(), demo_graph());
}

#[test]
fn test_collect_from_edges() {
    let graph: Graph<&str> = vec![Edge::new("a", "b"), Edge::new("b", "c")]
        .into_iter()
        .collect();
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.order(), 3);
}

#[test]
fn test_graph_owns_its_edges() {
    let mut edges = vec![(1, 2), (2, 3)];
    let graph = Graph::from_edges(edges.clone());
    edges.push((3, 4));
    assert_eq!(graph.size(), 2);
}

// ==================== Order / Size ====================

#[test]
fn test_demo_order_and_size() {
    let graph = demo_graph();
    assert_eq!(graph.order(), 6);
    assert_eq!(graph.size(), 7);
}

#[test]
fn test_duplicates_counted_in_size_not_order() {
    let graph = Graph::from_edges([(1, 2), (1, 2), (2, 1)]);
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.order(), 2);
}

#[test]
fn test_self_loop_is_one_vertex() {
    let graph = Graph::from_edges([(4, 4)]);
    assert_eq!(graph.size(), 1);
    assert_eq!(graph.order(), 1);
    assert_eq!(graph.vertices(), vec![4]);
}

#[test]
fn test_random_order_and_size() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let edge_count = rng.gen_range(0..60);
        let edges = random_edges(&mut rng, 25, edge_count);
        let graph = Graph::from_edges(edges.clone());

        let endpoints: HashSet<u32> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        assert_eq!(graph.size(), edges.len());
        assert_eq!(graph.order(), endpoints.len());
        assert_eq!(graph.vertices().len(), graph.order());
    }
}

// ==================== Vertices ====================

#[test]
fn test_vertices_first_appearance_order() {
    let graph = demo_graph();
    assert_eq!(graph.vertices(), vec![1, 5, 2, 7, 3, 6]);
}

#[test]
fn test_vertices_repeatable() {
    let graph = Graph::from_edges([("z", "a"), ("m", "z"), ("a", "q")]);
    let first = graph.vertices();
    assert_eq!(first, vec!["z", "a", "m", "q"]);
    assert_eq!(graph.vertices(), first);
}

// ==================== Adjacency ====================

#[test]
fn test_adjacent_vertices_storage_order() {
    let graph = demo_graph();
    assert_eq!(graph.adjacent_vertices(&2), vec![5, 7, 6, 7]);
    assert_eq!(graph.adjacent_vertices(&7), vec![2, 2, 3]);
    assert_eq!(graph.adjacent_vertices(&6), vec![2]);
}

#[test]
fn test_adjacent_vertices_unknown_vertex() {
    let graph = demo_graph();
    assert!(graph.adjacent_vertices(&42).is_empty());
}

#[test]
fn test_self_loop_emitted_once() {
    let graph = Graph::from_edges([(1, 1), (1, 2)]);
    assert_eq!(graph.adjacent_vertices(&1), vec![1, 2]);
    assert_eq!(graph.adjacent_vertices(&2), vec![1]);
}

#[test]
fn test_duplicate_edges_duplicate_adjacency() {
    let graph = Graph::from_edges([("a", "b"), ("b", "a"), ("a", "b")]);
    assert_eq!(graph.adjacent_vertices(&"a"), vec!["b", "b", "b"]);
}

#[test]
fn test_random_adjacency_symmetric() {
    let mut rng = rand::thread_rng();
    for _ in 0..30 {
        let edges = random_edges(&mut rng, 12, 30);
        let graph = Graph::from_edges(edges.clone());
        for &(a, b) in edges.iter().filter(|(a, b)| a != b) {
            assert!(graph.adjacent_vertices(&a).contains(&b));
            assert!(graph.adjacent_vertices(&b).contains(&a));
        }
        for v in graph.vertices() {
            let touching = edges.iter().filter(|&&(a, b)| a == v || b == v).count();
            assert_eq!(graph.adjacent_vertices(&v).len(), touching);
        }
    }
}

// ==================== Connectivity ====================

#[test]
fn test_are_connected_undirected() {
    let graph = demo_graph();
    assert!(graph.are_connected(&1, &5));
    assert!(graph.are_connected(&5, &1));
    assert!(graph.are_connected(&3, &7));
    assert!(!graph.are_connected(&1, &2));
    assert!(!graph.are_connected(&1, &1));
    assert!(!graph.are_connected(&1, &99));
}

#[test]
fn test_are_connected_self_loop() {
    let graph = Graph::from_edges([(3, 3), (3, 4)]);
    assert!(graph.are_connected(&3, &3));
    assert!(!graph.are_connected(&4, &4));
}

#[test]
fn test_edge_helpers() {
    let edge = Edge::from((1, 2));
    assert_eq!(edge.endpoints(), (&1, &2));
    assert!(edge.touches(&2));
    assert!(!edge.touches(&3));
    assert!(edge.connects(&2, &1));
    assert_eq!(edge.opposite(&1), Some(&2));
    assert_eq!(edge.opposite(&2), Some(&1));
    assert_eq!(edge.opposite(&3), None);
    assert!(!edge.is_self_loop());
    assert_eq!(edge.to_string(), "(1 - 2)");
}
