//! Graph construction: edge insertion, weight/orientation modes, degree bookkeeping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_theory::graph::{Graph, GraphBuilder};
use graph_theory::types::{Edge, GraphConfig, Vertex, VertexId};

/// The undirected weighted graph used throughout the test suite.
fn demo_graph() -> Graph<u32> {
    let mut graph = Graph::new(false, true);
    graph.add_edge(1, 3, 5);
    graph.add_edge(1, 2, 10);
    graph.add_edge(2, 4, 4);
    graph.add_edge(2, 3, 4);
    graph.add_edge(1, 5, 5);
    graph.add_edge(2, 4, 9);
    graph.add_edge(2, 6, 0);
    graph.add_edge(1, 6, 5);
    graph.add_edge(3, 4, 8);
    graph.add_edge(3, 7, 10);
    graph.add_edge(2, 7, 11);
    graph.add_edge(1, 7, 6);
    graph
}

// ==================== Vertex Tests ====================

#[test]
fn test_vertex_creation() {
    let vertex = Vertex::new("a");
    assert_eq!(*vertex.label(), "a");
    assert_eq!(vertex.in_degree(), 0);
    assert_eq!(vertex.out_degree(), 0);
    assert_eq!(vertex.neighbor_count(), 0);
}

#[test]
fn test_vertex_set_neighbor_overwrites() {
    let mut vertex = Vertex::new("a");
    assert_eq!(vertex.set_neighbor(VertexId(1), 4), None);
    assert_eq!(vertex.set_neighbor(VertexId(1), 9), Some(4));
    assert_eq!(vertex.set_neighbor(VertexId(2), 1), None);

    assert_eq!(vertex.neighbor_count(), 2);
    assert_eq!(vertex.weight_to(VertexId(1)), Some(9));
    // Degrees are the graph's business.
    assert_eq!(vertex.out_degree(), 0);

    let neighbors: Vec<_> = vertex.neighbors().collect();
    assert_eq!(neighbors, vec![(VertexId(1), 9), (VertexId(2), 1)]);
}

// ==================== Insertion Tests ====================

#[test]
fn test_empty_graph() {
    let graph: Graph<String> = Graph::new(true, true);
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains(&"x".to_string()));
}

#[test]
fn test_vertices_created_by_edges_only() {
    let mut graph = Graph::new(true, false);
    graph.add_unweighted_edge("a", "b");
    graph.add_unweighted_edge("b", "c");

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.contains(&"a"));
    assert!(graph.contains(&"c"));
    assert!(!graph.contains(&"d"));

    // Registry keeps first-appearance order.
    let labels: Vec<&str> = graph.labels().copied().collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
    assert_eq!(graph.vertex_id(&"c"), Some(VertexId(2)));
    assert_eq!(graph.vertex_by_id(VertexId(1)).map(|v| *v.label()), Some("b"));
}

#[test]
fn test_unweighted_graph_forces_unit_weight() {
    let mut graph = Graph::new(true, false);
    graph.add_edge("a", "b", 7);
    graph.add_edge("b", "c", -3);
    graph.add_edge("c", "a", 0);

    assert!(graph.edges().all(|e| e.weight == 1));
    assert_eq!(graph.weight(&"a", &"b"), Some(1));
}

#[test]
fn test_weighted_graph_keeps_weight() {
    let mut graph = Graph::new(true, true);
    graph.add_edge("a", "b", 7);
    assert_eq!(graph.weight(&"a", &"b"), Some(7));
    assert_eq!(graph.weight(&"b", &"a"), None);
}

#[test]
fn test_directed_degrees() {
    let mut graph = Graph::new(true, true);
    graph.add_edge("a", "b", 1);
    graph.add_edge("a", "c", 1);
    graph.add_edge("c", "b", 1);

    assert_eq!(graph.degree(&"a"), Some((0, 2)));
    assert_eq!(graph.degree(&"b"), Some((2, 0)));
    assert_eq!(graph.degree(&"c"), Some((1, 1)));
    assert_eq!(graph.degree(&"z"), None);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_undirected_creates_both_directions() {
    let mut graph = Graph::new(false, true);
    graph.add_edge("a", "b", 3);

    assert_eq!(graph.weight(&"a", &"b"), Some(3));
    assert_eq!(graph.weight(&"b", &"a"), Some(3));
    assert_eq!(graph.degree(&"a"), Some((1, 1)));
    assert_eq!(graph.degree(&"b"), Some((1, 1)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_repeated_insertion_overwrites_and_counts() {
    let mut graph = Graph::new(true, true);
    graph.add_edge("a", "b", 4);
    graph.add_edge("a", "b", 9);

    assert_eq!(graph.weight(&"a", &"b"), Some(9));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.insertions(), 2);
    // Degrees count insertions, not distinct neighbors.
    assert_eq!(graph.degree(&"a"), Some((0, 2)));
    assert_eq!(graph.degree(&"b"), Some((2, 0)));
    assert_eq!(graph.vertex(&"a").map(|v| v.neighbor_count()), Some(1));
}

#[test]
fn test_undirected_self_loop() {
    let mut graph = Graph::new(false, true);
    graph.add_edge("a", "a", 3);

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(&"a"), Some((2, 2)));
    assert_eq!(graph.edges().count(), 1);
}

#[test]
fn test_demo_graph_counts() {
    let graph = demo_graph();

    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.insertions(), 12);
    // (2, 4) was inserted twice.
    assert_eq!(graph.edge_count(), 11);
    assert_eq!(graph.edges().count(), 11);
    assert_eq!(graph.weight(&2, &4), Some(9));
    assert_eq!(graph.weight(&4, &2), Some(9));

    assert_eq!(graph.degree(&1), Some((5, 5)));
    assert_eq!(graph.degree(&2), Some((6, 6)));
    assert_eq!(graph.vertex(&2).map(|v| v.neighbor_count()), Some(5));

    let stats = graph.stats();
    assert_eq!(stats.vertices, 7);
    assert_eq!(stats.edges, 11);
    assert!(!stats.oriented);
    assert!(stats.weighted);
}

#[test]
fn test_neighbors_in_insertion_order() {
    let graph = demo_graph();
    let neighbors: Vec<(u32, i64)> = graph.neighbors(&1).map(|(&l, w)| (l, w)).collect();
    assert_eq!(neighbors, vec![(3, 5), (2, 10), (5, 5), (6, 5), (7, 6)]);
    assert_eq!(graph.neighbors(&42).count(), 0);
}

#[test]
fn test_undirected_degree_invariant_random() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = Graph::new(false, rng.gen_bool(0.5));

    for _ in 0..500 {
        let from: u32 = rng.gen_range(0..40);
        let to: u32 = rng.gen_range(0..40);
        graph.add_edge(from, to, rng.gen_range(0..100));
    }

    for vertex in graph.vertices() {
        assert_eq!(
            vertex.in_degree(),
            vertex.out_degree(),
            "vertex {}",
            vertex.label()
        );
    }
    let total: usize = graph.vertices().map(|v| v.out_degree()).sum();
    assert_eq!(total, 2 * graph.insertions());
}

#[test]
fn test_unweighted_invariant_random() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph = Graph::new(rng.gen_bool(0.5), false);

    for _ in 0..300 {
        let from: u32 = rng.gen_range(0..25);
        let to: u32 = rng.gen_range(0..25);
        graph.add_edge(from, to, rng.gen_range(-50..50));
    }

    for vertex in graph.vertices() {
        assert!(vertex.neighbors().all(|(_, w)| w == 1));
    }
}

// ==================== Builder Tests ====================

#[test]
fn test_builder() {
    let graph = GraphBuilder::new()
        .edge("a", "b", 2)
        .edge("b", "c", 5)
        .oriented(true)
        .weighted(true)
        .build();

    assert!(graph.is_oriented());
    assert!(graph.is_weighted());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.weight(&"b", &"c"), Some(5));
    assert_eq!(graph.weight(&"c", &"b"), None);
}

#[test]
fn test_builder_defaults_to_undirected_unweighted() {
    let graph = GraphBuilder::new()
        .edges(vec![Edge::new(1, 2, 8), Edge::new(2, 3, 8)])
        .build();

    assert_eq!(graph.config(), GraphConfig::default());
    assert_eq!(graph.weight(&2, &1), Some(1));
}

#[test]
fn test_from_edges_and_extend() {
    let mut graph = Graph::from_edges(
        GraphConfig::new(true, true),
        vec![Edge::new("x", "y", 1)],
    );
    graph.extend(vec![Edge::new("y", "z", 2)]);

    let edges: Vec<Edge<&str>> = graph.edges().map(|e| Edge::new(*e.from, *e.to, e.weight)).collect();
    assert_eq!(edges, vec![Edge::new("x", "y", 1), Edge::new("y", "z", 2)]);
}

#[test]
fn test_mode_shorthands() {
    let directed: Graph<&str> = Graph::directed();
    assert_eq!(directed.config(), GraphConfig::new(true, true));

    let undirected: Graph<&str> = Graph::undirected();
    assert!(!undirected.is_oriented());
    assert!(undirected.is_weighted());
    assert_eq!(undirected.config().describe(), "undirected, weighted");
}

#[test]
fn test_config_serializes_flags() {
    let value = serde_json::to_value(GraphConfig::new(true, false)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "oriented": true, "weighted": false })
    );
}
