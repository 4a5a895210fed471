//! End-to-end tests for model queries and introspection.
//!
//! Covers lookups, adjacency queries, terminality, the string-or-node
//! reference polymorphism and the inspectable distance index.

use edgewise::{Edge, Error, Graph, GraphOptions, GraphSpec, Node, WeightMode};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A -> B -> C, with a second edge A -> C.
fn triangle() -> Graph {
    let spec = GraphSpec::new()
        .with_node(Node::new("A"))
        .with_node(Node::new("B"))
        .with_node(Node::new("C"))
        .with_edge(Edge::new("A->B", "A", "B").with_weight(1))
        .with_edge(Edge::new("B->C", "B", "C").with_weight(2))
        .with_edge(Edge::new("A->C", "A", "C").with_weight(9));

    Graph::build(
        spec,
        GraphOptions::new().with_weight_mode(WeightMode::weighted()),
    )
    .unwrap()
}

// ============================================================================
// 1. Node and edge lookups by name
// ============================================================================

#[test]
fn test_get_node_and_edge() {
    let graph = triangle();

    assert_eq!(graph.get_node("B"), Some(&Node::new("B")));
    assert_eq!(graph.get_node("Z"), None);

    let edge = graph.get_edge("A->C").unwrap();
    assert_eq!(edge.from, "A");
    assert_eq!(edge.to, "C");
    assert_eq!(graph.get_edge("C->A"), None);
}

// ============================================================================
// 2. Adjacency queries keep declaration order
// ============================================================================

#[test]
fn test_outbound_edges_in_declaration_order() {
    let graph = triangle();
    let names: Vec<&str> = graph
        .outbound_edges("A")
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["A->B", "A->C"]);
}

#[test]
fn test_inbound_edges_in_declaration_order() {
    let graph = triangle();
    let names: Vec<&str> = graph
        .inbound_edges("C")
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["B->C", "A->C"]);
    assert!(graph.inbound_edges("A").unwrap().is_empty());
}

// ============================================================================
// 3. Terminality
// ============================================================================

#[test]
fn test_is_terminal() {
    let graph = triangle();
    assert!(!graph.is_terminal("A").unwrap());
    assert!(!graph.is_terminal("B").unwrap());
    assert!(graph.is_terminal("C").unwrap());
}

// ============================================================================
// 4. Queries accept names and fetched nodes interchangeably
// ============================================================================

#[test]
fn test_node_ref_polymorphism() {
    let graph = triangle();
    let node = graph.get_node("B").unwrap();
    let owned = String::from("B");

    assert_eq!(
        graph.outbound_edges("B").unwrap(),
        graph.outbound_edges(node).unwrap()
    );
    assert_eq!(
        graph.outbound_edges(&owned).unwrap(),
        graph.outbound_edges(node).unwrap()
    );
    assert_eq!(
        graph.weight_of_path(node, "C").unwrap(),
        graph.weight_of_path("B", "C").unwrap()
    );
}

// ============================================================================
// 5. Unknown names are query-time errors
// ============================================================================

#[test]
fn test_unknown_names_error() {
    let graph = triangle();

    for result in [
        graph.outbound_edges("ghost").map(|_| ()),
        graph.inbound_edges("ghost").map(|_| ()),
        graph.is_terminal("ghost").map(|_| ()),
    ] {
        assert!(matches!(result.unwrap_err(), Error::NodeNotFound(name) if name == "ghost"));
    }
}

// ============================================================================
// 6. Introspection
// ============================================================================

#[test]
fn test_counts_and_flags() {
    let graph = triangle();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_directed());
    assert!(graph.is_weighted());
}

#[test]
fn test_to_spec_round_trips() {
    let graph = triangle();
    let spec = graph.to_spec();
    assert_eq!(spec.nodes, graph.nodes());
    assert_eq!(spec.edges, graph.edges());

    // The round-tripped structure is valid input again.
    let rebuilt = Graph::build(spec, GraphOptions::new()).unwrap();
    assert_eq!(rebuilt.node_count(), 3);
}

// ============================================================================
// 7. The distance index is inspectable and serializable
// ============================================================================

#[test]
fn test_distance_index_buckets() {
    let graph = triangle();
    let index = graph.distance_index();

    assert_eq!(index.len(), 3);
    let neighbors: Vec<&str> = index
        .bucket("A")
        .unwrap()
        .iter()
        .map(|entry| entry.neighbor.as_str())
        .collect();
    assert_eq!(neighbors, vec!["B", "C"]);

    // Terminal node: empty bucket, not a missing one.
    assert_eq!(index.bucket("C"), Some(&[][..]));
    assert_eq!(index.bucket("ghost"), None);
}

#[test]
fn test_distance_index_iterates_every_bucket() {
    let graph = triangle();
    let index = graph.distance_index();

    let mut names: Vec<&str> = index.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A", "B", "C"]);

    // Each iterated bucket is the same slice `bucket()` hands out.
    for (name, bucket) in index.iter() {
        assert_eq!(index.bucket(name), Some(bucket));
    }
}

#[test]
fn test_distance_index_serializes() {
    let graph = triangle();
    let value = serde_json::to_value(graph.distance_index()).unwrap();
    assert_eq!(
        value["buckets"]["B"],
        json!([{ "neighbor": "C", "cost": 2.0 }])
    );
}
