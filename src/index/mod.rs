//! # Distance Index
//!
//! Eagerly built adjacency-with-costs lookup, one bucket per node:
//!
//! | node | bucket |
//! |------|--------|
//! | `"A"` | `[{neighbor: "B", cost: 10.0}, {neighbor: "C", cost: 2.0}]` |
//! | `"B"` | `[]` |
//!
//! Buckets keep the declaration order of the edges they came from; path
//! search relies on that order for deterministic tie-breaking. A terminal
//! node owns an empty bucket, which is not the same thing as the missing
//! bucket of an unknown name.
//!
//! In unweighted graphs the index still materializes (the adjacency is
//! useful on its own) but every cost is [`crate::route::NO_WEIGHT`],
//! since weights are never resolved in that mode.

use hashbrown::HashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::route::NO_WEIGHT;
use crate::{Graph, Result};

/// Most nodes in declarative graphs fan out to a handful of neighbors.
type Bucket = SmallVec<[DistanceEntry; 4]>;

/// One outbound hop: the neighboring node and what it costs to get there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub neighbor: String,
    pub cost: f64,
}

/// Per-node buckets of `{neighbor, cost}` pairs, built once at
/// construction and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DistanceIndex {
    buckets: HashMap<String, Bucket>,
}

impl DistanceIndex {
    /// Build the index for a fully validated graph.
    ///
    /// Nodes are visited in declaration order and each bucket mirrors the
    /// declaration order of its outbound edges. In weighted mode every
    /// edge cost resolves here, so a bad weight fails construction rather
    /// than a later query.
    pub(crate) fn build(graph: &Graph) -> Result<Self> {
        let resolver = graph.weight_mode().resolver();
        let mut buckets = HashMap::with_capacity(graph.nodes().len());

        for node in graph.nodes() {
            if buckets.contains_key(node.name.as_str()) {
                continue;
            }
            let mut bucket = Bucket::new();
            for edge in graph.outbound_of(&node.name) {
                let cost = match &resolver {
                    Some(resolver) => resolver.resolve(edge)?,
                    None => NO_WEIGHT,
                };
                bucket.push(DistanceEntry { neighbor: edge.to.clone(), cost });
            }
            buckets.insert(node.name.clone(), bucket);
        }

        Ok(Self { buckets })
    }

    /// The bucket for a node name; `None` if the name is unknown.
    ///
    /// An empty slice means the node exists and is terminal.
    pub fn bucket(&self, node: &str) -> Option<&[DistanceEntry]> {
        self.buckets.get(node).map(|b| b.as_slice())
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate `(node, bucket)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DistanceEntry])> {
        self.buckets.iter().map(|(name, bucket)| (name.as_str(), bucket.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, GraphSpec, Node};
    use crate::weight::WeightMode;
    use crate::GraphOptions;
    use pretty_assertions::assert_eq;

    fn diamond() -> GraphSpec {
        GraphSpec::new()
            .with_node(Node::new("A"))
            .with_node(Node::new("B"))
            .with_node(Node::new("C"))
            .with_node(Node::new("D"))
            .with_edge(Edge::new("A->B", "A", "B").with_weight(1))
            .with_edge(Edge::new("A->C", "A", "C").with_weight(2))
            .with_edge(Edge::new("B->D", "B", "D").with_weight(3))
            .with_edge(Edge::new("C->D", "C", "D").with_weight(4))
    }

    fn weighted() -> GraphOptions {
        GraphOptions::new().with_weight_mode(WeightMode::weighted())
    }

    #[test]
    fn test_every_node_gets_a_bucket() {
        let graph = Graph::build(diamond(), weighted()).unwrap();
        let index = graph.distance_index();

        assert_eq!(index.len(), 4);
        for name in ["A", "B", "C", "D"] {
            assert!(index.bucket(name).is_some(), "missing bucket for {name}");
        }
    }

    #[test]
    fn test_terminal_bucket_is_empty_not_absent() {
        let graph = Graph::build(diamond(), weighted()).unwrap();
        let index = graph.distance_index();

        assert_eq!(index.bucket("D"), Some(&[][..]));
        assert_eq!(index.bucket("Z"), None);
    }

    #[test]
    fn test_buckets_follow_edge_declaration_order() {
        let graph = Graph::build(diamond(), weighted()).unwrap();
        let bucket = graph.distance_index().bucket("A").unwrap();

        assert_eq!(
            bucket,
            &[
                DistanceEntry { neighbor: "B".into(), cost: 1.0 },
                DistanceEntry { neighbor: "C".into(), cost: 2.0 },
            ]
        );
    }

    #[test]
    fn test_unweighted_buckets_carry_no_weight() {
        let graph = Graph::build(diamond(), GraphOptions::new()).unwrap();
        let bucket = graph.distance_index().bucket("A").unwrap();

        assert_eq!(bucket.len(), 2);
        assert!(bucket.iter().all(|entry| entry.cost == NO_WEIGHT));
    }

    #[test]
    fn test_unweighted_build_never_reads_weights() {
        let spec = GraphSpec::new()
            .with_node(Node::new("A"))
            .with_node(Node::new("B"))
            .with_edge(Edge::new("A->B", "A", "B").with_weight("not a number"));

        // Would fail in weighted mode; unweighted must not care.
        assert!(Graph::build(spec.clone(), weighted()).is_err());
        assert!(Graph::build(spec, GraphOptions::new()).is_ok());
    }

    #[test]
    fn test_parallel_edges_make_repeated_entries() {
        let spec = GraphSpec::new()
            .with_node(Node::new("A"))
            .with_node(Node::new("B"))
            .with_edge(Edge::new("fast", "A", "B").with_weight(1))
            .with_edge(Edge::new("slow", "A", "B").with_weight(9));

        let graph = Graph::build(spec, weighted()).unwrap();
        let bucket = graph.distance_index().bucket("A").unwrap();
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].cost, 1.0);
        assert_eq!(bucket[1].cost, 9.0);
    }

    #[test]
    fn test_debug_dump_lists_buckets() {
        let graph = Graph::build(diamond(), weighted()).unwrap();
        let dump = format!("{:?}", graph.distance_index());

        assert!(dump.contains("buckets"), "missing bucket map: {dump}");
        assert!(dump.contains(r#"neighbor: "B""#), "missing entries: {dump}");
    }

    #[test]
    fn test_index_serializes_to_json() {
        let spec = GraphSpec::new()
            .with_node(Node::new("A"))
            .with_node(Node::new("B"))
            .with_edge(Edge::new("A->B", "A", "B").with_weight(10));

        let graph = Graph::build(spec, weighted()).unwrap();
        let json = serde_json::to_value(graph.distance_index()).unwrap();
        assert_eq!(
            json["buckets"]["A"],
            serde_json::json!([{ "neighbor": "B", "cost": 10.0 }])
        );
    }
}
