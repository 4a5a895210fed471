//! The declarative structure a graph is built from.

use serde::{Deserialize, Serialize};
use super::{Edge, Node};

/// Node and edge declarations, in declaration order.
///
/// This is plain data with no invariants of its own. A `GraphSpec` may
/// hold duplicate names or edges pointing nowhere; [`crate::Graph::build`]
/// is where those are rejected. Deserializes from the canonical JSON form:
///
/// ```json
/// {
///   "nodes": [ { "name": "A" } ],
///   "edges": [ { "name": "A->B", "from": "A", "to": "B", "weight": 10 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }
}
