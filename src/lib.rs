//! # edgewise — Declarative Named Graphs with Weighted Path Queries
//!
//! Build an immutable graph from a declarative structure, get structural
//! validation, an eagerly built distance index and cheapest-path weight
//! queries in return.
//!
//! ## Design Principles
//!
//! 1. **Fail at the door**: construction validates the structure and resolves
//!    every edge cost; a `Graph` in hand cannot fail structurally
//! 2. **Clean DTOs**: `Node`, `Edge`, `GraphSpec` cross all boundaries
//! 3. **Strategy at the seam**: `CostStrategy` is the contract between edge
//!    payloads and the search
//! 4. **Index once**: the `DistanceIndex` is built eagerly and queries borrow
//!
//! ## Quick Start
//!
//! ```rust
//! use edgewise::{Edge, Graph, GraphOptions, GraphSpec, Node, WeightMode};
//!
//! # fn main() -> edgewise::Result<()> {
//! let spec = GraphSpec::new()
//!     .with_node(Node::new("A"))
//!     .with_node(Node::new("B"))
//!     .with_node(Node::new("C"))
//!     .with_edge(Edge::new("A->B", "A", "B").with_weight(10))
//!     .with_edge(Edge::new("B->C", "B", "C").with_weight(5));
//!
//! let graph = Graph::build(
//!     spec,
//!     GraphOptions::new().with_weight_mode(WeightMode::weighted()),
//! )?;
//!
//! assert_eq!(graph.weight_of_path("A", "C")?, 15.0);
//! assert_eq!(graph.weight_of_path("C", "A")?, -1.0); // unreachable
//! # Ok(())
//! # }
//! ```
//!
//! Raw JSON structures go through [`Graph::from_value`], which adds a
//! pluggable shape check in front of the structural validation.
//!
//! ## Validation
//!
//! Checks run in order; the first failing check reports all its offenders:
//!
//! | # | Check | Violation |
//! |---|-------|-----------|
//! | 1 | shape of the raw JSON (untyped path only) | `Shape` |
//! | 2 | node-name uniqueness | `DuplicateNodeName` |
//! | 3 | edge-name uniqueness | `DuplicateEdgeName` |
//! | 4 | every edge endpoint names a declared node | `HangingEdge` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod validate;
pub mod weight;
pub mod index;
pub mod route;

use serde_json::Value as JsonValue;
use tracing::{debug, trace};

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Edge, GraphSpec, Node, NodeRef, Value};

// ============================================================================
// Re-exports: Validation
// ============================================================================

pub use validate::shape::{DefaultShapeValidator, ShapeValidator, ShapeViolation};
pub use validate::{ValidationFailure, Violation};

// ============================================================================
// Re-exports: Weights
// ============================================================================

pub use weight::{CostStrategy, EdgeInput, WeightMode, WeightResolver};

// ============================================================================
// Re-exports: Index and path weights
// ============================================================================

pub use index::{DistanceEntry, DistanceIndex};
pub use route::NO_WEIGHT;

// ============================================================================
// Construction options
// ============================================================================

/// Construction-time knobs: orientation metadata and weight mode.
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    pub directed: bool,
    pub weight_mode: WeightMode,
}

impl GraphOptions {
    /// Undirected, unweighted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_weight_mode(mut self, weight_mode: WeightMode) -> Self {
        self.weight_mode = weight_mode;
        self
    }
}

// ============================================================================
// Top-level Graph
// ============================================================================

/// The primary entry point. A validated, immutable named graph with its
/// distance index.
///
/// Construction is the only fallible boundary. Queries never mutate, and
/// methods that look up a node take `impl Into<NodeRef>`, so a name or a
/// previously fetched [`Node`] both work.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    directed: bool,
    mode: WeightMode,
    index: DistanceIndex,
}

impl Graph {
    /// Build from a typed structure.
    ///
    /// Runs the structural checks, then materializes the distance index.
    /// In weighted mode that resolves every edge cost up front, so a
    /// non-numeric weight (under the default rule) or a failing cost
    /// strategy rejects the graph here instead of surfacing mid-query.
    pub fn build(spec: GraphSpec, options: GraphOptions) -> Result<Self> {
        validate::validate(&spec)?;
        Self::assemble(spec, options)
    }

    /// Build from a raw JSON structure with the built-in shape check.
    ///
    /// `weighted` is a loosely-typed flag: `false`, `null`, `""` and `0`
    /// leave the graph unweighted, anything else selects weighted mode
    /// with the default numeric rule (see [`WeightMode::from_flag`]).
    pub fn from_value(structure: &JsonValue, directed: bool, weighted: &JsonValue) -> Result<Self> {
        Self::from_value_with_shape(structure, directed, weighted, &DefaultShapeValidator)
    }

    /// Build from a raw JSON structure with a caller-supplied shape check.
    pub fn from_value_with_shape(
        structure: &JsonValue,
        directed: bool,
        weighted: &JsonValue,
        shape: &dyn ShapeValidator,
    ) -> Result<Self> {
        let spec = validate::validate_value(structure, shape)?;
        let options = GraphOptions { directed, weight_mode: WeightMode::from_flag(weighted) };
        Self::assemble(spec, options)
    }

    fn assemble(spec: GraphSpec, options: GraphOptions) -> Result<Self> {
        debug!(
            nodes = spec.nodes.len(),
            edges = spec.edges.len(),
            weighted = options.weight_mode.is_weighted(),
            "graph structure validated"
        );

        let mut graph = Self {
            nodes: spec.nodes,
            edges: spec.edges,
            directed: options.directed,
            mode: options.weight_mode,
            index: DistanceIndex::default(),
        };
        graph.index = DistanceIndex::build(&graph)?;
        trace!(index = ?graph.index, "distance index built");
        Ok(graph)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// The node with this exact name, if declared.
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// The edge with this exact name, if declared.
    pub fn get_edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.name == name)
    }

    /// Edges leaving the node, in declaration order.
    pub fn outbound_edges<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&Edge>> {
        let node = self.resolve(node.into())?;
        Ok(self.outbound_of(&node.name).collect())
    }

    /// Edges arriving at the node, in declaration order.
    pub fn inbound_edges<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&Edge>> {
        let node = self.resolve(node.into())?;
        Ok(self.edges.iter().filter(|e| e.to == node.name).collect())
    }

    /// Whether the node has no outbound edges.
    pub fn is_terminal<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<bool> {
        let node = self.resolve(node.into())?;
        Ok(self.index.bucket(&node.name).is_none_or(|bucket| bucket.is_empty()))
    }

    // ========================================================================
    // Path weights
    // ========================================================================

    /// Weight of the cheapest path from one node to another.
    ///
    /// On an unweighted graph this is always [`NO_WEIGHT`], before any
    /// name resolution, so even unknown names answer `-1.0` rather than
    /// erroring. On a weighted graph both names must resolve; then a
    /// direct edge answers first, a search runs otherwise, and an
    /// unreachable target answers [`NO_WEIGHT`].
    pub fn weight_of_path<'a>(
        &self,
        from: impl Into<NodeRef<'a>>,
        to: impl Into<NodeRef<'a>>,
    ) -> Result<f64> {
        if !self.mode.is_weighted() {
            return Ok(NO_WEIGHT);
        }
        let from = self.resolve(from.into())?;
        let to = self.resolve(to.into())?;
        Ok(route::weight_between(self, &from.name, &to.name))
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Declared nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Declared edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Orientation metadata as declared at construction. Every query
    /// follows an edge's declared `from -> to` direction either way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.mode.is_weighted()
    }

    pub fn weight_mode(&self) -> &WeightMode {
        &self.mode
    }

    /// The adjacency-with-costs index built at construction.
    pub fn distance_index(&self) -> &DistanceIndex {
        &self.index
    }

    /// Clone the graph back into its declarative form.
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec { nodes: self.nodes.clone(), edges: self.edges.clone() }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn resolve(&self, node: NodeRef<'_>) -> Result<&Node> {
        let name = node.name();
        self.get_node(name).ok_or_else(|| Error::NodeNotFound(name.to_owned()))
    }

    /// Infallible outbound scan by raw name; unknown names yield nothing.
    pub(crate) fn outbound_of<'g>(&'g self, name: &'g str) -> impl Iterator<Item = &'g Edge> {
        self.edges.iter().filter(move |e| e.from == name)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cost strategy error: {0}")]
    Strategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
