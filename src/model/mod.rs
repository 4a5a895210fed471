//! # Graph Model
//!
//! Clean DTOs that define the named graph: nodes, edges, the declarative
//! structure they arrive in, and the weight payload they carry.
//! These types cross every boundary: validation ↔ index ↔ queries ↔ user.
//!
//! This module is pure data and performs no validation. A `GraphSpec` can
//! describe a malformed graph; [`crate::Graph::build`] is the gate.

pub mod edge;
pub mod node;
pub mod node_ref;
pub mod structure;
pub mod value;

pub use edge::Edge;
pub use node::Node;
pub use node_ref::NodeRef;
pub use structure::GraphSpec;
pub use value::Value;
