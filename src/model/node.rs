//! Node in the named graph.

use serde::{Deserialize, Serialize};

/// A named node.
///
/// The name doubles as the node's identity: construction rejects a
/// structure that declares the same name twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
