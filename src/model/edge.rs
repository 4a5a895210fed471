//! Directed edge between two named nodes.

use serde::{Deserialize, Serialize};
use super::Value;

/// A named edge from one node to another.
///
/// `from` and `to` are node names; whether an edge that references an
/// undeclared name is an error is decided at graph construction, not here.
/// The `weight` payload is free-form data. It only has to be numeric when
/// the graph is weighted and no custom cost strategy is installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub weight: Value,
}

impl Edge {
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            weight: Value::Null,
        }
    }

    pub fn with_weight(mut self, weight: impl Into<Value>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Given one endpoint name, return the other (useful for traversal).
    pub fn other_end(&self, name: &str) -> Option<&str> {
        if self.from == name {
            Some(&self.to)
        } else if self.to == name {
            Some(&self.from)
        } else {
            None
        }
    }
}
