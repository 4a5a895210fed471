//! Borrowed node reference accepted by query methods.

use super::Node;

/// Either a node name or a previously fetched [`Node`].
///
/// Query methods take `impl Into<NodeRef>` so callers can pass `"A"`,
/// `&String`, or `&Node` interchangeably. Only the name is consulted.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Name(&'a str),
    Node(&'a Node),
}

impl NodeRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            NodeRef::Name(name) => name,
            NodeRef::Node(node) => &node.name,
        }
    }
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(name: &'a str) -> Self {
        NodeRef::Name(name)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(name: &'a String) -> Self {
        NodeRef::Name(name)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        NodeRef::Node(node)
    }
}
