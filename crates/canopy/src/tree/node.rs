//! A single vertex of the store's tree

use indexmap::IndexMap;

use crate::listener::{DescendantListenerFn, SelfListenerFn};
use crate::value::Value;

/// Identity of a node within one store.
///
/// An index into the store's node arena. Ids are never reused because
/// nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every store.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in creation order (the root is 0).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree vertex: its place in the hierarchy, its value and its listeners.
#[derive(Default)]
pub(crate) struct Node {
    /// Segment this node was created under (empty for the root)
    pub name: String,

    /// Non-owning link upward; `None` only for the root
    pub parent: Option<NodeId>,

    /// Children by segment name, in creation order
    pub children: IndexMap<String, NodeId>,

    /// `None` until first written
    pub value: Option<Value>,

    pub self_listeners: Vec<SelfListenerFn>,

    pub descendant_listeners: Vec<DescendantListenerFn>,
}

impl Node {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child_of(parent: NodeId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent),
            ..Default::default()
        }
    }
}
