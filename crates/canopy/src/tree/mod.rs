//! Node arena: path resolution and structural queries
//!
//! The tree owns every node in a flat `Vec`. Parent links and child maps
//! hold [`NodeId`] indices, so ownership runs one way (arena → node) and
//! upward traversal never needs a back-pointer.

mod node;

pub use node::NodeId;
use node::Node;

use crate::listener::{DescendantListenerFn, Listener, ListenerKind, SelfListenerFn};
use crate::path;
use crate::value::Value;

/// Listeners captured for one write, in the order they must run.
pub(crate) struct DispatchPlan {
    pub self_listeners: Vec<SelfListenerFn>,
    /// Ancestor descendant listeners, nearest ancestor first
    pub descendant_listeners: Vec<DescendantListenerFn>,
}

/// The node hierarchy of a store.
pub(crate) struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // ═══════════════════════════════════════════════════════════════════
    // Resolution
    // ═══════════════════════════════════════════════════════════════════

    /// Find the node at `path` without creating anything.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        path::segments(path).try_fold(NodeId::ROOT, |current, segment| {
            self.node(current).children.get(segment).copied()
        })
    }

    /// Find the node at `path`, creating missing segments along the way.
    pub fn find_or_create(&mut self, path: &str) -> NodeId {
        path::segments(path).fold(NodeId::ROOT, |current, segment| {
            self.child_or_create(current, segment)
        })
    }

    /// Find the direct child `segment` of `parent`, creating it if missing.
    pub fn child_or_create(&mut self, parent: NodeId, segment: &str) -> NodeId {
        let existing = self.node(parent).children.get(segment).copied();
        match existing {
            Some(child) => child,
            None => self.create_child(parent, segment),
        }
    }

    /// Resolve a path, optionally creating missing segments.
    pub fn resolve(&mut self, path: &str, create_if_missing: bool) -> Option<NodeId> {
        if create_if_missing {
            Some(self.find_or_create(path))
        } else {
            self.find(path)
        }
    }

    fn create_child(&mut self, parent: NodeId, segment: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::child_of(parent, segment));
        self.node_mut(parent).children.insert(segment.to_string(), id);
        tracing::trace!(segment, parent = parent.0, id = id.0, "created node");
        id
    }

    // ═══════════════════════════════════════════════════════════════════
    // Values and Listeners
    // ═══════════════════════════════════════════════════════════════════

    pub fn value(&self, id: NodeId) -> Option<&Value> {
        self.node(id).value.as_ref()
    }

    /// Store a value and capture the listeners that must hear about it.
    ///
    /// The plan is taken after the value is committed and before any
    /// listener runs, so later registrations never join this dispatch.
    pub fn commit(&mut self, id: NodeId, value: Value) -> DispatchPlan {
        self.node_mut(id).value = Some(value);

        let self_listeners = self.node(id).self_listeners.clone();
        let mut descendant_listeners = Vec::new();
        let mut ancestor = self.node(id).parent;
        while let Some(current) = ancestor {
            let node = self.node(current);
            descendant_listeners.extend(node.descendant_listeners.iter().cloned());
            ancestor = node.parent;
        }

        DispatchPlan {
            self_listeners,
            descendant_listeners,
        }
    }

    pub fn add_listener(&mut self, id: NodeId, listener: Listener) {
        let node = self.node_mut(id);
        match listener {
            Listener::SelfChanged(f) => node.self_listeners.push(f),
            Listener::DescendantChanged(f) => node.descendant_listeners.push(f),
        }
    }

    pub fn listener_count(&self, id: NodeId, kind: ListenerKind) -> usize {
        let node = self.node(id);
        match kind {
            ListenerKind::SelfChanged => node.self_listeners.len(),
            ListenerKind::DescendantChanged => node.descendant_listeners.len(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn child_names(&self, id: NodeId) -> Vec<String> {
        self.node(id).children.keys().cloned().collect()
    }

    /// Full path of a node, rebuilt by walking its parents.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            names.push(self.node(current).name.as_str());
            current = parent;
        }
        names.reverse();
        names.join(".")
    }

    /// Paths of every node holding a value, depth-first in creation order.
    pub fn valued_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.value.is_some() {
                paths.push(self.path_of(id));
            }
            stack.extend(node.children.values().rev().copied());
        }
        paths
    }
}
