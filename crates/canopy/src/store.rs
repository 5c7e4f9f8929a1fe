//! The observable store: path resolution, reads, writes and dispatch

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::handle::Handle;
use crate::listener::{Listener, ListenerKind};
use crate::tree::{NodeId, Tree};
use crate::value::Value;

struct Inner {
    tree: RefCell<Tree>,
    config: StoreConfig,
    /// Number of dispatches currently on the call stack
    depth: Cell<usize>,
}

/// A path-addressed observable data store.
///
/// `Store` is a cheap-to-clone handle; clones share the same tree. It is
/// single-threaded (`!Send`), and every operation runs to completion on
/// the caller's stack. Listeners may call back into the store (read, write
/// or subscribe on any path) while a dispatch is in progress.
///
/// # Dispatch
///
/// `set(path, value)` commits the value, then runs:
///
/// 1. the written node's self listeners, in registration order;
/// 2. the descendant listeners of each ancestor, from the parent up to the
///    root, each receiving the value and the full written path.
///
/// The listeners that run are the ones registered when the write was
/// committed. A listener registered during a dispatch first hears about
/// the next write.
///
/// A panicking listener unwinds out of `set`; the remaining listeners of
/// that write are skipped, the value stays committed and the store
/// remains usable.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use canopy::{Store, Value};
///
/// let store = Store::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let log = seen.clone();
/// store.child_changed("", move |value, path| {
///     log.borrow_mut().push(format!("{path} = {value}"));
/// });
///
/// store.set("hello", "world");
/// store.set("hello.thing", 3);
///
/// assert_eq!(store.get("hello"), Some(Value::from("world")));
/// assert_eq!(*seen.borrow(), vec!["hello = world", "hello.thing = 3"]);
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

/// A non-owning reference to a [`Store`].
///
/// Listeners stored inside a store that need to write back into it should
/// capture a `WeakStore` so the store and its listeners do not keep each
/// other alive.
#[derive(Clone)]
pub struct WeakStore {
    inner: Weak<Inner>,
}

impl WeakStore {
    /// Get the store back, if it is still alive.
    pub fn upgrade(&self) -> Option<Store> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl fmt::Debug for WeakStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakStore(alive: {})", self.inner.strong_count() > 0)
    }
}

/// Marks one dispatch as in progress; restores the depth on drop, including
/// when a listener panics.
struct DispatchGuard<'a> {
    depth: &'a Cell<usize>,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with an explicit configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                tree: RefCell::new(Tree::new()),
                config,
                depth: Cell::new(0),
            }),
        }
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> StoreConfig {
        self.inner.config
    }

    /// Create a non-owning reference to this store.
    pub fn downgrade(&self) -> WeakStore {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Check whether two handles share the same tree.
    pub fn ptr_eq(&self, other: &Store) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Core Primitives
    // ═══════════════════════════════════════════════════════════════════

    /// Map a path to its node.
    ///
    /// With `create_if_missing`, every missing segment is created in order
    /// and a node is always returned. Without it, a missing segment yields
    /// `None` and nothing is created.
    pub fn resolve(&self, path: &str, create_if_missing: bool) -> Option<NodeId> {
        self.inner
            .tree
            .borrow_mut()
            .resolve(path, create_if_missing)
    }

    /// Read the value at a path.
    ///
    /// Returns `None` if the node does not exist or has never been set.
    /// Never creates nodes.
    pub fn get(&self, path: &str) -> Option<Value> {
        let tree = self.inner.tree.borrow();
        tree.find(path).and_then(|id| tree.value(id).cloned())
    }

    /// Write a value at a path and notify listeners.
    ///
    /// Missing segments are created. Writing a value equal to the current
    /// one still notifies.
    ///
    /// # Panics
    ///
    /// Panics only when the store was configured with a
    /// [`StoreConfig::max_dispatch_depth`] and listeners nest writes past
    /// it. The default configuration has no limit. Use [`Store::try_set`]
    /// to get an error instead.
    pub fn set(&self, path: &str, value: impl Into<Value>) {
        if let Err(err) = self.try_set(path, value) {
            panic!("{err}");
        }
    }

    /// Write a value at a path and notify listeners, refusing writes that
    /// would exceed the dispatch depth limit.
    ///
    /// A refused write creates no nodes and changes no value.
    pub fn try_set(&self, path: &str, value: impl Into<Value>) -> Result<()> {
        let guard = self.enter_dispatch(path)?;
        let id = self.inner.tree.borrow_mut().find_or_create(path);
        self.dispatch(&guard, id, path, value.into());
        Ok(())
    }

    /// Register a listener at a path, creating the path if missing.
    pub fn subscribe(&self, path: &str, listener: Listener) {
        let id = self.inner.tree.borrow_mut().find_or_create(path);
        self.subscribe_node(id, path, listener);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Path-Keyed Façade
    // ═══════════════════════════════════════════════════════════════════

    /// Call `f` with the new value whenever the node at `path` is set.
    pub fn changed(&self, path: &str, f: impl Fn(&Value) + 'static) {
        self.subscribe(path, Listener::on_self(f));
    }

    /// Call `f` with the value and written path whenever any node beneath
    /// `path`, at any depth, is set.
    pub fn child_changed(&self, path: &str, f: impl Fn(&Value, &str) + 'static) {
        self.subscribe(path, Listener::on_descendant(f));
    }

    /// Get a chainable handle bound to `path`, creating it if missing.
    pub fn at(&self, path: &str) -> Handle {
        let id = self.inner.tree.borrow_mut().find_or_create(path);
        Handle::new(self.clone(), id, path)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Check whether a node exists at `path`. Never creates nodes.
    pub fn contains(&self, path: &str) -> bool {
        self.inner.tree.borrow().find(path).is_some()
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.inner.tree.borrow().len()
    }

    /// Number of listeners of one kind registered at `path`.
    ///
    /// Missing paths have none and are not created.
    pub fn listener_count(&self, path: &str, kind: ListenerKind) -> usize {
        let tree = self.inner.tree.borrow();
        tree.find(path)
            .map(|id| tree.listener_count(id, kind))
            .unwrap_or(0)
    }

    /// Segment names of the children of `path`, in creation order.
    pub fn children(&self, path: &str) -> Vec<String> {
        let tree = self.inner.tree.borrow();
        tree.find(path)
            .map(|id| tree.child_names(id))
            .unwrap_or_default()
    }

    /// Full paths of every node that holds a value, depth-first.
    pub fn paths(&self) -> Vec<String> {
        self.inner.tree.borrow().valued_paths()
    }

    /// Current nesting depth of dispatches (0 outside any `set`).
    pub fn dispatch_depth(&self) -> usize {
        self.inner.depth.get()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Node-Level Operations (used by Handle)
    // ═══════════════════════════════════════════════════════════════════

    pub(crate) fn child_node(&self, parent: NodeId, segment: &str) -> NodeId {
        self.inner
            .tree
            .borrow_mut()
            .child_or_create(parent, segment)
    }

    pub(crate) fn value_of(&self, id: NodeId) -> Option<Value> {
        self.inner.tree.borrow().value(id).cloned()
    }

    pub(crate) fn try_set_node(&self, id: NodeId, path: &str, value: Value) -> Result<()> {
        let guard = self.enter_dispatch(path)?;
        self.dispatch(&guard, id, path, value);
        Ok(())
    }

    pub(crate) fn subscribe_node(&self, id: NodeId, path: &str, listener: Listener) {
        tracing::trace!(path, kind = ?listener.kind(), "subscribed");
        self.inner.tree.borrow_mut().add_listener(id, listener);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Dispatch
    // ═══════════════════════════════════════════════════════════════════

    fn enter_dispatch(&self, path: &str) -> Result<DispatchGuard<'_>> {
        let depth = self.inner.depth.get();
        if let Some(max) = self
            .inner
            .config
            .max_dispatch_depth
            .filter(|&max| depth >= max)
        {
            tracing::warn!(path, depth, max, "dispatch depth exceeded, write refused");
            return Err(StoreError::DispatchDepthExceeded { depth, max });
        }
        self.inner.depth.set(depth + 1);
        Ok(DispatchGuard {
            depth: &self.inner.depth,
        })
    }

    /// Commit `value` at `id`, then run the listeners captured at commit.
    ///
    /// No tree borrow is held while listeners run.
    fn dispatch(&self, _guard: &DispatchGuard<'_>, id: NodeId, path: &str, value: Value) {
        let plan = self.inner.tree.borrow_mut().commit(id, value.clone());
        tracing::debug!(
            path,
            self_listeners = plan.self_listeners.len(),
            descendant_listeners = plan.descendant_listeners.len(),
            depth = self.inner.depth.get(),
            "set"
        );

        for listener in &plan.self_listeners {
            listener(&value);
        }
        for listener in &plan.descendant_listeners {
            listener(&value, path);
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("nodes", &self.node_count())
            .field("config", &self.inner.config)
            .finish()
    }
}
