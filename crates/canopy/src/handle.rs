//! Fluent per-path handle

use std::fmt;

use crate::error::{Result, StoreError};
use crate::listener::Listener;
use crate::path;
use crate::store::Store;
use crate::tree::NodeId;
use crate::value::Value;

/// A handle bound to one node of a [`Store`].
///
/// Obtained from [`Store::at`], which creates the node if it is missing.
/// Mutating calls return the handle so they can be chained; a `set` in the
/// middle of a chain dispatches before the next call runs, so listeners
/// registered earlier in the chain hear it.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use canopy::{Store, Value};
///
/// let store = Store::new();
/// let calls = Rc::new(Cell::new(0));
///
/// let counter = calls.clone();
/// let handle = store
///     .at("hello")
///     .changed(move |_| counter.set(counter.get() + 1))
///     .set("planet");
///
/// assert_eq!(calls.get(), 1);
/// assert_eq!(handle.get(), Some(Value::from("planet")));
/// ```
#[derive(Clone)]
pub struct Handle {
    store: Store,
    id: NodeId,
    path: String,
}

impl Handle {
    pub(crate) fn new(store: Store, id: NodeId, path: impl Into<String>) -> Self {
        Self {
            store,
            id,
            path: path.into(),
        }
    }

    /// The path this handle was created with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The node this handle is bound to.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The store this handle belongs to.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current value of the node, `None` if never set.
    pub fn get(&self) -> Option<Value> {
        self.store.value_of(self.id)
    }

    /// Current value converted to `T`.
    ///
    /// `Ok(None)` if the node was never set; an error if the value is not
    /// a `T`.
    pub fn get_as<T>(&self) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = StoreError>,
    {
        self.get().map(T::try_from).transpose()
    }

    /// Write a value and notify listeners, then return the handle.
    ///
    /// Listeners see the path this handle was created with.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Store::set`].
    pub fn set(self, value: impl Into<Value>) -> Self {
        if let Err(err) = self.try_set(value) {
            panic!("{err}");
        }
        self
    }

    /// Write a value, refusing writes beyond the dispatch depth limit.
    pub fn try_set(&self, value: impl Into<Value>) -> Result<()> {
        self.store.try_set_node(self.id, &self.path, value.into())
    }

    /// Register a self listener and return the handle.
    pub fn changed(self, f: impl Fn(&Value) + 'static) -> Self {
        self.store
            .subscribe_node(self.id, &self.path, Listener::on_self(f));
        self
    }

    /// Register a descendant listener and return the handle.
    pub fn child_changed(self, f: impl Fn(&Value, &str) + 'static) -> Self {
        self.store
            .subscribe_node(self.id, &self.path, Listener::on_descendant(f));
        self
    }

    /// Get a handle for a direct child, creating it if missing.
    ///
    /// The child is found from this handle's node, so an empty segment
    /// beneath the root yields that empty-named child, whose path string
    /// is `""` like the root's.
    pub fn child(&self, segment: &str) -> Handle {
        let id = self.store.child_node(self.id, segment);
        Handle::new(self.store.clone(), id, path::join(&self.path, segment))
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("path", &self.path)
            .field("id", &self.id)
            .finish()
    }
}
