//! Listener kinds and callback types

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Callback fired when a node's own value is set.
pub type SelfListenerFn = Rc<dyn Fn(&Value)>;

/// Callback fired when a node strictly beneath the subscribed one is set.
///
/// Receives the written value and the full path that was written.
pub type DescendantListenerFn = Rc<dyn Fn(&Value, &str)>;

/// Which list a subscription lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Fires for writes to the subscribed node itself
    SelfChanged,

    /// Fires for writes at any depth beneath the subscribed node
    DescendantChanged,
}

/// A callback of either kind, as accepted by
/// [`Store::subscribe`](crate::Store::subscribe).
#[derive(Clone)]
pub enum Listener {
    /// Self listener
    SelfChanged(SelfListenerFn),

    /// Descendant listener
    DescendantChanged(DescendantListenerFn),
}

impl Listener {
    /// Wrap a self listener callback.
    pub fn on_self(f: impl Fn(&Value) + 'static) -> Self {
        Listener::SelfChanged(Rc::new(f))
    }

    /// Wrap a descendant listener callback.
    pub fn on_descendant(f: impl Fn(&Value, &str) + 'static) -> Self {
        Listener::DescendantChanged(Rc::new(f))
    }

    /// The list this listener belongs in.
    pub fn kind(&self) -> ListenerKind {
        match self {
            Listener::SelfChanged(_) => ListenerKind::SelfChanged,
            Listener::DescendantChanged(_) => ListenerKind::DescendantChanged,
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:?})", self.kind())
    }
}
