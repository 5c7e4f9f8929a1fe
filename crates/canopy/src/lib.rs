//! # Canopy
//!
//! An in-process, path-addressed observable data store.
//!
//! Values live at dot-delimited paths (`"a.b.c"`) in a tree of nodes that
//! is created lazily as paths are written or subscribed to. Callers can
//! listen for changes to a node's own value, or for changes anywhere
//! beneath it.
//!
//! ## Architecture
//!
//! - **Tree**: an arena of nodes indexed by [`NodeId`]; parents are
//!   indices, children are owned by the arena
//! - **Store**: resolve, get, set and subscribe, plus synchronous dispatch
//! - **Handle**: a fluent, chainable view of one path
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use canopy::Store;
//!
//! let store = Store::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! store.set("hello", "world");
//!
//! let (own, below) = (log.clone(), log.clone());
//! store
//!     .at("hello")
//!     .changed(move |value| own.borrow_mut().push(format!("changed to {value}")))
//!     .child_changed(move |value, path| below.borrow_mut().push(format!("{path} changed to {value}")));
//!
//! store.set("hello", "planet");
//! store.set("hello.thing", "blah");
//!
//! assert_eq!(
//!     *log.borrow(),
//!     vec!["changed to planet", "hello.thing changed to blah"]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handle;
pub mod listener;
pub mod path;
pub mod store;
pub mod tree;
pub mod value;

// Re-export main types
pub use config::StoreConfig;
pub use error::{type_name, Result, StoreError};
pub use handle::Handle;
pub use listener::{DescendantListenerFn, Listener, ListenerKind, SelfListenerFn};
pub use store::{Store, WeakStore};
pub use tree::NodeId;
pub use value::{Value, ValueMap};

/// Canopy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
