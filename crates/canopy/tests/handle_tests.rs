//! Handle tests: fluent chaining over the store

use std::cell::RefCell;
use std::rc::Rc;

use canopy::*;
use pretty_assertions::assert_eq;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + Clone) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |entry| sink.borrow_mut().push(entry))
}

#[test]
fn test_set_in_chain_reaches_earlier_listeners() {
    let store = Store::new();
    let (log, record) = recorder();
    let (on_self, on_child) = (record.clone(), record);

    store
        .at("hello")
        .changed(move |v| on_self(format!("changed: {v}")))
        .child_changed(move |v, p| on_child(format!("child: {v} @ {p}")))
        .set("planet")
        .child("thing")
        .set("blah");

    assert_eq!(
        *log.borrow(),
        vec!["changed: planet", "child: blah @ hello.thing"]
    );
}

#[test]
fn test_set_before_listener_in_chain_is_not_heard() {
    let store = Store::new();
    let (log, record) = recorder();

    store
        .at("k")
        .set(1)
        .changed(move |v| record(format!("changed: {v}")))
        .set(2);

    assert_eq!(*log.borrow(), vec!["changed: 2"]);
}

#[test]
fn test_handle_and_path_api_share_listeners() {
    let store = Store::new();
    let (log, record) = recorder();
    let (a, b) = (record.clone(), record);

    store.at("x.y").changed(move |v| a(format!("handle: {v}")));
    store.changed("x.y", move |v| b(format!("path: {v}")));

    store.set("x.y", 1);
    store.at("x.y").set(2);

    assert_eq!(
        *log.borrow(),
        vec!["handle: 1", "path: 1", "handle: 2", "path: 2"]
    );
}

#[test]
fn test_handle_get_reflects_later_writes() {
    let store = Store::new();
    let handle = store.at("counter");
    assert_eq!(handle.get(), None);

    store.set("counter", 10);
    assert_eq!(handle.get(), Some(Value::I64(10)));
}

#[test]
fn test_handle_reports_its_own_path_to_ancestors() {
    let store = Store::new();
    let (log, record) = recorder();
    store.child_changed("", move |_, p| record(p.to_string()));

    store.at("a").child("b").child("c").set(true);

    assert_eq!(*log.borrow(), vec!["a.b.c"]);
}

#[test]
fn test_root_handle() {
    let store = Store::new();
    let root = store.at("");
    assert_eq!(root.id(), NodeId::ROOT);
    assert_eq!(root.child("top").path(), "top");
}

#[test]
fn test_handle_try_set_respects_depth_limit() {
    let store = Store::with_config(StoreConfig::with_max_dispatch_depth(1));
    let outcome = Rc::new(RefCell::new(None));
    let handle = store.at("k");
    {
        let inner = store.at("other");
        let outcome = outcome.clone();
        store.changed("k", move |_| *outcome.borrow_mut() = Some(inner.try_set(1)));
    }

    assert_eq!(handle.try_set(0), Ok(()));
    assert_eq!(
        *outcome.borrow(),
        Some(Err(StoreError::DispatchDepthExceeded { depth: 1, max: 1 }))
    );
    assert_eq!(store.get("other"), None);
}

#[test]
fn test_handle_debug() {
    let store = Store::new();
    let handle = store.at("a.b");
    let text = format!("{:?}", handle);
    assert!(text.contains("path: \"a.b\""));
}
