//! Value tests: construction, conversion and formatting

use canopy::*;
use pretty_assertions::assert_eq;

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(()), Value::Unit);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from('c'), Value::Char('c'));
    assert_eq!(Value::from(3i32), Value::I64(3));
    assert_eq!(Value::from(3u32), Value::U64(3));
    assert_eq!(Value::from(3usize), Value::U64(3));
    assert_eq!(Value::from(1.5f32), Value::F64(1.5));
}

#[test]
fn test_from_compound() {
    assert_eq!(Value::from("s"), Value::string("s"));
    assert_eq!(Value::from(String::from("s")), Value::string("s"));
    assert_eq!(Value::from(vec![1u8, 2]), Value::bytes([1u8, 2]));
    assert_eq!(
        Value::from(vec![Value::I64(1)]),
        Value::vec(vec![Value::I64(1)])
    );
}

#[test]
fn test_map_preserves_insertion_order() {
    let v = Value::map([("z", Value::I64(1)), ("a", Value::I64(2))]);
    let keys: Vec<&str> = v.as_map().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[test]
fn test_predicates() {
    assert!(Value::Unit.is_unit());
    assert!(Value::Bool(false).is_bool());
    assert!(Value::U64(1).is_integer());
    assert!(Value::F64(1.0).is_numeric());
    assert!(!Value::F64(1.0).is_integer());
    assert!(Value::from("x").is_string());
}

#[test]
fn test_extractors_on_wrong_type() {
    let v = Value::from("text");
    assert_eq!(v.as_bool(), None);
    assert_eq!(v.as_i64(), None);
    assert_eq!(v.as_vec(), None);
    assert!(v.as_map().is_none());
    assert_eq!(v.as_str(), Some("text"));
}

#[test]
fn test_type_names() {
    assert_eq!(type_name(&Value::Unit), "()");
    assert_eq!(type_name(&Value::Char('x')), "char");
    assert_eq!(type_name(&Value::bytes(Vec::<u8>::new())), "Vec<u8>");
    assert_eq!(type_name(&Value::vec(vec![])), "Vec");
    assert_eq!(type_name(&Value::map(Vec::<(String, Value)>::new())), "Map");
}

#[test]
fn test_try_from_char_mismatch() {
    let err = char::try_from(Value::from("c")).unwrap_err();
    assert_eq!(err.to_string(), "Type error: expected char, got String");
}

#[test]
fn test_display() {
    assert_eq!(Value::U64(5).to_string(), "5");
    assert_eq!(Value::Char('q').to_string(), "q");
    assert_eq!(Value::vec(vec![Value::from("a")]).to_string(), "[\"a\"]");
}

#[test]
fn test_stored_values_are_shared_not_copied() {
    let store = Store::new();
    let list = Value::vec(vec![Value::I64(1), Value::I64(2)]);
    store.set("list", list.clone());

    match (store.get("list"), list) {
        (Some(Value::Vec(stored)), Value::Vec(original)) => {
            assert!(std::sync::Arc::ptr_eq(&stored, &original));
        }
        other => panic!("unexpected: {:?}", other),
    }
}
