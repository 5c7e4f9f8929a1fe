//! Serde tests (run with `--features serde`)
#![cfg(feature = "serde")]

use canopy::*;
use pretty_assertions::assert_eq;

#[test]
fn test_seed_store_from_json() {
    let json = r#"{"title": "Canopy", "count": 3, "ratio": 0.5, "tags": ["a", "b"], "none": null}"#;
    let value: Value = serde_json::from_str(json).unwrap();

    let store = Store::new();
    for (key, item) in value.as_map().unwrap() {
        store.set(key, item.clone());
    }

    assert_eq!(store.get("title"), Some(Value::from("Canopy")));
    assert_eq!(store.get("count"), Some(Value::I64(3)));
    assert_eq!(store.get("ratio"), Some(Value::F64(0.5)));
    assert_eq!(
        store.get("tags"),
        Some(Value::vec(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(store.get("none"), Some(Value::Unit));
}

#[test]
fn test_large_unsigned_stays_unsigned() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value, Value::U64(u64::MAX));
}

#[test]
fn test_serialize_value() {
    let value = Value::map([
        ("name", Value::from("x")),
        ("items", Value::vec(vec![Value::Bool(true), Value::Unit])),
    ]);
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"name":"x","items":[true,null]}"#
    );
}

#[test]
fn test_single_character_string_stays_string() {
    let value: Value = serde_json::from_str(r#""a""#).unwrap();
    assert_eq!(value, Value::from("a"));
    assert_eq!(serde_json::to_string(&Value::Char('a')).unwrap(), r#""a""#);
}
