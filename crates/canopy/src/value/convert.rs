//! Typed extraction: `TryFrom<Value>` for the common Rust types

use crate::error::StoreError;

use super::{Value, ValueMap};

macro_rules! try_from_value {
    ($ty:ty, $expected:literal, $extract:expr) => {
        impl TryFrom<Value> for $ty {
            type Error = StoreError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let extract: fn(&Value) -> Option<$ty> = $extract;
                extract(&value).ok_or_else(|| StoreError::type_error($expected, &value))
            }
        }
    };
}

try_from_value!(bool, "bool", Value::as_bool);
try_from_value!(i64, "i64", Value::as_i64);
try_from_value!(u64, "u64", Value::as_u64);
try_from_value!(f64, "f64", Value::as_f64);
try_from_value!(String, "String", |v| v.as_str().map(str::to_string));
try_from_value!(Vec<Value>, "Vec", |v| v.as_vec().map(<[Value]>::to_vec));
try_from_value!(ValueMap, "Map", |v| v.as_map().cloned());

impl TryFrom<Value> for char {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(StoreError::type_error("char", &other)),
        }
    }
}
