//! Error types for Canopy stores

use thiserror::Error;

use crate::value::Value;

/// Main error type for Canopy operations.
///
/// Reads, writes and subscriptions are total; only typed extraction and
/// depth-limited writes can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// A write issued from inside listeners nested deeper than allowed
    #[error("Dispatch depth exceeded: depth {depth} reached the maximum of {max}")]
    DispatchDepthExceeded {
        /// Nesting depth at the time of the rejected write
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}

impl StoreError {
    /// Build a type error for a value that was not of the expected type.
    pub fn type_error(expected: impl Into<String>, got: &Value) -> Self {
        StoreError::TypeError {
            expected: expected.into(),
            got: type_name(got).to_string(),
        }
    }
}

/// Result type alias for Canopy operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Unit => "()",
        Value::Bool(_) => "bool",
        Value::Char(_) => "char",
        Value::I64(_) => "i64",
        Value::U64(_) => "u64",
        Value::F64(_) => "f64",
        Value::String(_) => "String",
        Value::Bytes(_) => "Vec<u8>",
        Value::Vec(_) => "Vec",
        Value::Map(_) => "Map",
    }
}
