//! Value representation for stored payloads

mod convert;
mod display;
mod impls;

use std::sync::Arc;

use indexmap::IndexMap;

/// Ordered string-keyed map used by [`Value::Map`].
pub type ValueMap = IndexMap<String, Value>;

/// A payload stored at a node.
///
/// Values are organized into two tiers:
/// - Tier 1: Inline primitives (no allocation)
/// - Tier 2: Heap-allocated compound types (Arc-wrapped, cheap to clone)
///
/// Listener dispatch hands every listener a reference to the same value,
/// so cloning is only needed when a listener keeps it.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The unit type `()`, an explicit "nothing" that still counts as set
    Unit,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer (default integer type)
    I64(i64),

    /// 64-bit unsigned integer
    U64(u64),

    /// 64-bit floating point
    F64(f64),

    /// Unicode scalar value
    // Never produced when deserializing, so one-character strings stay `String`.
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Char(char),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Compound Types
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Heterogeneous list of values
    Vec(Arc<Vec<Value>>),

    /// Byte string
    Bytes(Arc<Vec<u8>>),

    /// String-keyed map preserving insertion order
    Map(Arc<ValueMap>),
}
