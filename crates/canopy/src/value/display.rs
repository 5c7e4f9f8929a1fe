//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::I64(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}u64", n),
            Value::F64(n) => write!(f, "{:?}", n),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::Bytes(b) => write!(f, "b{:?}", b.as_ref()),

            Value::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is more user-friendly, Debug is more detailed
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            Value::Char(c) => write!(f, "{}", c),            // No quotes for Display
            Value::U64(n) => write!(f, "{}", n),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strips_quotes() {
        assert_eq!(Value::from("world").to_string(), "world");
        assert_eq!(format!("{:?}", Value::from("world")), "\"world\"");
    }

    #[test]
    fn test_debug_nested() {
        let v = Value::map([("a", Value::vec(vec![Value::I64(1), Value::Bool(true)]))]);
        assert_eq!(format!("{:?}", v), "{\"a\": [1, true]}");
    }

    #[test]
    fn test_float_debug_keeps_fraction() {
        assert_eq!(format!("{:?}", Value::F64(1.0)), "1.0");
    }
}
