//! Weight value type carried by edges.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The payload of an edge's `weight` field.
///
/// In default weighted mode only numeric values resolve to a cost; any
/// other shape (a map of components, a list, a label) is opaque data that
/// a caller-supplied cost strategy interprets. Deserializes from plain
/// JSON, so `10` becomes `Int(10)` and `{"age": 3}` becomes a `Map`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_numeric(&self) -> bool { matches!(self, Value::Int(_) | Value::Float(_)) }

    /// Attempt to extract as f64.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Map member access; `None` for non-map values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(key),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

/// Build a map value from (key, value) pairs.
impl<K, V> From<Vec<(K, V)>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(3.5), Value::Float(3.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_pairs_become_map() {
        let v = Value::from(vec![("age", 3i64), ("height", 5)]);
        assert_eq!(v.get("age"), Some(&Value::Int(3)));
        assert_eq!(v.get("height"), Some(&Value::Int(5)));
        assert_eq!(v.get("depth"), None);
    }

    #[test]
    fn test_as_float() {
        assert_eq!(Value::Int(10).as_float(), Some(10.0));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::String("10".into()).as_float(), None);
        assert_eq!(Value::Null.as_float(), None);
    }

    #[test]
    fn test_numeric_classification() {
        assert!(Value::Int(0).is_numeric());
        assert!(Value::Float(0.5).is_numeric());
        assert!(!Value::String("1".into()).is_numeric());
        assert!(!Value::Null.is_numeric());

        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::from(vec![("k", 1i64)]).type_name(), "map");
    }

    #[test]
    fn test_plain_json_deserialization() {
        let v: Value = serde_json::from_value(serde_json::json!(10)).unwrap();
        assert_eq!(v, Value::Int(10));

        let v: Value = serde_json::from_value(serde_json::json!(2.5)).unwrap();
        assert_eq!(v, Value::Float(2.5));

        let v: Value = serde_json::from_value(serde_json::json!({"age": 3, "height": 5})).unwrap();
        assert_eq!(v.get("age"), Some(&Value::Int(3)));
    }
}
