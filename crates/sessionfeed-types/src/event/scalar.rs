use serde_json::{Map, Value};
use std::fmt;

/// A loosely-typed JSON leaf.
///
/// Payload fields such as `percent` or `state` arrive as numbers or strings
/// depending on the producer. Arrays, objects and `null` are never scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl Scalar {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Flag(*b)),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Empty text, zero, NaN and `false` count as "not set".
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Flag(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Field present with any scalar value (`null` and missing are absent)
pub fn scalar_field(object: &Map<String, Value>, key: &str) -> Option<Scalar> {
    object.get(key).and_then(Scalar::from_value)
}

/// Field rendered as text when its value is truthy
pub fn truthy_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    scalar_field(object, key)
        .filter(Scalar::is_truthy)
        .map(|s| s.to_string())
}

/// Field present as a non-empty JSON string
pub fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Field present as a JSON number
pub fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}
