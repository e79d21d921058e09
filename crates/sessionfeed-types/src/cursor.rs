use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque, server-assigned position in a session's event sequence.
///
/// The viewer never interprets the token; it only echoes it back as the
/// `after` query parameter when (re)connecting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read a cursor from a wire `id` field. Strings and numbers are accepted;
    /// empty strings and every other JSON type yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cursor_from_string_and_number() {
        assert_eq!(Cursor::from_value(&json!("evt-7")), Some(Cursor::new("evt-7")));
        assert_eq!(Cursor::from_value(&json!(42)), Some(Cursor::new("42")));
    }

    #[test]
    fn test_cursor_rejects_empty_and_structured_ids() {
        assert_eq!(Cursor::from_value(&json!("")), None);
        assert_eq!(Cursor::from_value(&json!(null)), None);
        assert_eq!(Cursor::from_value(&json!({"seq": 1})), None);
    }
}
