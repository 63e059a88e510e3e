//! Scalar values exchanged between controls and backing stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value held by a control or persisted in a store.
///
/// Persisted values are either booleans (check buttons) or text
/// (edits, combo boxes, radio groups, file paths).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Text(String),
}

/// The accessor family a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Read and written with the boolean accessors.
    Bool,
    /// Read and written with the scalar (string) accessors.
    Scalar,
}

impl Value {
    /// Get the kind of the value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Scalar,
        }
    }

    /// Check if the value is `false` or an empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Text(s) => s.is_empty(),
        }
    }

    /// Interpret the value as a boolean, text being true when non-empty.
    pub fn as_bool(&self) -> bool {
        !self.is_falsy()
    }

    /// Get the text, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    /// Convert to the scalar representation used by string accessors.
    pub fn into_text(self) -> String {
        match self {
            Value::Text(s) => s,
            Value::Bool(b) => b.to_string(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy() {
        assert!(Value::from(false).is_falsy());
        assert!(Value::from("").is_falsy());
        assert!(!Value::from(true).is_falsy());
        assert!(!Value::from("0").is_falsy());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(false).kind(), ValueKind::Bool);
        assert_eq!(Value::from("blue").kind(), ValueKind::Scalar);
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::from("Foo")).unwrap(), "\"Foo\"");
        let v: Value = serde_json::from_str("false").unwrap();
        assert_eq!(v, Value::Bool(false));
    }

    #[test]
    fn test_into_text() {
        assert_eq!(Value::from(true).into_text(), "true");
        assert_eq!(Value::from("9").into_text(), "9");
    }
}
