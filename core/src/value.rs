//! Dynamically typed reply value.
//!
//! Used where a command's reply has no fixed shape (`EVAL`, `FCALL`, raw commands)
//! and for stream entry fields.

use serde::{Deserialize, Serialize};

/// A reply value whose shape is only known at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Nil reply
    #[default]
    Nil,
    /// Integer reply
    Int(i64),
    /// Double reply
    Double(f64),
    /// Boolean reply
    Bool(bool),
    /// Bulk or simple string reply
    Str(String),
    /// Binary-safe bulk reply that is not valid UTF-8
    Bytes(Vec<u8>),
    /// Array reply
    Array(Vec<Value>),
    /// Map reply, in the order the backend sent it
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Whether this is the nil reply.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// The string content, if this is a string reply.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer reply.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}
