//! Values as they cross the storage boundary

use crate::time::{Representation, ZonedDateTime};

/// A dynamically typed value handed to a column type by the mapping layer.
///
/// Column types receive these from both sides of the boundary: application code on the
/// way to storage, and the database driver on the way back.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value (SQL `NULL`, Rust `None`)
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// Text
    String(String),
    /// An instant with its zone
    DateTime(ZonedDateTime),
}

impl Value {
    /// Stable name of the value's concrete type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(value) => datetime_type_name(value.representation()),
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    /// The datetime, if this is a [`Value::DateTime`].
    pub fn as_datetime(&self) -> Option<&ZonedDateTime> {
        match self {
            Value::DateTime(value) => Some(value),
            _ => None,
        }
    }
}

/// Name under which a datetime of the given representation appears in diagnostics.
pub fn datetime_type_name(representation: Representation) -> &'static str {
    match representation {
        Representation::Immutable => "datetime_immutable",
        Representation::Mutable => "datetime",
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<ZonedDateTime> for Value {
    fn from(value: ZonedDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
