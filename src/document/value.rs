//! In-memory JSON value model.
//!
//! Queries are evaluated against a fully materialized `Value` tree. Objects
//! are backed by an `IndexMap` so that key order from the source document is
//! preserved when a value is printed back out.
//!
//! # Example
//!
//! ```
//! use jsonexplorer::document::value::{Number, Value};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), Value::String("toto".to_string()));
//! fields.insert("value".to_string(), Value::Number(Number::Integer(2)));
//! let object = Value::Object(fields);
//!
//! assert!(object.as_object().is_some());
//! assert_eq!(object.to_string(), r#"{"name":"toto","value":2}"#);
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A JSON number, kept as an integer whenever the source allows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // JSON spelling: `2.0` stays a float, large magnitudes use an exponent.
            Number::Float(fl) => match serde_json::Number::from_f64(*fl) {
                Some(n) => write!(f, "{}", n),
                None => write!(f, "{}", fl),
            },
        }
    }
}

/// A JSON value.
///
/// Arrays in an evaluation result may be genuine document arrays or
/// groupings introduced by the evaluator; the two are not distinguished.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`
    Null,
    /// JSON `true` / `false`
    Boolean(bool),
    /// A JSON number (integer or float)
    Number(Number),
    /// A JSON string
    String(String),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// Key/value pairs in document order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Serializes the value as compact JSON text.
    pub fn to_json(&self) -> String {
        // Serializing an in-memory tree with string keys cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serializes the value as indented JSON text.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Strings print without quotes; containers print as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}
