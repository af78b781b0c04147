//! Decoding JSON text into the `Value` model.
//!
//! Decoding itself is delegated to `serde_json` (built with `preserve_order`
//! so object keys keep their document order); this module only converts the
//! decoded tree into our own representation.
//!
//! # Example
//!
//! ```
//! use jsonexplorer::document::parser::parse_json;
//! use jsonexplorer::document::value::Value;
//!
//! let value = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! let fields = value.as_object().unwrap();
//! assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["name", "age"]);
//! assert_eq!(fields["age"], Value::from(30));
//! ```

use super::value::{Number, Value};
use anyhow::{Context, Result};
use serde_json::Value as SerdeValue;

/// Parses a JSON document.
pub fn parse_json(json_str: &str) -> Result<Value> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&serde_value))
}

/// Converts a `serde_json::Value` into a `Value`.
pub fn parse_value(value: &SerdeValue) -> Value {
    match value {
        SerdeValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect(),
        ),
        SerdeValue::Array(arr) => Value::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => Value::String(s.clone()),
        SerdeValue::Number(n) => Value::Number(parse_number(n)),
        SerdeValue::Bool(b) => Value::Boolean(*b),
        SerdeValue::Null => Value::Null,
    }
}

fn parse_number(n: &serde_json::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(0.0)),
    }
}
