use crate::{PayloadError, Result};
use serde_json::{Map, Value};

/// Separator used to join ancestor keys into a flat key path
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flatten a nested JSON object into a single-level map
///
/// Nested objects are recursed into and their keys joined to the parent key
/// with `separator`. Every other value (scalars, null, arrays) is a leaf and is
/// copied as-is, so objects inside arrays are left untouched.
///
/// Known sharp edges, kept on purpose:
/// - an empty nested object contributes no keys at all (`{"a": {}}` -> `{}`)
/// - two paths that join to the same key collide, and the one visited last in
///   document order wins (`{"a": {"b": 1}, "a.b": 2}` -> `{"a.b": 2}`)
/// - an empty key acts as "no prefix", so `{"": {"b": 1}}` -> `{"b": 1}`
pub fn flatten(object: &Map<String, Value>, separator: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(&mut flat, object, "", separator);
    flat
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    object: &Map<String, Value>,
    prefix: &str,
    separator: &str,
) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, separator, key)
        };

        match value {
            Value::Object(nested) => flatten_into(flat, nested, &path, separator),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses JSON payloads, flattens them and serializes the result back to JSON
#[derive(Debug, Clone)]
pub struct JsonFlattener {
    separator: String,
}

impl JsonFlattener {
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Create a flattener joining keys with a custom separator
    pub fn with_separator(separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(PayloadError::InvalidSeparator(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(Self { separator })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Flatten an already parsed document. Only objects can be flattened.
    pub fn flatten_value(&self, value: &Value) -> Result<Map<String, Value>> {
        match value {
            Value::Object(object) => Ok(flatten(object, &self.separator)),
            other => Err(PayloadError::NotAnObject(json_kind(other))),
        }
    }

    /// Parse `bytes` as JSON, flatten it and serialize the flat map
    ///
    /// Numbers are written back with the exact text they were parsed from.
    pub fn flatten_payload(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let document: Value = serde_json::from_slice(bytes)?;
        let flat = self.flatten_value(&document)?;
        Ok(serde_json::to_vec(&flat)?)
    }
}

impl Default for JsonFlattener {
    fn default() -> Self {
        Self::new()
    }
}
