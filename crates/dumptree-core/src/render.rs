//! JSON rendering of parsed trees.
//!
//! Objects render as a one-entry map from their name to their fields, so
//! `User(id=1)` becomes `{"User":{"id":1}}`. Serialization goes through
//! [`Serialize`], which writes field pairs in order and keeps repeated keys
//! in the text output. [`to_json_value`] builds a `serde_json::Value`, whose
//! maps are unique-keyed: there a repeated key keeps its last value.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::grammar::parse;
use crate::types::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Object { name, fields } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, &Fields(fields))?;
                map.end()
            }
        }
    }
}

/// An object's field list serialized as a map, duplicates included.
struct Fields<'a>(&'a [(String, Value)]);

impl Serialize for Fields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// Compact JSON text for a tree.
pub fn to_json_string(value: &Value) -> crate::error::Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Indented JSON text for a tree.
pub fn to_json_pretty(value: &Value) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Convert a tree into a `serde_json::Value`.
pub fn to_json_value(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::from(*n),
        Value::Str(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(items.iter().map(to_json_value).collect()),
        Value::Object { name, fields } => {
            let body: Map<String, JsonValue> = fields
                .iter()
                .map(|(k, v)| (k.clone(), to_json_value(v)))
                .collect();
            let mut wrapper = Map::new();
            wrapper.insert(name.clone(), JsonValue::Object(body));
            JsonValue::Object(wrapper)
        }
    }
}

/// Parse a dump and return compact JSON.
///
/// ```
/// use dumptree_core::parse_to_json;
///
/// let json = parse_to_json("User(id=1, tags=[a, b])").unwrap();
/// assert_eq!(json, r#"{"User":{"id":1,"tags":["a","b"]}}"#);
/// ```
pub fn parse_to_json(text: &str) -> crate::error::Result<String> {
    to_json_string(&parse(text))
}
