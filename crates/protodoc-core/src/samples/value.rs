//! Sample value representation and text encoding
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Synthesized example data for one message, field or map entry
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    /// Field name to value, in field declaration order
    Object(Vec<(String, SampleValue)>),
    Array(Vec<SampleValue>),
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Content-free message such as `google.protobuf.Empty`
    EmptyObject,
    /// A reference that could not be resolved; omitted by containers
    Unknown,
}

impl SampleValue {
    pub fn string(value: impl Into<String>) -> Self {
        SampleValue::String(value.into())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, SampleValue)>) -> Self {
        SampleValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SampleValue::Unknown)
    }

    /// Look up an entry of an object value
    pub fn get(&self, key: &str) -> Option<&SampleValue> {
        match self {
            SampleValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Keys of an object value, in order
    pub fn keys(&self) -> Vec<&str> {
        match self {
            SampleValue::Object(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Encode as indented JSON using `indent_width` spaces per level
    pub fn to_json_string(&self, indent_width: usize) -> Result<String, serde_json::Error> {
        let indent = " ".repeat(indent_width);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Convert to a `serde_json::Value`
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Serialize for SampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SampleValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            SampleValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            SampleValue::Bool(b) => serializer.serialize_bool(*b),
            SampleValue::Integer(n) => serializer.serialize_i64(*n),
            SampleValue::Float(f) => serializer.serialize_f64(*f),
            SampleValue::String(s) => serializer.serialize_str(s),
            SampleValue::EmptyObject => serializer.serialize_map(Some(0))?.end(),
            SampleValue::Unknown => serializer.serialize_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_insertion_order() {
        let value = SampleValue::object([
            ("zeta", SampleValue::Integer(1)),
            ("alpha", SampleValue::Bool(true)),
        ]);
        assert_eq!(value.to_json_string(0).unwrap(), "{\n\"zeta\": 1,\n\"alpha\": true\n}");
        assert_eq!(value.keys(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_indent_width() {
        let value = SampleValue::object([(
            "items",
            SampleValue::Array(vec![SampleValue::string("{{string}}")]),
        )]);
        let expected = "{\n    \"items\": [\n        \"{{string}}\"\n    ]\n}";
        assert_eq!(value.to_json_string(4).unwrap(), expected);
    }

    #[test]
    fn test_markers() {
        assert_eq!(SampleValue::EmptyObject.to_json_string(2).unwrap(), "{}");
        assert_eq!(SampleValue::Unknown.to_json_string(2).unwrap(), "null");
        assert_eq!(SampleValue::Float(1.23).to_json_string(2).unwrap(), "1.23");
    }
}
