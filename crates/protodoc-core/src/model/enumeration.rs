//! Enum definitions
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize};

/// A single enum value
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EnumValue {
    pub name: String,
    /// Integer tag, kept as text the way the schema model carries it
    #[serde(deserialize_with = "number_as_string")]
    pub number: String,
    #[serde(default)]
    pub description: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, number: impl ToString) -> Self {
        Self {
            name: name.into(),
            number: number.to_string(),
            description: String::new(),
        }
    }

    /// Parse the tag; text that is not an integer yields 0
    pub fn tag(&self) -> i64 {
        self.number.trim().parse().unwrap_or(0)
    }
}

/// A named closed set of integer-tagged values
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub long_name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    pub fn new(full_name: impl Into<String>, values: Vec<EnumValue>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name.as_str())
            .to_string();
        Self {
            long_name: name.clone(),
            name,
            full_name,
            description: String::new(),
            values,
        }
    }

    /// Tag used in generated samples: the last declared value, or 0
    pub fn sample_tag(&self) -> i64 {
        self.values.last().map(EnumValue::tag).unwrap_or(0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Int(i64),
}

fn number_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Text(text) => text,
        RawNumber::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_tag_is_last_declared() {
        let status = Enum::new(
            "a.b.Status",
            vec![
                EnumValue::new("DONE", 3),
                EnumValue::new("UNKNOWN", 0),
                EnumValue::new("RUNNING", 7),
            ],
        );
        assert_eq!(status.sample_tag(), 7);
        assert_eq!(Enum::new("a.b.Void", vec![]).sample_tag(), 0);
    }

    #[test]
    fn test_negative_and_malformed_tags() {
        assert_eq!(EnumValue::new("NEG", -4).tag(), -4);
        assert_eq!(EnumValue::new("BAD", "x1").tag(), 0);
    }

    #[test]
    fn test_number_accepts_text_or_integer() {
        let from_text: EnumValue = serde_json::from_value(json!({"name": "A", "number": "2"})).unwrap();
        let from_int: EnumValue = serde_json::from_value(json!({"name": "A", "number": 2})).unwrap();
        assert_eq!(from_text, from_int);
    }
}
