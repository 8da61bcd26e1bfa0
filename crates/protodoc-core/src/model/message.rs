//! Message and field definitions
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize};

/// Field cardinality as declared in the schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum FieldLabel {
    /// Singular field (proto3 implicit or explicit `optional`)
    #[default]
    Optional,
    /// proto2 `required`
    Required,
    /// `repeated`
    Repeated,
}

impl FieldLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Optional => "optional",
            FieldLabel::Required => "required",
            FieldLabel::Repeated => "repeated",
        }
    }
}

impl From<String> for FieldLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "repeated" => FieldLabel::Repeated,
            "required" => FieldLabel::Required,
            _ => FieldLabel::Optional,
        }
    }
}

impl From<FieldLabel> for String {
    fn from(label: FieldLabel) -> Self {
        label.as_str().to_string()
    }
}

/// A field within a message
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageField {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label: FieldLabel,
    /// Short type name as written in the `.proto` file
    #[serde(default, rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub long_type: String,
    /// Fully-qualified type: a scalar keyword, a well-known type or a user type
    pub full_type: String,
    #[serde(default, rename = "ismap", alias = "isMap")]
    pub is_map: bool,
    /// Oneof group this field belongs to, if any
    #[serde(
        default,
        rename = "oneofdecl",
        alias = "oneof",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub oneof: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
}

impl MessageField {
    /// Create a singular field of the given fully-qualified type
    pub fn new(name: impl Into<String>, full_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_type: full_type.into(),
            ..Self::default()
        }
    }

    pub fn repeated(mut self) -> Self {
        self.label = FieldLabel::Repeated;
        self
    }

    pub fn map(mut self) -> Self {
        self.is_map = true;
        self
    }

    pub fn in_oneof(mut self, group: impl Into<String>) -> Self {
        self.oneof = Some(group.into());
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.label == FieldLabel::Repeated
    }

    pub fn is_oneof(&self) -> bool {
        self.oneof.is_some()
    }

    /// Type name used when displaying the field
    pub fn display_type(&self) -> &str {
        if !self.long_type.is_empty() {
            &self.long_type
        } else if !self.type_name.is_empty() {
            &self.type_name
        } else {
            &self.full_type
        }
    }
}

/// A named structured type
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub long_name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<MessageField>,
}

impl Message {
    /// Create a message from its fully-qualified name and fields
    pub fn new(full_name: impl Into<String>, fields: Vec<MessageField>) -> Self {
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
            fields,
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn has_oneofs(&self) -> bool {
        self.fields.iter().any(MessageField::is_oneof)
    }

    /// Find a field by its declared name
    pub fn field(&self, name: &str) -> Option<&MessageField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_from_generator_json() {
        let field: MessageField = serde_json::from_value(json!({
            "name": "tags",
            "label": "repeated",
            "type": "string",
            "longType": "string",
            "fullType": "string",
            "ismap": false,
            "isoneof": false,
            "oneofdecl": ""
        }))
        .unwrap();

        assert!(field.is_repeated());
        assert!(!field.is_oneof());
        assert_eq!(field.display_type(), "string");
    }

    #[test]
    fn test_field_label_defaults_to_optional() {
        let field: MessageField =
            serde_json::from_value(json!({"name": "id", "fullType": "int32", "label": ""})).unwrap();
        assert_eq!(field.label, FieldLabel::Optional);

        let field: MessageField =
            serde_json::from_value(json!({"name": "id", "fullType": "int32"})).unwrap();
        assert_eq!(field.label, FieldLabel::Optional);
    }

    #[test]
    fn test_message_flags() {
        let message = Message::new(
            "a.b.Choice",
            vec![
                MessageField::new("id", "int32"),
                MessageField::new("text", "string").in_oneof("value"),
            ],
        );

        assert_eq!(message.name, "Choice");
        assert!(message.has_fields());
        assert!(message.has_oneofs());
        assert!(message.field("text").is_some());
        assert!(!Message::new("a.b.Empty", vec![]).has_fields());
    }
}
