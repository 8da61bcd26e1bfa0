//! Schema document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::model::{File, SchemaSet};
use serde_json::Value;
use std::path::Path;

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

/// Parser turning document text into the schema model
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse schema content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<SchemaSet> {
        let value = match format {
            Format::Yaml => self.parse_yaml(content, path)?,
            Format::Json => self.parse_json(content, path)?,
        };
        self.to_schema_set(value, path)
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        // Continue as JSON so both formats share one shape check
        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Accept either `{"files": [...]}` or a bare array of files
    pub fn to_schema_set(&self, value: Value, path: &Path) -> LoaderResult<SchemaSet> {
        let result = if value.is_array() {
            serde_json::from_value::<Vec<File>>(value).map(SchemaSet::new)
        } else {
            serde_json::from_value::<SchemaSet>(value)
        };
        result.map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.proto")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
    }

    #[test]
    fn test_bare_array_and_wrapped_documents() {
        let parser = SchemaParser::new();
        let path = Path::new("inline.json");

        let wrapped = parser
            .parse_content(r#"{"files": [{"name": "a.proto", "package": "a"}]}"#, Format::Json, path)
            .unwrap();
        let bare = parser
            .parse_content(r#"[{"name": "a.proto", "package": "a"}]"#, Format::Json, path)
            .unwrap();

        assert_eq!(wrapped, bare);
        assert_eq!(bare.files[0].package, "a");
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r#"
files:
  - name: shop.proto
    package: shop
    messages:
      - fullName: shop.Item
        fields:
          - name: id
            fullType: int64
    enums:
      - fullName: shop.State
        values:
          - name: OPEN
            number: 1
"#;
        let set = SchemaParser::new()
            .parse_content(yaml, Format::Yaml, Path::new("shop.yaml"))
            .unwrap();

        let file = &set.files[0];
        assert_eq!(file.messages[0].fields[0].full_type, "int64");
        assert_eq!(file.enums[0].values[0].tag(), 1);
    }

    #[test]
    fn test_wrong_shape_is_json_error() {
        let err = SchemaParser::new()
            .parse_content(r#"{"files": "nope"}"#, Format::Json, Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::JsonParseError { .. }));
    }
}
