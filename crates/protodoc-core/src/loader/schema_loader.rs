//! Schema loader reading file sets from disk or memory
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::{Format, SchemaParser};
use crate::model::SchemaSet;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration for schema loader behavior
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Accept documents that declare no files
    pub allow_empty: bool,
    /// Log fully-qualified names declared more than once
    pub report_duplicates: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            allow_empty: false,
            report_duplicates: true,
        }
    }
}

/// Loads the ordered file set a documentation run works on
#[derive(Debug, Default)]
pub struct SchemaLoader {
    config: LoaderConfig,
    parser: SchemaParser,
}

impl SchemaLoader {
    /// Create a new schema loader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new schema loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            parser: SchemaParser::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a schema document, detecting the format from its extension
    pub fn load(&self, path: &Path) -> LoaderResult<SchemaSet> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        debug!(path = %path.display(), bytes = content.len(), "Read schema document");
        self.load_from(&content, format, path)
    }

    /// Load a schema document held in memory
    pub fn load_str(&self, content: &str, format: Format) -> LoaderResult<SchemaSet> {
        let path = format!("<memory>.{}", format.primary_extension());
        self.load_from(content, format, Path::new(&path))
    }

    fn load_from(&self, content: &str, format: Format, path: &Path) -> LoaderResult<SchemaSet> {
        let set = self.parser.parse_content(content, format, path)?;

        if set.is_empty() && !self.config.allow_empty {
            return Err(LoaderError::empty_schema(path.to_path_buf()));
        }
        if self.config.report_duplicates {
            report_duplicates(&set);
        }

        info!(
            path = %path.display(),
            files = set.files.len(),
            messages = set.message_count(),
            enums = set.enum_count(),
            "Loaded schema"
        );
        Ok(set)
    }
}

fn report_duplicates(set: &SchemaSet) {
    let mut seen = HashSet::new();
    for file in set.files() {
        let names = file
            .messages
            .iter()
            .map(|m| m.full_name.as_str())
            .chain(file.enums.iter().map(|e| e.full_name.as_str()));
        for name in names {
            if !seen.insert(name) {
                warn!(name = name, file = %file.name, "Name declared more than once; the first declaration is used");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"files": [{{"name": "a.proto", "messages": [{{"fullName": "a.A"}}]}}]}}"#).unwrap();

        let set = SchemaLoader::new().load(file.path()).unwrap();
        assert_eq!(set.message_count(), 1);
        assert_eq!(set.files[0].messages[0].full_name, "a.A");
    }

    #[test]
    fn test_missing_file() {
        let err = SchemaLoader::new()
            .load(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::IoError { .. }));
    }

    #[test]
    fn test_empty_schema() {
        let loader = SchemaLoader::new();
        let err = loader.load_str(r#"{"files": []}"#, Format::Json).unwrap_err();
        assert!(matches!(err, LoaderError::EmptySchema { .. }));

        let lenient = SchemaLoader::with_config(LoaderConfig {
            allow_empty: true,
            ..LoaderConfig::default()
        });
        assert!(lenient.load_str("[]", Format::Json).unwrap().is_empty());
    }
}
