//! Main documentation generator
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::templates::Template;
use crate::model::{File, Service};
use crate::resolver::SchemaIndex;
use crate::samples::{SampleError, SampleValue, ScalarKind};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

const TITLE: &str = "Protocol Documentation";

/// Documentation generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Include table of contents
    pub include_toc: bool,
    /// Include a JSON example for every message
    pub include_samples: bool,
    /// Spaces per indentation level in JSON examples
    pub sample_indent: usize,
    /// Append the scalar value types table
    pub include_scalar_table: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_samples: true,
            sample_indent: 2,
            include_scalar_table: true,
        }
    }
}

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Unknown render type: {name} (expected markdown or json)")]
    UnknownRenderType { name: String },

    #[error("Sample generation failed: {0}")]
    Sample(#[from] SampleError),

    #[error("Failed to encode document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output flavors the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderType {
    Markdown,
    Json,
}

impl RenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderType::Markdown => "markdown",
            RenderType::Json => "json",
        }
    }
}

impl FromStr for RenderType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(RenderType::Markdown),
            "json" => Ok(RenderType::Json),
            _ => Err(GeneratorError::UnknownRenderType { name: s.to_string() }),
        }
    }
}

impl fmt::Display for RenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentModel<'a> {
    files: &'a [File],
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<SampleValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scalar_value_types: Vec<ScalarEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScalarEntry {
    proto_type: &'static str,
    sample: SampleValue,
}

/// Main documentation generator
#[derive(Debug, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    /// Create a new documentation generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render documentation for an ordered file set
    pub fn render(&self, files: &[File], render_type: RenderType) -> GeneratorResult<String> {
        let index = SchemaIndex::new(files);
        let output = match render_type {
            RenderType::Markdown => self.render_markdown(&index)?,
            RenderType::Json => self.render_json(&index)?,
        };

        info!(
            render_type = %render_type,
            files = files.len(),
            bytes = output.len(),
            "Documentation rendered"
        );
        Ok(output)
    }

    fn render_markdown(&self, index: &SchemaIndex<'_>) -> GeneratorResult<String> {
        let mut doc = Template::header(TITLE, None);

        if self.config.include_toc {
            let sections = self.collect_sections(index.files());
            if !sections.is_empty() {
                doc.push_str(&Template::table_of_contents(&sections));
            }
        }

        for file in index.files() {
            doc.push_str(&format!("## {}\n\n", file.name));
            if !file.description.is_empty() {
                doc.push_str(&format!("{}\n\n", file.description.trim()));
            }

            for message in &file.messages {
                doc.push_str(&format!("### {}\n\n", message.full_name));
                if !message.description.is_empty() {
                    doc.push_str(&format!("{}\n\n", message.description.trim()));
                }
                if message.has_fields() {
                    doc.push_str(&Template::message_fields(message));
                }
                if self.config.include_samples {
                    let sample = index.sample_json(&message.full_name, self.config.sample_indent)?;
                    doc.push_str(&Template::json_example("Example", &sample));
                }
            }

            for enumeration in &file.enums {
                doc.push_str(&format!("### {}\n\n", enumeration.full_name));
                if !enumeration.description.is_empty() {
                    doc.push_str(&format!("{}\n\n", enumeration.description.trim()));
                }
                doc.push_str(&Template::enum_values(enumeration));
            }

            for service in &file.services {
                doc.push_str(&self.render_service(index, service)?);
            }
        }

        if self.config.include_scalar_table {
            doc.push_str(&self.render_scalar_table()?);
        }

        doc.push_str(&Template::footer());
        Ok(doc)
    }

    fn render_service(&self, index: &SchemaIndex<'_>, service: &Service) -> GeneratorResult<String> {
        let mut doc = format!("### {}\n\n", service_title(service));
        if !service.description.is_empty() {
            doc.push_str(&format!("{}\n\n", service.description.trim()));
        }
        doc.push_str(&Template::service_methods(&service.methods));

        if self.config.include_samples {
            for method in &service.methods {
                if index.message(&method.request_full_type).is_none() {
                    debug!(
                        method = %method.name,
                        request = %method.request_full_type,
                        "Request type not loaded, skipping example"
                    );
                    continue;
                }
                let sample = index.sample_json(&method.request_full_type, self.config.sample_indent)?;
                doc.push_str(&Template::json_example(&format!("{} request", method.name), &sample));
            }
        }

        Ok(doc)
    }

    fn render_scalar_table(&self) -> GeneratorResult<String> {
        let rows = ScalarKind::ALL
            .iter()
            .map(|kind| -> GeneratorResult<Vec<String>> {
                Ok(vec![
                    format!("`{}`", kind.proto_name()),
                    format!("`{}`", serde_json::to_string(&kind.sample())?),
                ])
            })
            .collect::<GeneratorResult<Vec<_>>>()?;

        let mut doc = String::from("## Scalar Value Types\n\n");
        doc.push_str(&Template::table(&[".proto Type", "Sample"], &rows));
        Ok(doc)
    }

    fn render_json(&self, index: &SchemaIndex<'_>) -> GeneratorResult<String> {
        let samples = if self.config.include_samples {
            let entries = index
                .messages()
                .map(|indexed| {
                    let name = indexed.full_name();
                    index.sample(name).map(|sample| (name, sample))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(SampleValue::object(entries))
        } else {
            None
        };

        let scalar_value_types = if self.config.include_scalar_table {
            ScalarKind::ALL
                .iter()
                .map(|kind| ScalarEntry {
                    proto_type: kind.proto_name(),
                    sample: kind.sample(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let model = DocumentModel {
            files: index.files(),
            samples,
            scalar_value_types,
        };

        let mut buf = Vec::new();
        let indent = " ".repeat(self.config.sample_indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        model.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Table of contents entries for every file and declaration
    fn collect_sections<'f>(&self, files: &'f [File]) -> Vec<(&'f str, usize)> {
        let mut sections = Vec::new();
        for file in files {
            sections.push((file.name.as_str(), 1));
            sections.extend(file.messages.iter().map(|m| (m.full_name.as_str(), 2)));
            sections.extend(file.enums.iter().map(|e| (e.full_name.as_str(), 2)));
            sections.extend(file.services.iter().map(|s| (service_title(s), 2)));
        }
        if self.config.include_scalar_table {
            sections.push(("Scalar Value Types", 1));
        }
        sections
    }
}

fn service_title(service: &Service) -> &str {
    if service.full_name.is_empty() {
        &service.name
    } else {
        &service.full_name
    }
}
