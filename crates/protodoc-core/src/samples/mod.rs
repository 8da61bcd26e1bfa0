//! Example payload synthesis
//!
//! Builds a representative JSON example for any message: scalar fields get
//! fixed literals, standard wrapper types get static overrides, enums use
//! their last declared tag, nested messages recurse, repeated fields carry a
//! single element and maps a single entry. References that cannot be
//! resolved are left out rather than reported.
//!
//! ```no_run
//! use protodoc_core::samples::sample_json;
//! # let files: Vec<protodoc_core::model::File> = Vec::new();
//! let text = sample_json("shop.Order", &files, 2)?;
//! # Ok::<(), protodoc_core::samples::SampleError>(())
//! ```
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod scalar;
pub mod value;
pub mod well_known;

pub use generator::SampleGenerator;
pub use scalar::{scalar_sample, ScalarKind};
pub use value::SampleValue;
pub use well_known::WellKnownType;

use crate::model::File;
use crate::resolver::SchemaIndex;
use thiserror::Error;
use tracing::debug;

/// Sample generation errors
#[derive(Error, Debug)]
pub enum SampleError {
    /// The requested top-level message is not declared in any loaded file
    #[error("Message not found: {name}")]
    MessageNotFound { name: String },

    /// The synthesized value could not be encoded as JSON
    #[error("Failed to encode sample: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SampleError {
    pub fn message_not_found(name: impl Into<String>) -> Self {
        Self::MessageNotFound { name: name.into() }
    }
}

/// Result type for sample generation
pub type SampleResult<T> = Result<T, SampleError>;

impl<'a> SchemaIndex<'a> {
    /// Sample value for a message, using a fresh generator session
    pub fn sample(&self, message_name: &str) -> SampleResult<SampleValue> {
        SampleGenerator::new(self)
            .generate(message_name)
            .ok_or_else(|| SampleError::message_not_found(message_name))
    }

    /// Indented JSON text of a message sample
    pub fn sample_json(&self, message_name: &str, indent_width: usize) -> SampleResult<String> {
        let sample = self.sample(message_name)?;
        let text = sample.to_json_string(indent_width)?;
        debug!(message = message_name, bytes = text.len(), "Sample encoded");
        Ok(text)
    }
}

/// Resolve `message_name` in `files`, synthesize its sample and encode it as
/// JSON indented by `indent_width` spaces per level
pub fn sample_json(message_name: &str, files: &[File], indent_width: usize) -> SampleResult<String> {
    SchemaIndex::new(files).sample_json(message_name, indent_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Message, MessageField};

    #[test]
    fn test_sample_json_compact_indent() {
        let files = vec![File::new("p.proto", "p").with_messages(vec![Message::new(
            "p.Point",
            vec![MessageField::new("x", "int32"), MessageField::new("y", "int32")],
        )])];

        let text = sample_json("p.Point", &files, 0).unwrap();
        assert_eq!(text, "{\n\"x\": 123,\n\"y\": 123\n}");
    }

    #[test]
    fn test_missing_top_level_message() {
        let files = vec![File::new("p.proto", "p")];
        let err = sample_json("p.Missing", &files, 2).unwrap_err();

        assert!(matches!(err, SampleError::MessageNotFound { ref name } if name == "p.Missing"));
        assert_eq!(err.to_string(), "Message not found: p.Missing");
    }
}
