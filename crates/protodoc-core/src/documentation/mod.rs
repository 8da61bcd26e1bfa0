//! Documentation rendering
//!
//! Renders a loaded file set as markdown or as a JSON document model. Both
//! carry an example payload for each message, produced by the sample
//! generator.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod templates;

pub use generator::{DocGenerator, GeneratorConfig, GeneratorError, GeneratorResult, RenderType};
pub use templates::Template;

use crate::model::File;

/// Render documentation with the default configuration
pub fn render_docs(files: &[File], render_type: RenderType) -> GeneratorResult<String> {
    DocGenerator::new().render(files, render_type)
}
