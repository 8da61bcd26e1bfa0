//! Schema loading
//!
//! Reads the ordered file set from a JSON or YAML document. The document is
//! either an object with a `files` array or a bare array of files, using the
//! same field names as the JSON output of protobuf documentation generators.
//!
//! # Example Usage
//!
//! ```no_run
//! use protodoc_core::loader::SchemaLoader;
//! use std::path::Path;
//!
//! let schema = SchemaLoader::new().load(Path::new("schema.json"))?;
//! println!("Loaded {} files", schema.files.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod schema_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SchemaParser};
pub use schema_loader::{LoaderConfig, SchemaLoader};
