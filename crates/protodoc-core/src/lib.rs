//! protodoc core - documentation and example payloads for protobuf schemas
//!
//! This crate works on an already-parsed description of `.proto` files and
//! provides:
//! - **Schema model**: files, messages, fields, enums and services, in the
//!   JSON shape used by protobuf documentation generators
//! - **Type resolution**: fully-qualified name lookup across files, plus a
//!   precomputed [`SchemaIndex`] that classifies every field once
//! - **Sample generation**: a representative JSON payload for any message,
//!   with fixed literals for scalars and static overrides for well-known types
//! - **Loading and rendering**: JSON/YAML schema documents in, markdown or
//!   JSON documentation out
//!
//! ## Quick Start
//!
//! ```rust
//! use protodoc_core::model::{File, Message, MessageField};
//! use protodoc_core::sample_json;
//!
//! let files = vec![File::new("point.proto", "geo").with_messages(vec![Message::new(
//!     "geo.Point",
//!     vec![MessageField::new("lat", "double"), MessageField::new("lng", "double")],
//! )])];
//!
//! let json = sample_json("geo.Point", &files, 2)?;
//! assert_eq!(json, "{\n  \"lat\": 1.23,\n  \"lng\": 1.23\n}");
//! # Ok::<(), protodoc_core::SampleError>(())
//! ```
//!
//! ## Sample rules
//!
//! - Repeated fields hold exactly one element, maps exactly one entry
//! - Enums use the tag of their last declared value
//! - Only the last declared member of a oneof group appears
//! - Recursive references are cut with an empty object
//! - Fields whose type is not loaded are left out
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod samples;

pub use documentation::{render_docs, DocGenerator, GeneratorConfig, GeneratorError, RenderType};
pub use error::{Error, Result};
pub use loader::{Format, LoaderError, SchemaLoader};
pub use model::{Enum, EnumValue, File, Message, MessageField, SchemaSet};
pub use resolver::{find_enum, find_message, FieldKind, SchemaIndex};
pub use samples::{sample_json, SampleError, SampleGenerator, SampleValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
