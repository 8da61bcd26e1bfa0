//! Schema model
//!
//! Passive, read-only description of the loaded protobuf files. The field
//! names follow the JSON document emitted by protobuf documentation
//! generators (`fullName`, `fullType`, `ismap`, `oneofdecl`, ...) so such a
//! document can be loaded directly.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod enumeration;
pub mod file;
pub mod message;

pub use enumeration::{Enum, EnumValue};
pub use file::{File, Service, ServiceMethod};
pub use message::{FieldLabel, Message, MessageField};

use serde::{Deserialize, Serialize};

/// The ordered set of files handed to the generator for one run
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SchemaSet {
    pub files: Vec<File>,
}

impl SchemaSet {
    pub fn new(files: Vec<File>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of messages across all files
    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.messages.len()).sum()
    }

    /// Total number of enums across all files
    pub fn enum_count(&self) -> usize {
        self.files.iter().map(|f| f.enums.len()).sum()
    }
}

impl From<Vec<File>> for SchemaSet {
    fn from(files: Vec<File>) -> Self {
        Self::new(files)
    }
}
