//! Type resolution across loaded files
//!
//! Two ways to find a definition by fully-qualified name:
//! - [`find_message`] / [`find_enum`]: linear scan over an ordered file slice
//! - [`SchemaIndex`]: hash lookup built once, with every field classified
//!   into a [`FieldKind`]
//!
//! Both return the first declaration in file order when a name is declared
//! more than once. A miss is `None`, never an error.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

pub mod index;
pub mod kind;

pub use index::{IndexedField, IndexedMessage, SchemaIndex, UnresolvedField};
pub use kind::{FieldKind, MapKey};

use crate::model::{Enum, File, Message};

/// Find a message by fully-qualified name
pub fn find_message<'a>(name: &str, files: &'a [File]) -> Option<&'a Message> {
    files.iter().find_map(|file| file.message(name))
}

/// Find an enum by fully-qualified name
pub fn find_enum<'a>(name: &str, files: &'a [File]) -> Option<&'a Enum> {
    files.iter().find_map(|file| file.enumeration(name))
}
