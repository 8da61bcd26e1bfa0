//! Precomputed name-to-definition index
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::model::{Enum, File, Message, MessageField};
use crate::resolver::kind::{FieldKind, MapKey};
use crate::samples::scalar::ScalarKind;
use crate::samples::well_known::WellKnownType;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A field together with its classified kind
#[derive(Debug, Clone)]
pub struct IndexedField<'a> {
    pub field: &'a MessageField,
    pub kind: FieldKind<'a>,
}

/// A message, the file that declares it, and its classified fields
#[derive(Debug, Clone)]
pub struct IndexedMessage<'a> {
    pub message: &'a Message,
    pub file: &'a File,
    pub fields: Vec<IndexedField<'a>>,
}

impl<'a> IndexedMessage<'a> {
    pub fn full_name(&self) -> &'a str {
        &self.message.full_name
    }
}

/// A field whose type could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedField<'a> {
    pub message: &'a str,
    pub field: &'a str,
    pub type_name: &'a str,
}

type Declared<'a, T> = HashMap<&'a str, (&'a T, &'a File)>;

/// Hash index over all messages and enums of a file set
#[derive(Debug)]
pub struct SchemaIndex<'a> {
    files: &'a [File],
    messages: HashMap<&'a str, IndexedMessage<'a>>,
    enums: Declared<'a, Enum>,
    message_order: Vec<&'a str>,
    enum_order: Vec<&'a str>,
}

impl<'a> SchemaIndex<'a> {
    /// Index every declaration in `files`; the first declaration of a name wins
    pub fn new(files: &'a [File]) -> Self {
        let mut declared_messages: Declared<'a, Message> = HashMap::new();
        let mut declared_enums: Declared<'a, Enum> = HashMap::new();
        let mut message_order = Vec::new();
        let mut enum_order = Vec::new();

        for file in files {
            for message in &file.messages {
                if declare(&mut declared_messages, &message.full_name, message, file) {
                    message_order.push(message.full_name.as_str());
                }
            }
            for enumeration in &file.enums {
                if declare(&mut declared_enums, &enumeration.full_name, enumeration, file) {
                    enum_order.push(enumeration.full_name.as_str());
                }
            }
        }

        let classifier = Classifier {
            messages: &declared_messages,
            enums: &declared_enums,
        };

        let messages = message_order
            .iter()
            .map(|&name| {
                let (message, file) = declared_messages[name];
                let fields = message
                    .fields
                    .iter()
                    .map(|field| IndexedField {
                        field,
                        kind: classifier.classify(&field.full_type, field.is_map),
                    })
                    .collect();
                (name, IndexedMessage { message, file, fields })
            })
            .collect();

        debug!(
            files = files.len(),
            messages = message_order.len(),
            enums = enum_order.len(),
            "Schema index built"
        );

        Self {
            files,
            messages,
            enums: declared_enums,
            message_order,
            enum_order,
        }
    }

    pub fn files(&self) -> &'a [File] {
        self.files
    }

    /// Look up a message by fully-qualified name
    pub fn message(&self, name: &str) -> Option<&IndexedMessage<'a>> {
        self.messages.get(name)
    }

    /// Look up an enum by fully-qualified name
    pub fn enumeration(&self, name: &str) -> Option<&'a Enum> {
        self.enums.get(name).map(|(e, _)| *e)
    }

    /// Messages in declaration order
    pub fn messages(&self) -> impl Iterator<Item = &IndexedMessage<'a>> + '_ {
        self.message_order.iter().filter_map(|name| self.messages.get(name))
    }

    /// Enums with their declaring file, in declaration order
    pub fn enums(&self) -> impl Iterator<Item = (&'a Enum, &'a File)> + '_ {
        self.enum_order.iter().filter_map(|name| self.enums.get(name).copied())
    }

    /// Every field, across all messages, whose type is unresolved
    pub fn unresolved_fields(&self) -> Vec<UnresolvedField<'a>> {
        self.messages()
            .flat_map(|indexed| {
                let message = indexed.full_name();
                indexed
                    .fields
                    .iter()
                    .filter(|f| f.kind.is_unresolved())
                    .map(move |f| {
                        let field: &'a MessageField = f.field;
                        UnresolvedField {
                            message,
                            field: &field.name,
                            type_name: &field.full_type,
                        }
                    })
            })
            .collect()
    }
}

fn declare<'a, T>(declared: &mut Declared<'a, T>, name: &'a str, item: &'a T, file: &'a File) -> bool {
    match declared.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert((item, file));
            true
        }
        Entry::Occupied(existing) => {
            warn!(
                name = name,
                first = %existing.get().1.name,
                duplicate = %file.name,
                "Duplicate fully-qualified name, keeping the first declaration"
            );
            false
        }
    }
}

struct Classifier<'m, 'a> {
    messages: &'m Declared<'a, Message>,
    enums: &'m Declared<'a, Enum>,
}

impl<'a> Classifier<'_, 'a> {
    fn classify(&self, type_name: &'a str, is_map: bool) -> FieldKind<'a> {
        if let Some(kind) = ScalarKind::from_type_name(type_name) {
            return FieldKind::Scalar(kind);
        }
        if let Some(wkt) = WellKnownType::from_full_name(type_name) {
            return FieldKind::WellKnown(wkt);
        }
        if is_map {
            return self.classify_map(type_name);
        }
        if self.messages.contains_key(type_name) {
            return FieldKind::Message(type_name);
        }
        if let Some(&(enumeration, _)) = self.enums.get(type_name) {
            return FieldKind::Enum(enumeration);
        }
        debug!(type_name = type_name, "Unresolved type reference");
        FieldKind::Unresolved(type_name)
    }

    fn classify_map(&self, entry_name: &'a str) -> FieldKind<'a> {
        let Some(&(entry, _)) = self.messages.get(entry_name) else {
            debug!(entry = entry_name, "Map entry type not found");
            return FieldKind::Unresolved(entry_name);
        };

        let key = entry
            .field("key")
            .and_then(|f| ScalarKind::from_type_name(&f.full_type))
            .and_then(MapKey::from_scalar);

        match (key, entry.field("value")) {
            (Some(key), Some(value)) => FieldKind::Map {
                key,
                value: Box::new(self.classify(&value.full_type, false)),
            },
            _ => {
                debug!(entry = entry_name, "Malformed map entry");
                FieldKind::Unresolved(entry_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumValue;

    fn files() -> Vec<File> {
        vec![
            File::new("common.proto", "common")
                .with_enums(vec![Enum::new("common.Color", vec![EnumValue::new("RED", 1)])]),
            File::new("shop.proto", "shop").with_messages(vec![
                Message::new(
                    "shop.Item",
                    vec![
                        MessageField::new("name", "string"),
                        MessageField::new("color", "common.Color"),
                        MessageField::new("created", "google.protobuf.Timestamp"),
                        MessageField::new("labels", "shop.Item.LabelsEntry").map(),
                        MessageField::new("parent", "shop.Item"),
                        MessageField::new("vendor", "vendor.Vendor"),
                        MessageField::new("broken", "shop.Item.BrokenEntry").map(),
                    ],
                ),
                Message::new(
                    "shop.Item.LabelsEntry",
                    vec![
                        MessageField::new("key", "string"),
                        MessageField::new("value", "common.Color"),
                    ],
                ),
                Message::new("shop.Item.BrokenEntry", vec![MessageField::new("key", "string")]),
            ]),
        ]
    }

    fn kinds<'a>(index: &'a SchemaIndex<'a>, name: &str) -> Vec<&'a FieldKind<'a>> {
        index.message(name).unwrap().fields.iter().map(|f| &f.kind).collect()
    }

    #[test]
    fn test_classification() {
        let files = files();
        let index = SchemaIndex::new(&files);
        let kinds = kinds(&index, "shop.Item");

        assert_eq!(kinds[0], &FieldKind::Scalar(ScalarKind::String));
        assert!(matches!(kinds[1], FieldKind::Enum(e) if e.full_name == "common.Color"));
        assert_eq!(kinds[2], &FieldKind::WellKnown(WellKnownType::Timestamp));
        assert!(matches!(
            kinds[3],
            FieldKind::Map { key: MapKey::String, value } if matches!(**value, FieldKind::Enum(_))
        ));
        assert_eq!(kinds[4], &FieldKind::Message("shop.Item"));
        assert_eq!(kinds[5], &FieldKind::Unresolved("vendor.Vendor"));
        assert_eq!(kinds[6], &FieldKind::Unresolved("shop.Item.BrokenEntry"));
    }

    #[test]
    fn test_unresolved_fields() {
        let files = files();
        let index = SchemaIndex::new(&files);
        let unresolved = index.unresolved_fields();

        assert_eq!(unresolved.len(), 2);
        assert_eq!(unresolved[0].field, "vendor");
        assert_eq!(unresolved[1].type_name, "shop.Item.BrokenEntry");
    }

    #[test]
    fn test_declaration_order_and_duplicates() {
        let mut files = files();
        files.push(
            File::new("dup.proto", "shop")
                .with_messages(vec![Message::new("shop.Item", vec![])]),
        );
        let index = SchemaIndex::new(&files);

        let names: Vec<_> = index.messages().map(|m| m.full_name()).collect();
        assert_eq!(names, vec!["shop.Item", "shop.Item.LabelsEntry", "shop.Item.BrokenEntry"]);
        assert_eq!(index.message("shop.Item").unwrap().file.name, "shop.proto");
        assert_eq!(index.enums().count(), 1);
    }
}
