//! Recursive sample synthesis over a schema index
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::{FieldKind, IndexedMessage, SchemaIndex};
use crate::samples::value::SampleValue;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// One sample-generation session
///
/// The session memoizes every message it finishes and tracks the messages
/// currently being expanded. A message reached again while still in
/// progress is rendered as [`SampleValue::EmptyObject`], so recursive
/// schemas terminate. Sessions are cheap; create one per top-level request.
#[derive(Debug)]
pub struct SampleGenerator<'i, 'a> {
    index: &'i SchemaIndex<'a>,
    cache: HashMap<&'a str, SampleValue>,
    in_progress: HashSet<&'a str>,
}

impl<'i, 'a> SampleGenerator<'i, 'a> {
    pub fn new(index: &'i SchemaIndex<'a>) -> Self {
        Self {
            index,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Sample for a message by fully-qualified name, `None` when the index
    /// has no such message
    pub fn generate(&mut self, message_name: &str) -> Option<SampleValue> {
        let index = self.index;
        let indexed = index.message(message_name)?;
        Some(self.sample_message(indexed))
    }

    /// Number of messages memoized so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn sample_message(&mut self, indexed: &'i IndexedMessage<'a>) -> SampleValue {
        let name = indexed.full_name();

        if let Some(sample) = self.cache.get(name) {
            trace!(message = name, "Sample cache hit");
            return sample.clone();
        }
        if self.in_progress.contains(name) {
            debug!(message = name, "Recursive reference, substituting empty object");
            return SampleValue::EmptyObject;
        }
        if indexed.fields.is_empty() {
            self.cache.insert(name, SampleValue::EmptyObject);
            return SampleValue::EmptyObject;
        }

        self.in_progress.insert(name);

        // a oneof slot emptied by an unresolved last alternative holds None
        let mut entries: Vec<Option<(String, SampleValue)>> = Vec::with_capacity(indexed.fields.len());
        let mut oneof_slots: HashMap<&'a str, usize> = HashMap::new();

        for indexed_field in &indexed.fields {
            let field = indexed_field.field;
            let value = self.field_value(&indexed_field.kind);
            let entry = if value.is_unknown() {
                trace!(message = name, field = %field.name, "Omitting unresolved field");
                None
            } else if field.is_repeated() && !field.is_map {
                // map fields are labelled repeated but render as a single object
                Some((field.name.clone(), SampleValue::Array(vec![value])))
            } else {
                Some((field.name.clone(), value))
            };

            match field.oneof.as_deref() {
                Some(group) => match oneof_slots.get(group) {
                    Some(&slot) => entries[slot] = entry,
                    None => {
                        oneof_slots.insert(group, entries.len());
                        entries.push(entry);
                    }
                },
                None if entry.is_some() => entries.push(entry),
                None => {}
            }
        }

        self.in_progress.remove(name);

        let entries: Vec<(String, SampleValue)> = entries.into_iter().flatten().collect();
        let sample = SampleValue::Object(entries);
        self.cache.insert(name, sample.clone());
        sample
    }

    fn field_value(&mut self, kind: &FieldKind<'a>) -> SampleValue {
        match kind {
            FieldKind::Scalar(scalar) => scalar.sample(),
            FieldKind::WellKnown(wkt) => wkt.sample().clone(),
            FieldKind::Map { key, value } => {
                let value = self.field_value(value);
                if value.is_unknown() {
                    return SampleValue::Unknown;
                }
                SampleValue::object([(key.sample_key(), value)])
            }
            FieldKind::Message(name) => {
                let index = self.index;
                match index.message(name) {
                    Some(indexed) => self.sample_message(indexed),
                    None => SampleValue::Unknown,
                }
            }
            FieldKind::Enum(enumeration) => SampleValue::Integer(enumeration.sample_tag()),
            FieldKind::Unresolved(type_name) => {
                debug!(type_name = *type_name, "No sample for unresolved type");
                SampleValue::Unknown
            }
        }
    }
}
