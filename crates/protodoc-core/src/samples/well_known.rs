//! Well-known type overrides
//!
//! Standard wrapper and utility types get a fixed sample instead of a
//! recursively synthesized one.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::samples::scalar::ScalarKind;
use crate::samples::value::SampleValue;
use std::collections::HashMap;
use std::sync::OnceLock;

static SAMPLES: OnceLock<HashMap<WellKnownType, SampleValue>> = OnceLock::new();

/// Standard types with a static sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    Any,
    BoolValue,
    BytesValue,
    DoubleValue,
    Duration,
    Empty,
    FieldMask,
    FloatValue,
    Int32Value,
    Int64Value,
    ListValue,
    StringValue,
    Timestamp,
    UInt32Value,
    UInt64Value,
}

impl WellKnownType {
    pub const ALL: [WellKnownType; 15] = [
        WellKnownType::Any,
        WellKnownType::BoolValue,
        WellKnownType::BytesValue,
        WellKnownType::DoubleValue,
        WellKnownType::Duration,
        WellKnownType::Empty,
        WellKnownType::FieldMask,
        WellKnownType::FloatValue,
        WellKnownType::Int32Value,
        WellKnownType::Int64Value,
        WellKnownType::ListValue,
        WellKnownType::StringValue,
        WellKnownType::Timestamp,
        WellKnownType::UInt32Value,
        WellKnownType::UInt64Value,
    ];

    /// Recognize a fully-qualified well-known type name
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|wkt| wkt.full_name() == full_name)
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            WellKnownType::Any => "google.protobuf.Any",
            WellKnownType::BoolValue => "google.protobuf.BoolValue",
            WellKnownType::BytesValue => "google.protobuf.BytesValue",
            WellKnownType::DoubleValue => "google.protobuf.DoubleValue",
            WellKnownType::Duration => "google.protobuf.Duration",
            WellKnownType::Empty => "google.protobuf.Empty",
            WellKnownType::FieldMask => "google.protobuf.FieldMask",
            WellKnownType::FloatValue => "google.protobuf.FloatValue",
            WellKnownType::Int32Value => "google.protobuf.Int32Value",
            WellKnownType::Int64Value => "google.protobuf.Int64Value",
            WellKnownType::ListValue => "google.protobuf.ListValue",
            WellKnownType::StringValue => "google.protobuf.StringValue",
            WellKnownType::Timestamp => "google.protobuf.Timestamp",
            WellKnownType::UInt32Value => "google.protobuf.UInt32Value",
            WellKnownType::UInt64Value => "google.protobuf.UInt64Value",
        }
    }

    /// The static sample for this type
    pub fn sample(&self) -> &'static SampleValue {
        // every variant is inserted by build_samples
        &SAMPLES.get_or_init(build_samples)[self]
    }
}

fn wrapper(kind: ScalarKind) -> SampleValue {
    SampleValue::object([("value", kind.sample())])
}

fn seconds_and_nanos() -> SampleValue {
    SampleValue::object([
        ("seconds", ScalarKind::Int64.sample()),
        ("nanos", ScalarKind::Int32.sample()),
    ])
}

fn build_samples() -> HashMap<WellKnownType, SampleValue> {
    WellKnownType::ALL
        .into_iter()
        .map(|wkt| {
            let sample = match wkt {
                WellKnownType::Any => SampleValue::string("{{any}}"),
                WellKnownType::BoolValue => wrapper(ScalarKind::Bool),
                WellKnownType::BytesValue => wrapper(ScalarKind::Bytes),
                WellKnownType::DoubleValue => wrapper(ScalarKind::Double),
                WellKnownType::Duration | WellKnownType::Timestamp => seconds_and_nanos(),
                WellKnownType::Empty => SampleValue::EmptyObject,
                WellKnownType::FieldMask => {
                    SampleValue::object([("mask", SampleValue::string("a.b.c,foo"))])
                }
                WellKnownType::FloatValue => wrapper(ScalarKind::Float),
                WellKnownType::Int32Value => wrapper(ScalarKind::Int32),
                WellKnownType::Int64Value => wrapper(ScalarKind::Int64),
                WellKnownType::ListValue => SampleValue::object([(
                    "value",
                    SampleValue::Array(vec![SampleValue::string("{{any-value}}")]),
                )]),
                WellKnownType::StringValue => wrapper(ScalarKind::String),
                WellKnownType::UInt32Value => wrapper(ScalarKind::Uint32),
                WellKnownType::UInt64Value => wrapper(ScalarKind::Uint64),
            };
            (wkt, sample)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_sample() {
        for wkt in WellKnownType::ALL {
            assert_eq!(WellKnownType::from_full_name(wkt.full_name()), Some(wkt));
            assert!(!wkt.sample().is_unknown());
        }
    }

    #[test]
    fn test_wrapper_samples() {
        let timestamp = WellKnownType::Timestamp.sample();
        assert_eq!(timestamp.get("seconds"), Some(&SampleValue::string("0")));
        assert_eq!(timestamp.get("nanos"), Some(&SampleValue::Integer(123)));

        assert_eq!(
            WellKnownType::StringValue.sample().to_json_string(0).unwrap(),
            "{\n\"value\": \"{{string}}\"\n}"
        );
        assert_eq!(WellKnownType::Empty.sample(), &SampleValue::EmptyObject);
        assert_eq!(WellKnownType::Any.sample(), &SampleValue::string("{{any}}"));
    }

    #[test]
    fn test_unrelated_names_are_not_well_known() {
        assert_eq!(WellKnownType::from_full_name("google.protobuf.Struct"), None);
        assert_eq!(WellKnownType::from_full_name("Timestamp"), None);
    }
}
