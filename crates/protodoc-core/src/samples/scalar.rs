//! Scalar sample table
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::samples::value::SampleValue;
use std::fmt;

pub const FLOAT_SAMPLE: f64 = 1.23;
pub const INT32_SAMPLE: i64 = 123;
/// 64-bit integers are rendered as strings to keep JSON number precision
pub const INT64_SAMPLE: &str = "0";
pub const BOOL_SAMPLE: bool = false;
pub const STRING_SAMPLE: &str = "{{string}}";
pub const BYTES_SAMPLE: &str = "{{binary bytes}}";
pub const UNKNOWN_SCALAR_SAMPLE: &str = "{{unknown scalar value}}";

/// Protobuf scalar value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Uint32,
        ScalarKind::Uint64,
        ScalarKind::Sint32,
        ScalarKind::Sint64,
        ScalarKind::Fixed32,
        ScalarKind::Fixed64,
        ScalarKind::Sfixed32,
        ScalarKind::Sfixed64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Bytes,
    ];

    /// Recognize a scalar keyword
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.proto_name() == type_name)
    }

    /// Keyword as written in `.proto` files
    pub fn proto_name(&self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Sint32 => "sint32",
            ScalarKind::Sint64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::Sfixed32 => "sfixed32",
            ScalarKind::Sfixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }

    pub fn is_integral_32(&self) -> bool {
        matches!(
            self,
            ScalarKind::Int32
                | ScalarKind::Uint32
                | ScalarKind::Sint32
                | ScalarKind::Fixed32
                | ScalarKind::Sfixed32
        )
    }

    pub fn is_integral_64(&self) -> bool {
        matches!(
            self,
            ScalarKind::Int64
                | ScalarKind::Uint64
                | ScalarKind::Sint64
                | ScalarKind::Fixed64
                | ScalarKind::Sfixed64
        )
    }

    /// Representative literal for this kind
    pub fn sample(&self) -> SampleValue {
        match self {
            ScalarKind::Double | ScalarKind::Float => SampleValue::Float(FLOAT_SAMPLE),
            ScalarKind::Bool => SampleValue::Bool(BOOL_SAMPLE),
            ScalarKind::String => SampleValue::string(STRING_SAMPLE),
            ScalarKind::Bytes => SampleValue::string(BYTES_SAMPLE),
            kind if kind.is_integral_64() => SampleValue::string(INT64_SAMPLE),
            _ => SampleValue::Integer(INT32_SAMPLE),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proto_name())
    }
}

/// Sample literal for a type name, falling back to a placeholder for
/// anything that is not a scalar keyword
pub fn scalar_sample(type_name: &str) -> SampleValue {
    ScalarKind::from_type_name(type_name)
        .map(|kind| kind.sample())
        .unwrap_or_else(|| SampleValue::string(UNKNOWN_SCALAR_SAMPLE))
}
