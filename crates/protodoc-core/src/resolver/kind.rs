//! Field kind classification
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::model::Enum;
use crate::samples::scalar::ScalarKind;
use crate::samples::well_known::WellKnownType;

/// Scalar kinds allowed as map keys, grouped by how the sample key looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKey {
    Int32,
    /// Rendered as a string, like 64-bit scalar values
    Int64,
    Bool,
    String,
}

impl MapKey {
    /// Map key kind for a scalar, `None` for kinds that cannot key a map
    pub fn from_scalar(kind: ScalarKind) -> Option<Self> {
        match kind {
            ScalarKind::String => Some(MapKey::String),
            ScalarKind::Bool => Some(MapKey::Bool),
            k if k.is_integral_32() => Some(MapKey::Int32),
            k if k.is_integral_64() => Some(MapKey::Int64),
            _ => None,
        }
    }

    /// Representative key used in the single-entry map sample
    pub fn sample_key(&self) -> &'static str {
        match self {
            MapKey::Int32 => "123",
            MapKey::Int64 => "0",
            MapKey::Bool => "true",
            MapKey::String => "{{key}}",
        }
    }
}

/// What a field's type refers to, decided once when the index is built
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind<'a> {
    Scalar(ScalarKind),
    WellKnown(WellKnownType),
    Map {
        key: MapKey,
        value: Box<FieldKind<'a>>,
    },
    /// User message, by fully-qualified name
    Message(&'a str),
    Enum(&'a Enum),
    /// Type not present in the loaded files, or a malformed map entry
    Unresolved(&'a str),
}

impl FieldKind<'_> {
    pub fn is_unresolved(&self) -> bool {
        match self {
            FieldKind::Unresolved(_) => true,
            FieldKind::Map { value, .. } => value.is_unresolved(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keys() {
        assert_eq!(MapKey::from_scalar(ScalarKind::Sfixed32), Some(MapKey::Int32));
        assert_eq!(MapKey::from_scalar(ScalarKind::Uint64), Some(MapKey::Int64));
        assert_eq!(MapKey::from_scalar(ScalarKind::Bool), Some(MapKey::Bool));
        assert_eq!(MapKey::from_scalar(ScalarKind::String), Some(MapKey::String));
        assert_eq!(MapKey::from_scalar(ScalarKind::Double), None);
        assert_eq!(MapKey::from_scalar(ScalarKind::Bytes), None);
    }

    #[test]
    fn test_unresolved_map_value() {
        let kind = FieldKind::Map {
            key: MapKey::String,
            value: Box::new(FieldKind::Unresolved("x.Gone")),
        };
        assert!(kind.is_unresolved());
        assert!(!FieldKind::Scalar(ScalarKind::Int32).is_unresolved());
    }
}
