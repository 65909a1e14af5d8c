//! Mapping from Rust types to JSON Schema primitive types.

use crate::reflect::{Kind, TypeInfo, TypeName};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The primitive types of the JSON Schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

/// Named types that have a dedicated schema, regardless of their structure.
///
/// Entries take precedence over the type's kind.
const FORMAT_MAPPING: &[(TypeName, PrimitiveType, &str)] = &[(
    TypeName::new("chrono", "DateTime"),
    PrimitiveType::String,
    "date-time",
)];

/// The result of mapping a type to the schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub ty: Option<PrimitiveType>,
    pub format: Option<&'static str>,

    /// The kind the caller should dispatch on. For named types this is always
    /// `Kind::String`, so their members are never walked.
    pub kind: Kind,
}

/// Maps a type to its schema type and format.
pub fn classify(info: &TypeInfo) -> Classification {
    if let Some(&(_, ty, format)) = FORMAT_MAPPING
        .iter()
        .find(|(name, _, _)| *name == info.name)
    {
        return Classification {
            ty: Some(ty),
            format: Some(format),
            kind: Kind::String,
        };
    }

    Classification {
        ty: primitive_type(info.kind),
        format: None,
        kind: info.kind,
    }
}

/// Returns the schema type for a structural kind, if it has one.
///
/// Pointers and dynamically-typed slots have no type of their own.
pub fn primitive_type(kind: Kind) -> Option<PrimitiveType> {
    Some(match kind {
        Kind::Bool => PrimitiveType::Boolean,

        Kind::I8
        | Kind::I16
        | Kind::I32
        | Kind::I64
        | Kind::I128
        | Kind::Isize
        | Kind::U8
        | Kind::U16
        | Kind::U32
        | Kind::U64
        | Kind::U128
        | Kind::Usize => PrimitiveType::Integer,

        Kind::F32 | Kind::F64 => PrimitiveType::Number,
        Kind::Char | Kind::String => PrimitiveType::String,
        Kind::Seq => PrimitiveType::Array,
        Kind::Struct | Kind::Map => PrimitiveType::Object,

        Kind::Pointer | Kind::Dynamic => return None,
    })
}
