//! `Reflect` for `serde_json` documents.
//!
//! A `serde_json::Value` is a dynamically-typed slot: its declared type says
//! nothing about its shape, but a concrete value unwraps to its payload.

use crate::reflect::{Kind, Reflect, Scalar, TypeInfo, TypeName, Value};
use serde_json::{Map, Number, Value as Json};

impl Reflect for Json {
    fn type_info() -> TypeInfo {
        TypeInfo::dynamic::<Self>(TypeName::new("serde_json", "Value"))
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        let payload: &dyn Reflect = match self {
            Json::Null => return Value::Dynamic(None),
            Json::Bool(value) => value,
            Json::Number(value) => value,
            Json::String(value) => value,
            Json::Array(value) => value,
            Json::Object(value) => value,
        };

        Value::Dynamic(Some(payload))
    }
}

impl Reflect for Number {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar::<Self>(TypeName::new("serde_json", "Number"), Kind::F64)
    }

    // The kind of a number depends on what it holds, so integral numbers are
    // reported as integers at runtime.
    fn reflect_type(&self) -> TypeInfo {
        let kind = if self.is_i64() {
            Kind::I64
        } else if self.is_u64() {
            Kind::U64
        } else {
            Kind::F64
        };

        TypeInfo::scalar::<Self>(TypeName::new("serde_json", "Number"), kind)
    }

    fn reflect(&self) -> Value<'_> {
        let scalar = if let Some(value) = self.as_i64() {
            Scalar::Int(value.into())
        } else if let Some(value) = self.as_u64() {
            Scalar::Uint(value.into())
        } else {
            self.as_f64().map_or(Scalar::Opaque, Scalar::Float)
        };

        Value::Scalar(scalar)
    }
}

impl Reflect for Map<String, Json> {
    fn type_info() -> TypeInfo {
        TypeInfo::map::<Self, String, Json>(TypeName::new("serde_json", "Map"))
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect))
                .collect(),
        )
    }
}
