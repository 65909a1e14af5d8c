use super::{Member, Property};
use crate::{
    kind::{self, PrimitiveType},
    reflect::{Kind, Reflect, Shape, TypeInfo, Value},
};
use tracing::trace;

/// Builds the schema for a value, where `None` is an absent value.
pub(crate) fn read(value: Option<&dyn Reflect>) -> Property {
    let value = match value {
        Some(value) => value,
        None => return Property::typed(PrimitiveType::Null),
    };

    let info = value.reflect_type();
    let classification = kind::classify(&info);
    trace!(
        path = info.path,
        kind = %classification.kind,
        ty = ?classification.ty,
        "read value"
    );

    let mut property = Property::default();
    property.apply(&classification);

    match (classification.kind, value.reflect()) {
        (Kind::Seq, Value::Seq(elements)) => read_seq(&mut property, &info, &elements),
        (Kind::Map, Value::Map(entries)) => read_map(&mut property, &entries),
        (Kind::Struct, Value::Struct(members)) => read_struct(&mut property, &info, &members),

        (Kind::Pointer, Value::Pointer(inner)) | (Kind::Dynamic, Value::Dynamic(inner)) => {
            return read(inner)
        }

        _ => {}
    }

    property
}

fn read_seq(property: &mut Property, info: &TypeInfo, elements: &[&dyn Reflect]) {
    let first = match elements.first() {
        Some(&first) => first,

        // Nothing to inspect, so fall back to the declared element type.
        None => {
            if let Shape::Seq(element) = &info.shape {
                let element = element();
                let classification = kind::classify(&element);
                if classification.kind == Kind::U8 {
                    property.ty = Some(PrimitiveType::String);
                } else if classification.ty.is_some() {
                    property.items = Some(Box::new(Property::from_type(&element)));
                }
            }
            return;
        }
    };

    if first.reflect_type().kind == Kind::U8 {
        property.ty = Some(PrimitiveType::String);
    } else {
        property.items = Some(Box::new(read(Some(first))));
    }
}

/// Describes every entry of a map. An empty map gets no properties.
fn read_map(property: &mut Property, entries: &[(&dyn Reflect, &dyn Reflect)]) {
    for &(key, value) in entries {
        property.properties.insert(key_text(key), read(Some(value)));
    }
}

fn key_text(key: &dyn Reflect) -> String {
    match key.reflect() {
        Value::Dynamic(Some(inner)) => key_text(inner),
        Value::Dynamic(None) | Value::Pointer(None) => "<nil>".into(),
        Value::Scalar(scalar) => scalar
            .text()
            .unwrap_or_else(|| format!("<{}>", key.reflect_type().name)),
        _ => format!("<{}>", key.reflect_type().name),
    }
}

fn read_struct(property: &mut Property, info: &TypeInfo, members: &[&dyn Reflect]) {
    property.begin_record();

    let fields = match &info.shape {
        Shape::Struct(fields) => fields,
        _ => return,
    };

    for (field, &value) in fields.iter().zip(members) {
        let member = match Member::resolve(field) {
            Some(member) => member,
            None => continue,
        };

        property.add_member(member, read(Some(value)));
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dynamic_keys_are_unwrapped() {
        assert_eq!("key", key_text(&json!("key")));
        assert_eq!("12", key_text(&json!(12)));
        assert_eq!("<nil>", key_text(&json!(null)));
    }

    #[test]
    fn keys_without_text_use_the_type_name() {
        assert_eq!("<std::vec::Vec>", key_text(&vec![1, 2]));
    }
}
