use super::{Member, Property, WILDCARD_KEY};
use crate::{
    kind::{self, PrimitiveType},
    reflect::{Kind, Shape, TypeInfo},
};
use tracing::{debug, trace};

/// Builds schemas from type declarations.
#[derive(Debug, Default)]
pub(crate) struct Reader {
    /// Paths of the structs currently being expanded, innermost last.
    expanding: Vec<&'static str>,
}

impl Reader {
    pub fn read(&mut self, info: &TypeInfo) -> Property {
        let classification = kind::classify(info);
        trace!(
            path = info.path,
            kind = %classification.kind,
            ty = ?classification.ty,
            "read type"
        );

        let mut property = Property::default();
        property.apply(&classification);

        match (classification.kind, &info.shape) {
            (Kind::Seq, Shape::Seq(element)) => self.read_seq(&mut property, &element()),
            (Kind::Map, Shape::Map { value, .. }) => read_map(&mut property, &value()),
            (Kind::Struct, Shape::Struct(_)) => self.read_struct(&mut property, info),

            // Pointers are transparent, so `Option<T>` and `T` have the same schema.
            (Kind::Pointer, Shape::Pointer(pointee)) => return self.read(&pointee()),

            _ => {}
        }

        property
    }

    fn read_seq(&mut self, property: &mut Property, element: &TypeInfo) {
        let classification = kind::classify(element);
        if classification.kind == Kind::U8 {
            // Byte buffers are encoded as strings.
            property.ty = Some(PrimitiveType::String);
        } else if classification.ty.is_some() {
            property.items = Some(Box::new(self.read(element)));
        }
    }

    fn read_struct(&mut self, property: &mut Property, info: &TypeInfo) {
        property.begin_record();

        let fields = match &info.shape {
            Shape::Struct(fields) => fields,
            _ => return,
        };

        if self.expanding.contains(&info.path) {
            debug!(path = info.path, "recursive struct, leaving members undescribed");
            return;
        }

        self.expanding.push(info.path);
        for field in fields {
            let member = match Member::resolve(field) {
                Some(member) => member,
                None => continue,
            };

            let child = self.read(&(field.ty)());
            property.add_member(member, child);
        }
        self.expanding.pop();
    }
}

/// Describes the values of a map under a wildcard key, or allows any properties if
/// the value type has no schema type of its own.
fn read_map(property: &mut Property, value: &TypeInfo) {
    let classification = kind::classify(value);
    match classification.ty {
        Some(ty) => {
            let mut wildcard = Property::typed(ty);
            wildcard.format = classification.format.map(Into::into);
            property.properties.insert(WILDCARD_KEY.into(), wildcard);
        }

        None => property.additional_properties = true,
    }
}
