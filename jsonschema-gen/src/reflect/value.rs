use crate::reflect::Reflect;

/// A borrowed view of a value's contents.
///
/// `None` in a `Pointer` or `Dynamic` slot represents an absent value, e.g. an
/// `Option` that is `None` or a JSON `null`.
pub enum Value<'a> {
    Scalar(Scalar<'a>),
    Seq(Vec<&'a dyn Reflect>),
    Map(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),

    /// Member values, in the same order as the fields of the type's `Shape::Struct`.
    Struct(Vec<&'a dyn Reflect>),

    Pointer(Option<&'a dyn Reflect>),
    Dynamic(Option<&'a dyn Reflect>),
}

/// The payload of a primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Char(char),
    Str(&'a str),

    /// A value with no textual payload.
    Opaque,
}

impl Scalar<'_> {
    /// Returns the text of the value, if it has a natural textual form.
    pub fn text(&self) -> Option<String> {
        Some(match *self {
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Uint(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Char(value) => value.to_string(),
            Scalar::Str(value) => value.to_owned(),
            Scalar::Opaque => return None,
        })
    }
}
