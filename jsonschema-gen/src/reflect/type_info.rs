use crate::reflect::{Reflect, TypeName};
use strum::{Display, EnumIter};

/// The structural kind of a type.
///
/// `U8` doubles as the raw byte kind: a sequence of `U8` is treated as encoded
/// binary data rather than as an array of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    Seq,
    Struct,
    Map,
    Pointer,
    Dynamic,
}

/// Describes the declared structure of a type.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: TypeName,

    /// The compiler's path for the type, as returned by `std::any::type_name`.
    ///
    /// Unlike `name` this includes generic arguments, so it uniquely identifies a
    /// concrete type.
    pub path: &'static str,

    pub kind: Kind,
    pub shape: Shape,
}

/// The parts of a type that can be walked into.
///
/// Nested types are referenced through constructor functions rather than stored
/// directly, which allows recursive types to be described without expanding them
/// forever.
#[derive(Debug, Clone)]
pub enum Shape {
    Scalar,
    Seq(fn() -> TypeInfo),
    Map {
        key: fn() -> TypeInfo,
        value: fn() -> TypeInfo,
    },
    Struct(Vec<Field>),
    Pointer(fn() -> TypeInfo),
    Dynamic,
}

/// A member declared on a struct.
#[derive(Debug, Clone)]
pub struct Field {
    /// The member's identifier in the Rust source.
    pub name: &'static str,

    /// The serialization tag for the member, in the form `name,option,option`.
    pub tag: &'static str,

    /// Whether the member's own members are spliced into the parent.
    pub embedded: bool,

    pub ty: fn() -> TypeInfo,
}

impl TypeInfo {
    pub fn scalar<T: ?Sized>(name: TypeName, kind: Kind) -> Self {
        Self::new::<T>(name, kind, Shape::Scalar)
    }

    pub fn seq<T: ?Sized, E: Reflect>(name: TypeName) -> Self {
        Self::new::<T>(name, Kind::Seq, Shape::Seq(E::type_info))
    }

    pub fn map<T: ?Sized, K: Reflect, V: Reflect>(name: TypeName) -> Self {
        Self::new::<T>(
            name,
            Kind::Map,
            Shape::Map {
                key: K::type_info,
                value: V::type_info,
            },
        )
    }

    pub fn record<T: ?Sized>(name: TypeName, fields: Vec<Field>) -> Self {
        Self::new::<T>(name, Kind::Struct, Shape::Struct(fields))
    }

    pub fn pointer<T: ?Sized, P: Reflect>(name: TypeName) -> Self {
        Self::new::<T>(name, Kind::Pointer, Shape::Pointer(P::type_info))
    }

    pub fn dynamic<T: ?Sized>(name: TypeName) -> Self {
        Self::new::<T>(name, Kind::Dynamic, Shape::Dynamic)
    }

    fn new<T: ?Sized>(name: TypeName, kind: Kind, shape: Shape) -> Self {
        Self {
            name,
            path: std::any::type_name::<T>(),
            kind,
            shape,
        }
    }
}
