//! Runtime description of Rust types and values.
//!
//! Rust has no runtime reflection, so any type that should be turned into a schema
//! describes itself by implementing [`Reflect`]. Implementations are provided for
//! primitives and the standard collections, and `#[derive(Reflect)]` generates them
//! for structs.
//!
//! A type is described in two ways:
//!
//! * [`TypeInfo`] describes the declared shape of a type. It is all that's needed
//!   to build a schema from the type alone.
//! * [`Value`] is a borrowed view of a concrete value, which lets the schema be
//!   built from what a value actually contains (e.g. the entries of a map or the
//!   payload of a dynamically-typed slot).
//!
//! [`Reflect`]: trait.Reflect.html
//! [`TypeInfo`]: struct.TypeInfo.html
//! [`Value`]: enum.Value.html

use std::fmt;

mod json;
mod primitive;
mod type_info;
mod value;

#[cfg(feature = "chrono")]
mod datetime;

pub use self::{
    type_info::{Field, Kind, Shape, TypeInfo},
    value::{Scalar, Value},
};

/// A type that can describe its own structure.
pub trait Reflect {
    /// Describes the declared type.
    fn type_info() -> TypeInfo
    where
        Self: Sized;

    /// Describes the type of this particular value.
    ///
    /// For most types this is the same as [`type_info`](#tymethod.type_info), but
    /// dynamically-typed values (e.g. `Box<dyn Reflect>`) and values whose kind
    /// depends on their content (e.g. `serde_json::Number`) may report a different
    /// type at runtime.
    fn reflect_type(&self) -> TypeInfo;

    /// Returns a borrowed view of the value's contents.
    fn reflect(&self) -> Value<'_>;
}

/// The name of a type, split into the module it was declared in and its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub name: &'static str,
    pub module: &'static str,
}

impl TypeName {
    /// The name of a built-in type, which doesn't belong to any module.
    pub const fn primitive(name: &'static str) -> Self {
        Self { name, module: "" }
    }

    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self { name, module }
    }

    /// Returns the fully-qualified name, e.g. `chrono::DateTime`.
    pub fn qualified(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{}::{}", self.module, self.name)
        }
    }
}

/// Creates a [`TypeName`] for a type declared in the current module.
///
/// ```
/// let name = jsonschema_gen::type_name!(Foo);
/// assert_eq!("Foo", name.name);
/// ```
///
/// [`TypeName`]: reflect/struct.TypeName.html
#[macro_export]
macro_rules! type_name {
    ($ty:ident) => {
        $crate::reflect::TypeName::new(module_path!(), stringify!($ty))
    };
}
