//! Implementations of `Reflect` for primitives and types provided by the standard libary.

use crate::reflect::{Kind, Reflect, Scalar, TypeInfo, TypeName, Value};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// Generates the `Reflect` impl for primitive types.
///
/// Each entry names the type, its kind, and the `Scalar` variant that carries the
/// value. The value is widened with `as` into the variant's payload type, e.g.
/// `u16 => U16 as Uint` expands to:
///
/// ```ignore
/// impl Reflect for u16 {
///     fn type_info() -> TypeInfo {
///         TypeInfo::scalar::<Self>(TypeName::primitive("u16"), Kind::U16)
///     }
///
///     fn reflect_type(&self) -> TypeInfo {
///         Self::type_info()
///     }
///
///     fn reflect(&self) -> Value<'_> {
///         Value::Scalar(Scalar::Uint(*self as _))
///     }
/// }
/// ```
macro_rules! impl_reflect_scalar {
    ( $( $ty:ident => $kind:ident as $scalar:ident, )* ) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::scalar::<Self>(TypeName::primitive(stringify!($ty)), Kind::$kind)
                }

                fn reflect_type(&self) -> TypeInfo {
                    Self::type_info()
                }

                #[allow(clippy::unnecessary_cast)]
                fn reflect(&self) -> Value<'_> {
                    Value::Scalar(Scalar::$scalar(*self as _))
                }
            }
        )*
    }
}

impl_reflect_scalar! {
    i8 => I8 as Int,
    i16 => I16 as Int,
    i32 => I32 as Int,
    i64 => I64 as Int,
    i128 => I128 as Int,
    isize => Isize as Int,
    u8 => U8 as Uint,
    u16 => U16 as Uint,
    u32 => U32 as Uint,
    u64 => U64 as Uint,
    u128 => U128 as Uint,
    usize => Usize as Uint,
    f32 => F32 as Float,
    f64 => F64 as Float,
}

impl Reflect for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar::<Self>(TypeName::primitive("bool"), Kind::Bool)
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Bool(*self))
    }
}

impl Reflect for char {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar::<Self>(TypeName::primitive("char"), Kind::Char)
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Char(*self))
    }
}

impl Reflect for String {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar::<Self>(TypeName::new("std::string", "String"), Kind::String)
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Str(self.as_str()))
    }
}

impl<'s> Reflect for &'s str {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar::<Self>(TypeName::primitive("str"), Kind::String)
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Str(*self))
    }
}

/// Generates the `Reflect` impl for sequence types, which all iterate by reference
/// over their elements.
macro_rules! impl_reflect_seq {
    ( $( $module:literal :: $ty:ident, )* ) => {
        $(
            impl<T: Reflect> Reflect for $ty<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::seq::<Self, T>(TypeName::new($module, stringify!($ty)))
                }

                fn reflect_type(&self) -> TypeInfo {
                    Self::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    Value::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
                }
            }
        )*
    }
}

impl_reflect_seq! {
    "std::vec"::Vec,
    "std::collections"::VecDeque,
    "std::collections"::HashSet,
    "std::collections"::BTreeSet,
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::seq::<Self, T>(TypeName::primitive("array"))
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

macro_rules! impl_reflect_map {
    ( $( $ty:ident, )* ) => {
        $(
            impl<K: Reflect, V: Reflect> Reflect for $ty<K, V> {
                fn type_info() -> TypeInfo {
                    TypeInfo::map::<Self, K, V>(TypeName::new("std::collections", stringify!($ty)))
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
        )*
    }
}

impl_reflect_map! {
    HashMap,
    BTreeMap,
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::pointer::<Self, T>(TypeName::new("std::option", "Option"))
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Pointer(self.as_ref().map(|inner| inner as &dyn Reflect))
    }
}

/// Generates the `Reflect` impl for smart pointers, which always have a pointee.
macro_rules! impl_reflect_pointer {
    ( $( $module:literal :: $ty:ident, )* ) => {
        $(
            impl<T: Reflect> Reflect for $ty<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::pointer::<Self, T>(TypeName::new($module, stringify!($ty)))
                }

                fn reflect_type(&self) -> TypeInfo {
                    Self::type_info()
                }

                fn reflect(&self) -> Value<'_> {
                    Value::Pointer(Some(&**self))
                }
            }
        )*
    }
}

impl_reflect_pointer! {
    "std::boxed"::Box,
    "std::rc"::Rc,
    "std::sync"::Arc,
}

/// A slot that can hold a value of any type.
impl Reflect for Box<dyn Reflect> {
    fn type_info() -> TypeInfo {
        TypeInfo::dynamic::<Self>(TypeName::new("std::boxed", "Box<dyn Reflect>"))
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Dynamic(Some(&**self))
    }
}
