//! Derive JSON Schema documents from Rust types.
//!
//! ```
//! use jsonschema_gen::{prelude::*, Document};
//!
//! #[derive(Reflect)]
//! struct User {
//!     name: String,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     email: Option<String>,
//! }
//!
//! let mut document = Document::default();
//! document.read_type::<User>();
//! assert_eq!(vec!["name"], document.required);
//! ```

// Allows the code generated by `#[derive(Reflect)]` to name this crate from within it.
extern crate self as jsonschema_gen;

pub mod kind;
pub mod reflect;
pub mod tag;

mod document;
mod error;
mod property;

pub use crate::{
    document::{Document, DEFAULT_SCHEMA},
    error::{Error, Result},
    kind::PrimitiveType,
    property::{Property, WILDCARD_KEY},
};

pub mod prelude {
    pub use crate::reflect::Reflect;
    pub use jsonschema_gen_macro::*;
}
