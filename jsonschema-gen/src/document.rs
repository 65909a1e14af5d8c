use crate::{error::Result, property::Property, reflect::Reflect};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt;
use tracing::debug;

/// The dialect used when a document doesn't specify one.
pub const DEFAULT_SCHEMA: &str = "http://json-schema.org/schema#";

/// A JSON Schema document, consisting of a dialect identifier and a root schema.
///
/// The document derefs to its root [`Property`](struct.Property.html).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, DerefMut)]
pub struct Document {
    #[serde(rename = "$schema", default, skip_serializing_if = "String::is_empty")]
    pub schema: String,

    #[serde(flatten)]
    #[deref]
    #[deref_mut]
    pub root: Property,
}

impl Document {
    /// Creates an empty document for the specified dialect.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            root: Property::default(),
        }
    }

    /// Reads the structure of `T` into the document.
    pub fn read_type<T: Reflect>(&mut self) {
        self.set_default_schema();
        debug!(path = std::any::type_name::<T>(), "reading schema from type");
        self.root = Property::from_type(&T::type_info());
    }

    /// Reads the structure of `value`'s type into the document.
    ///
    /// Only the type is inspected, not the contents of the value. Use
    /// [`read_deep`](#method.read_deep) to describe the contents.
    pub fn read<T: Reflect + ?Sized>(&mut self, value: &T) {
        self.set_default_schema();
        let info = value.reflect_type();
        debug!(path = info.path, "reading schema from type");
        self.root = Property::from_type(&info);
    }

    /// Reads the structure of `value` into the document, walking its contents.
    pub fn read_deep<T: Reflect>(&mut self, value: &T) {
        self.set_default_schema();
        debug!(path = std::any::type_name::<T>(), "reading schema from value");
        self.root = Property::from_value(value);
    }

    fn set_default_schema(&mut self) {
        if self.schema.is_empty() {
            self.schema = DEFAULT_SCHEMA.into();
        }
    }

    /// Returns the indented JSON encoding of the document.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Formats the indented JSON encoding of the document. Nothing is written if the
/// document can't be encoded; use [`Document::marshal`] to observe the error.
///
/// [`Document::marshal`]: struct.Document.html#method.marshal
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .marshal()
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default();
        f.write_str(&text)
    }
}
