//! The schema tree and the walkers that build it.
//!
//! There are two ways of building a schema for a type:
//!
//! * [`Property::from_type`] only looks at the declared type. Collections are
//!   described by their declared element type, and dynamically-typed slots can't
//!   be described at all.
//! * [`Property::from_value`] walks a concrete value, so the actual contents of
//!   maps, the elements of sequences, and the payloads of dynamic slots are used.
//!
//! The two modes deliberately disagree for empty maps: the type-only walk
//! describes the value type under a `.*` wildcard key, while the value walk has no
//! entries to describe and leaves `properties` unset.
//!
//! [`Property::from_type`]: struct.Property.html#method.from_type
//! [`Property::from_value`]: struct.Property.html#method.from_value

use crate::{
    kind::{Classification, PrimitiveType},
    reflect::{Field, Reflect, TypeInfo},
    tag::{self, TagOptions},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod deep;
mod shallow;

/// Key used to describe the values of a map whose keys aren't known.
pub const WILDCARD_KEY: &str = ".*";

/// A node in the schema tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<PrimitiveType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub additional_properties: bool,
}

impl Property {
    /// Builds the schema for a type from its declaration alone.
    pub fn from_type(info: &TypeInfo) -> Self {
        shallow::Reader::default().read(info)
    }

    /// Builds the schema for a concrete value.
    pub fn from_value(value: &dyn Reflect) -> Self {
        deep::read(Some(value))
    }

    fn typed(ty: PrimitiveType) -> Self {
        Self {
            ty: Some(ty),
            ..Self::default()
        }
    }

    fn apply(&mut self, classification: &Classification) {
        if let Some(ty) = classification.ty {
            self.ty = Some(ty);
        }
        if let Some(format) = classification.format {
            self.format = Some(format.into());
        }
    }

    /// Prepares the node to receive the members of a struct.
    fn begin_record(&mut self) {
        self.ty = Some(PrimitiveType::Object);
        self.properties = BTreeMap::new();
        self.additional_properties = false;
    }

    /// Adds the schema of a struct member to the node.
    ///
    /// Embedded members have their own members spliced into this node rather than
    /// being nested under a name.
    fn add_member(&mut self, member: Member<'_>, child: Property) {
        if member.embedded {
            self.properties.extend(child.properties);
            self.required.extend(child.required);
            return;
        }

        if !member.options.contains(tag::OMIT_EMPTY) {
            self.required.push(member.name.to_owned());
        }
        self.properties.insert(member.name.to_owned(), child);
    }
}

/// A struct member with its serialization tag resolved.
struct Member<'a> {
    name: &'a str,
    options: TagOptions<'a>,
    embedded: bool,
}

impl<'a> Member<'a> {
    /// Resolves the member's name from its tag, returning `None` if the member is
    /// excluded.
    fn resolve(field: &'a Field) -> Option<Self> {
        let (name, options) = tag::parse(field.tag);
        let name = if name.is_empty() { field.name } else { name };
        if name == tag::SKIP {
            return None;
        }

        Some(Self {
            name,
            options,
            embedded: field.embedded,
        })
    }
}
