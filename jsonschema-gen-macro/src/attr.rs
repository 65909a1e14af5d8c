//! Parsing of the field attributes that determine a field's serialization tag.

use syn::*;

/// The tag information collected from a field's attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// A tag given verbatim with `#[reflect(tag = "...")]`.
    explicit_tag: Option<String>,

    pub embedded: bool,

    rename: Option<String>,
    skip: bool,
    omit_empty: bool,
}

impl FieldAttrs {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        for attr in &field.attrs {
            if attr.path.is_ident("reflect") {
                attrs.parse_reflect(attr)?;
            } else if attr.path.is_ident("serde") {
                attrs.parse_serde(attr);
            }
        }

        Ok(attrs)
    }

    /// Returns the tag for the field, in the form `name,option,option`.
    pub fn tag(&self) -> String {
        if let Some(tag) = &self.explicit_tag {
            return tag.clone();
        }

        let name = if self.skip {
            "-"
        } else {
            self.rename.as_deref().unwrap_or_default()
        };

        if self.omit_empty {
            format!("{},omitempty", name)
        } else {
            name.to_owned()
        }
    }

    fn parse_reflect(&mut self, attr: &Attribute) -> syn::Result<()> {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            meta => {
                return Err(Error::new_spanned(
                    meta,
                    "Expected `#[reflect(tag = \"...\")]` or `#[reflect(embed)]`",
                ))
            }
        };

        for nested in list.nested {
            match nested {
                NestedMeta::Meta(Meta::NameValue(MetaNameValue {
                    path,
                    lit: Lit::Str(tag),
                    ..
                })) if path.is_ident("tag") => {
                    self.explicit_tag = Some(tag.value());
                }

                NestedMeta::Meta(Meta::Path(path)) if path.is_ident("embed") => {
                    self.embedded = true;
                }

                other => {
                    return Err(Error::new_spanned(
                        other,
                        "Unknown `reflect` attribute, expected `tag = \"...\"` or `embed`",
                    ))
                }
            }
        }

        Ok(())
    }

    // NOTE: Malformed or unrecognized serde attributes are ignored here, since serde's
    // own derives are responsible for reporting them.
    fn parse_serde(&mut self, attr: &Attribute) {
        let list = match attr.parse_meta() {
            Ok(Meta::List(list)) => list,
            _ => return,
        };

        for nested in list.nested {
            let meta = match nested {
                NestedMeta::Meta(meta) => meta,
                NestedMeta::Lit(_) => continue,
            };

            match meta {
                Meta::NameValue(MetaNameValue {
                    path,
                    lit: Lit::Str(name),
                    ..
                }) if path.is_ident("rename") => {
                    self.rename = Some(name.value());
                }

                // `rename(serialize = "...", deserialize = "...")`
                Meta::List(list) if list.path.is_ident("rename") => {
                    for nested in list.nested {
                        if let NestedMeta::Meta(Meta::NameValue(MetaNameValue {
                            path,
                            lit: Lit::Str(name),
                            ..
                        })) = nested
                        {
                            if path.is_ident("serialize") {
                                self.rename = Some(name.value());
                            }
                        }
                    }
                }

                Meta::Path(path)
                    if path.is_ident("skip") || path.is_ident("skip_serializing") =>
                {
                    self.skip = true;
                }

                Meta::Path(path) if path.is_ident("flatten") => {
                    self.embedded = true;
                }

                Meta::Path(path) if path.is_ident("default") => {
                    self.omit_empty = true;
                }

                Meta::NameValue(MetaNameValue { path, .. })
                    if path.is_ident("skip_serializing_if") || path.is_ident("default") =>
                {
                    self.omit_empty = true;
                }

                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(field: Field) -> FieldAttrs {
        FieldAttrs::from_field(&field).unwrap()
    }

    fn named_field(tokens: proc_macro2::TokenStream) -> Field {
        let fields: FieldsNamed = parse_quote!({ #tokens });
        fields.named.into_iter().next().unwrap()
    }

    #[test]
    fn plain_field() {
        let field = named_field(quote::quote!(foo: u32));
        assert_eq!("", attrs(field).tag());
    }

    #[test]
    fn explicit_tag_wins() {
        let field = named_field(quote::quote! {
            #[serde(rename = "ignored")]
            #[reflect(tag = "bar,omitempty")]
            foo: u32
        });
        assert_eq!("bar,omitempty", attrs(field).tag());
    }

    #[test]
    fn serde_attributes() {
        let field = named_field(quote::quote! {
            #[serde(rename = "bar", skip_serializing_if = "Option::is_none")]
            foo: Option<u32>
        });
        assert_eq!("bar,omitempty", attrs(field).tag());

        let field = named_field(quote::quote! {
            #[serde(default)]
            foo: u32
        });
        assert_eq!(",omitempty", attrs(field).tag());

        let field = named_field(quote::quote! {
            #[serde(skip)]
            foo: u32
        });
        assert_eq!("-", attrs(field).tag());

        let field = named_field(quote::quote! {
            #[serde(rename(serialize = "out", deserialize = "in"))]
            foo: u32
        });
        assert_eq!("out", attrs(field).tag());
    }

    #[test]
    fn embedded() {
        let field = named_field(quote::quote! {
            #[serde(flatten)]
            base: Base
        });
        assert!(attrs(field).embedded);

        let field = named_field(quote::quote! {
            #[reflect(embed)]
            base: Base
        });
        assert!(attrs(field).embedded);
    }

    #[test]
    fn unknown_reflect_attribute() {
        let field = named_field(quote::quote! {
            #[reflect(bogus)]
            foo: u32
        });
        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
