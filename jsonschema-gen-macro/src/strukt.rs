use crate::attr::FieldAttrs;
use proc_macro2::TokenStream;
use quote::*;
use syn::{ext::IdentExt, *};

/// Generates the `Reflect` impl for a struct.
pub fn quote_struct_item(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,

        Fields::Unnamed(fields) => {
            return Err(Error::new_spanned(
                fields,
                "Tuple structs are not supported with `#[derive(Reflect)]`",
            ))
        }

        Fields::Unit => {
            return Err(Error::new_spanned(
                &input.ident,
                "Unit structs are not supported with `#[derive(Reflect)]`",
            ))
        }
    };

    let ident = &input.ident;
    let generics = add_reflect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // For each field we generate the field's descriptor for `type_info`, and the
    // expression that borrows the field for `reflect`. The two lists must stay in
    // the same order.
    let mut descriptors = Vec::with_capacity(fields.len());
    let mut members = Vec::with_capacity(fields.len());
    for field in fields {
        let field_ident = match &field.ident {
            Some(ident) => ident,
            None => return Err(Error::new_spanned(field, "Expected a named field")),
        };

        let attrs = FieldAttrs::from_field(field)?;
        let name = field_ident.unraw().to_string();
        let tag = attrs.tag();
        let embedded = attrs.embedded;
        let ty = &field.ty;

        descriptors.push(quote! {
            jsonschema_gen::reflect::Field {
                name: #name,
                tag: #tag,
                embedded: #embedded,
                ty: <#ty as jsonschema_gen::reflect::Reflect>::type_info,
            }
        });

        members.push(quote! {
            &self.#field_ident as &dyn jsonschema_gen::reflect::Reflect
        });
    }

    Ok(quote! {
        impl #impl_generics jsonschema_gen::reflect::Reflect for #ident #ty_generics #where_clause {
            fn type_info() -> jsonschema_gen::reflect::TypeInfo {
                jsonschema_gen::reflect::TypeInfo::record::<Self>(
                    jsonschema_gen::type_name!(#ident),
                    std::vec![ #( #descriptors, )* ],
                )
            }

            fn reflect_type(&self) -> jsonschema_gen::reflect::TypeInfo {
                <Self as jsonschema_gen::reflect::Reflect>::type_info()
            }

            fn reflect(&self) -> jsonschema_gen::reflect::Value<'_> {
                jsonschema_gen::reflect::Value::Struct(std::vec![ #( #members, )* ])
            }
        }
    })
}

/// Requires every type parameter to implement `Reflect`, since the type info for
/// each field is built from the field's type.
fn add_reflect_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param
            .bounds
            .push(parse_quote!(jsonschema_gen::reflect::Reflect));
    }
    generics
}
