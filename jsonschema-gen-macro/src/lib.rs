extern crate proc_macro;

use syn::*;

mod attr;
mod strukt;

/// Derives `Reflect` for a struct with named fields.
///
/// The serialization tag of each field is taken from `#[reflect(tag = "...")]` if
/// present, and otherwise built from the field's serde attributes:
///
/// * `rename = "name"` renames the field.
/// * `skip` or `skip_serializing` excludes the field.
/// * `skip_serializing_if = "..."` or `default` marks the field as optional.
/// * `flatten` embeds the field's members into the parent.
///
/// `#[reflect(embed)]` also embeds the field.
#[proc_macro_derive(Reflect, attributes(reflect, serde))]
pub fn derive_reflect(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    let result = match &input.data {
        Data::Struct(data) => strukt::quote_struct_item(&input, data),

        Data::Enum(data) => Err(Error::new_spanned(
            data.enum_token,
            "Enums are not supported with `#[derive(Reflect)]`",
        )),

        Data::Union(data) => Err(Error::new_spanned(
            data.union_token,
            "Unions are not supported with `#[derive(Reflect)]`",
        )),
    };

    result.unwrap_or_else(|err| err.to_compile_error()).into()
}
