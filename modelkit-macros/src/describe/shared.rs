use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DataEnum, Error, Fields, FieldsNamed, FieldsUnnamed, Type};

use crate::utils;

use super::attrs::{FieldAttrs, VariantAttrs};

/// The generated field declarations of a struct, with the field types to register.
pub(super) struct GeneratedFields {
    pub(super) decls: Vec<TokenStream2>,
    pub(super) types: Vec<Type>,
}

/// Generate `.field(...)` builder calls for struct fields.
///
/// Skipped fields are left out of the descriptor entirely, so their types need not be
/// describable.
pub(super) fn generate_fields(
    fields: &Fields,
    crate_path: &TokenStream2,
) -> Result<GeneratedFields, Error> {
    let mut generated = GeneratedFields {
        decls: Vec::new(),
        types: Vec::new(),
    };

    let named = match fields {
        Fields::Named(FieldsNamed { named, .. }) => named,
        Fields::Unnamed(FieldsUnnamed { unnamed, .. }) => {
            return Err(Error::new_spanned(
                unnamed,
                "Only named fields are supported",
            ));
        }
        // Unit structs have no fields.
        Fields::Unit => return Ok(generated),
    };

    for field in named {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let field_name_str = field_name.to_string();
        let field_type = &field.ty;
        let member_attrs = generate_member_attrs(
            &attrs,
            utils::extract_doc_comment(&field.attrs),
            crate_path,
        );

        generated.decls.push(quote! {
            .field(
                #field_name_str,
                <#field_type as #crate_path::reflect::Describe>::type_expr(),
                #member_attrs,
            )
        });
        generated.types.push(field_type.clone());
    }

    Ok(generated)
}

fn generate_member_attrs(
    attrs: &FieldAttrs,
    description: Option<String>,
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let rename = attrs.rename.as_ref().map(|name| quote! { .rename(#name) });
    let views = &attrs.views;
    let skip_serializing = attrs.skip_serializing.then(|| quote! { .skip_serializing() });
    let skip_deserializing = attrs
        .skip_deserializing
        .then(|| quote! { .skip_deserializing() });
    let required = attrs.required.then(|| quote! { .required() });
    let description = description.map(|doc| quote! { .description(#doc) });
    let allowable_values = (!attrs.allowable_values.is_empty()).then(|| {
        let values = &attrs.allowable_values;
        quote! { .allowable_values([#(#values),*]) }
    });

    quote! {
        #crate_path::reflect::MemberAttrs::new()
            #rename
            #(.view(#views))*
            #skip_serializing
            #skip_deserializing
            #required
            #description
            #allowable_values
    }
}

/// Collect the wire names of unit enum variants.
pub(super) fn generate_variant_names(data_enum: &DataEnum) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();

    for variant in &data_enum.variants {
        match &variant.fields {
            Fields::Unit => {
                let attrs = VariantAttrs::parse(&variant.attrs)?;
                names.push(attrs.rename.unwrap_or_else(|| variant.ident.to_string()));
            }
            Fields::Named(_) => {
                return Err(Error::new_spanned(
                    variant,
                    "Describe derive macro only supports unit enum variants, not struct \
                     variants",
                ));
            }
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    variant,
                    "Describe derive macro only supports unit enum variants, not tuple \
                     variants",
                ));
            }
        }
    }

    Ok(names)
}
