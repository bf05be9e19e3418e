use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Error, GenericParam, Generics};

use crate::utils;

mod attrs;
use attrs::ContainerAttrs;
mod shared;

/// Main entry point for the Describe derive macro.
pub(crate) fn derive_describe(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_describe_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_describe_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    let crate_path = utils::parse_crate_path(&input.attrs)?;
    let container = ContainerAttrs::parse(&input.attrs)?;
    let type_name = container.rename.unwrap_or_else(|| name.to_string());
    let path = quote! {
        ::core::concat!(::core::module_path!(), "::", #type_name)
    };

    let type_args: Vec<_> = input
        .generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote! { <#ident as #crate_path::reflect::Describe>::type_expr() }
        })
        .collect();

    let (descriptor, dependencies) = match &input.data {
        Data::Struct(data_struct) => {
            let fields = shared::generate_fields(&data_struct.fields, &crate_path)?;
            let description = utils::extract_doc_comment(&input.attrs)
                .map(|doc| quote! { .description(#doc) });
            let rename_all = container
                .rename_all
                .map(|rule| quote! { .rename_all(#crate_path::naming::RenameRule::#rule) });
            let field_decls = fields.decls;
            let descriptor = quote! {
                #crate_path::reflect::TypeDescriptor::object(#path)
                    .args(::std::vec![#(#type_args),*])
                    #description
                    #rename_all
                    #(#field_decls)*
            };

            (descriptor, fields.types)
        }
        Data::Enum(data_enum) => {
            if let Some(rule) = &container.rename_all {
                return Err(Error::new_spanned(
                    rule,
                    "`rename_all` is not supported on enums, use `rename` on variants",
                ));
            }
            let variants = shared::generate_variant_names(data_enum)?;
            let description = utils::extract_doc_comment(&input.attrs)
                .map(|doc| quote! { .description(#doc) });
            let descriptor = quote! {
                #crate_path::reflect::TypeDescriptor::enumeration(
                    #path,
                    ::std::vec::Vec::<&'static str>::from([#(#variants),*]),
                )
                    .args(::std::vec![#(#type_args),*])
                    #description
            };

            (descriptor, Vec::new())
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input,
                "Describe derive macro does not support unions",
            ));
        }
    };

    let generics = add_describe_bounds(input.generics.clone(), &crate_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_path::reflect::Describe for #name #ty_generics #where_clause {
            fn type_expr() -> #crate_path::reflect::Type {
                #crate_path::reflect::Type::generic(#path, ::std::vec![#(#type_args),*])
            }

            fn descriptor() -> ::core::option::Option<#crate_path::reflect::TypeDescriptor> {
                ::core::option::Option::Some(#descriptor)
            }

            fn register_dependencies(
                registry: &mut #crate_path::reflect::TypeRegistry,
            ) -> #crate_path::Result<()> {
                #(registry.register::<#dependencies>()?;)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

// Every type parameter must be describable for the type to be.
fn add_describe_bounds(mut generics: Generics, crate_path: &TokenStream2) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(#crate_path::reflect::Describe));
        }
    }

    generics
}
