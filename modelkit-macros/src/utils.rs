use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Error};

/// Parse the crate path from attributes, defaulting to `::modelkit`.
///
/// Looks for `#[model(crate = "...")]` attribute and uses the specified crate path.
///
/// # Examples
///
/// ```ignore
/// #[derive(Describe)]
/// #[model(crate = "modelkit_core")]
/// struct MyStruct;
/// ```
pub(crate) fn parse_crate_path(attrs: &[Attribute]) -> Result<TokenStream2, Error> {
    for attr in attrs {
        if attr.path().is_ident("model") {
            let mut result = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let value = meta.value()?;
                    let lit_str: syn::LitStr = value.parse()?;
                    result = Some(syn::parse_str(&lit_str.value())?);
                } else if meta.input.peek(syn::Token![=]) {
                    // Container attributes are validated by `ContainerAttrs`.
                    let _ = meta.value()?;
                    let _: syn::Expr = meta.input.parse()?;
                }
                Ok(())
            })?;

            if let Some(path) = result {
                return Ok(path);
            }
        }
    }

    Ok(quote! { ::modelkit })
}

/// Extract the doc comment of an item as one string.
///
/// Lines are trimmed and joined with newlines. Returns `None` when there are no doc comments
/// or all of them are blank.
pub(crate) fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(meta_name_value) = &attr.meta {
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) = &meta_name_value.value
            {
                lines.push(lit_str.value().trim().to_owned());
            }
        }
    }

    let comment = lines.join("\n").trim().to_owned();
    (!comment.is_empty()).then_some(comment)
}
