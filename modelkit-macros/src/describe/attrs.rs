use proc_macro2::Ident;
use syn::{meta::ParseNestedMeta, Attribute, Error, LitStr};

/// `#[model(...)]` attributes of the deriving type.
#[derive(Default)]
pub(super) struct ContainerAttrs {
    pub(super) rename: Option<String>,
    pub(super) rename_all: Option<Ident>,
}

impl ContainerAttrs {
    pub(super) fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut parsed = Self::default();
        for_each_model_meta(attrs, |meta| {
            if meta.path.is_ident("crate") {
                // Handled by `utils::parse_crate_path`.
                let _: LitStr = meta.value()?.parse()?;
            } else if meta.path.is_ident("rename") {
                parsed.rename = Some(string_value(&meta)?);
            } else if meta.path.is_ident("rename_all") {
                let rule: LitStr = meta.value()?.parse()?;
                let variant = rename_rule_variant(&rule.value()).ok_or_else(|| {
                    Error::new(rule.span(), format!("unknown rename rule `{}`", rule.value()))
                })?;
                parsed.rename_all = Some(Ident::new(variant, rule.span()));
            } else {
                return Err(meta.error("unknown `model` attribute on type"));
            }
            Ok(())
        })?;

        Ok(parsed)
    }
}

/// `#[model(...)]` attributes of a named field.
#[derive(Default)]
pub(super) struct FieldAttrs {
    pub(super) rename: Option<String>,
    pub(super) views: Vec<String>,
    pub(super) skip: bool,
    pub(super) skip_serializing: bool,
    pub(super) skip_deserializing: bool,
    pub(super) required: bool,
    pub(super) allowable_values: Vec<String>,
}

impl FieldAttrs {
    pub(super) fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut parsed = Self::default();
        for_each_model_meta(attrs, |meta| {
            if meta.path.is_ident("rename") {
                parsed.rename = Some(string_value(&meta)?);
            } else if meta.path.is_ident("view") {
                parsed.views.push(string_value(&meta)?);
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("skip_serializing") {
                parsed.skip_serializing = true;
            } else if meta.path.is_ident("skip_deserializing") {
                parsed.skip_deserializing = true;
            } else if meta.path.is_ident("required") {
                parsed.required = true;
            } else if meta.path.is_ident("allowable_values") {
                let values = string_value(&meta)?;
                parsed.allowable_values = values
                    .split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_owned)
                    .collect();
            } else {
                return Err(meta.error("unknown `model` attribute on field"));
            }
            Ok(())
        })?;

        Ok(parsed)
    }
}

/// `#[model(...)]` attributes of an enum variant.
#[derive(Default)]
pub(super) struct VariantAttrs {
    pub(super) rename: Option<String>,
}

impl VariantAttrs {
    pub(super) fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut parsed = Self::default();
        for_each_model_meta(attrs, |meta| {
            if meta.path.is_ident("rename") {
                parsed.rename = Some(string_value(&meta)?);
            } else {
                return Err(meta.error("unknown `model` attribute on variant"));
            }
            Ok(())
        })?;

        Ok(parsed)
    }
}

fn for_each_model_meta(
    attrs: &[Attribute],
    mut f: impl FnMut(ParseNestedMeta<'_>) -> Result<(), Error>,
) -> Result<(), Error> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("model")) {
        attr.parse_nested_meta(&mut f)?;
    }

    Ok(())
}

fn string_value(meta: &ParseNestedMeta<'_>) -> Result<String, Error> {
    let lit: LitStr = meta.value()?.parse()?;
    let value = lit.value();
    if value.is_empty() {
        return Err(Error::new(lit.span(), "value must not be empty"));
    }

    Ok(value)
}

// Keep in sync with `RenameRule::from_name`.
fn rename_rule_variant(name: &str) -> Option<&'static str> {
    let variant = match name {
        "lowercase" => "LowerCase",
        "UPPERCASE" => "UpperCase",
        "PascalCase" => "PascalCase",
        "camelCase" => "CamelCase",
        "snake_case" => "SnakeCase",
        "SCREAMING_SNAKE_CASE" => "ScreamingSnakeCase",
        "kebab-case" => "KebabCase",
        _ => return None,
    };

    Some(variant)
}
