//! Alternate types: substitutes standing in for other types during resolution.

use core::fmt::Debug;

use crate::reflect::{Type, TypeRef};

/// Rewrites a type before it is resolved.
pub trait AlternateTypeProvider: Send + Sync + Debug {
    /// The type to use instead of `ty`. Returns `ty` itself when nothing applies.
    fn alternate_for(&self, ty: &Type) -> Type;
}

/// A single substitution rule.
///
/// Generic parameters in `original` match any type; the matched types are bound into
/// `alternate`. For example `Wrapper<T> => T` unwraps every `Wrapper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateTypeRule {
    original: Type,
    alternate: Type,
}

impl AlternateTypeRule {
    /// A rule replacing `original` by `alternate`.
    pub fn new(original: Type, alternate: Type) -> Self {
        Self {
            original,
            alternate,
        }
    }

    /// `alternate` with the bindings of `ty`, if `ty` matches the rule.
    pub fn apply(&self, ty: &Type) -> Option<Type> {
        let mut bindings = Vec::new();
        matches(&self.original, ty, &mut bindings).then(|| self.alternate.substitute(&bindings))
    }
}

/// An ordered list of [`AlternateTypeRule`]s. The first matching rule wins.
///
/// Rules apply to the type itself and recursively to collection elements, optional values
/// and generic arguments. An empty list is the identity substitution.
///
/// ```rust
/// use modelkit_core::{
///     alternate::{AlternateTypeProvider, AlternateTypeRules},
///     reflect::{Primitive, Type},
/// };
///
/// let rules = AlternateTypeRules::new()
///     .rule(Type::named("app::Money"), Primitive::String.into());
///
/// assert_eq!(
///     rules.alternate_for(&Type::list(Type::named("app::Money"))),
///     Type::list(Primitive::String.into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlternateTypeRules {
    rules: Vec<AlternateTypeRule>,
}

impl AlternateTypeRules {
    /// No rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn rule(mut self, original: Type, alternate: Type) -> Self {
        self.rules.push(AlternateTypeRule::new(original, alternate));
        self
    }
}

impl AlternateTypeProvider for AlternateTypeRules {
    fn alternate_for(&self, ty: &Type) -> Type {
        if let Some(alternate) = self.rules.iter().find_map(|rule| rule.apply(ty)) {
            return alternate;
        }

        match ty {
            Type::Collection(kind, element) => {
                Type::Collection(*kind, TypeRef::new(self.alternate_for(element)))
            }
            Type::Optional(inner) => Type::Optional(TypeRef::new(self.alternate_for(inner))),
            Type::Named { path, args } => Type::Named {
                path: path.clone(),
                args: args.iter().map(|arg| self.alternate_for(arg)).collect(),
            },
            Type::Primitive(_) | Type::Param(_) => ty.clone(),
        }
    }
}

fn matches(pattern: &Type, ty: &Type, bindings: &mut Vec<(String, Type)>) -> bool {
    match (pattern, ty) {
        (Type::Param(name), _) => match bindings.iter().find(|(param, _)| param == name) {
            Some((_, bound)) => bound == ty,
            None => {
                bindings.push((name.clone(), ty.clone()));
                true
            }
        },
        (Type::Collection(pattern_kind, pattern), Type::Collection(kind, element)) => {
            pattern_kind == kind && matches(pattern, element, bindings)
        }
        (Type::Optional(pattern), Type::Optional(inner)) => matches(pattern, inner, bindings),
        (
            Type::Named {
                path: pattern_path,
                args: pattern_args,
            },
            Type::Named { path, args },
        ) => {
            pattern_path == path
                && pattern_args.len() == args.len()
                && pattern_args
                    .iter()
                    .zip(args)
                    .all(|(pattern, arg)| matches(pattern, arg, bindings))
        }
        (Type::Primitive(pattern), Type::Primitive(primitive)) => pattern == primitive,
        _ => false,
    }
}
