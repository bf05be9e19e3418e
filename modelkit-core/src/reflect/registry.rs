//! The registry of known type descriptors.

use std::{collections::HashMap, sync::Arc};

use crate::{
    view::{View, ViewHierarchy},
    Error, Result,
};

use super::{Describe, Type, TypeDescriptor};

/// The set of object and enum types the resolver knows about, together with the view
/// hierarchy.
///
/// Concrete descriptors are keyed by their full type, generic templates by their path. A
/// concrete descriptor always takes precedence over a template.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    instances: HashMap<Type, Arc<TypeDescriptor>>,
    templates: HashMap<String, Arc<TypeDescriptor>>,
    views: ViewHierarchy,
}

/// A descriptor matched to a concrete type.
#[derive(Debug, Clone)]
pub struct ResolvedType {
    ty: Type,
    descriptor: Arc<TypeDescriptor>,
    bindings: Vec<(String, Type)>,
}

impl ResolvedType {
    /// The concrete type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The matching descriptor (possibly a template).
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Generic parameters of the descriptor bound to the arguments of the type.
    pub fn bindings(&self) -> &[(String, Type)] {
        &self.bindings
    }
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, replacing any previous one for the same type.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Result<&mut Self> {
        match descriptor.parent_type() {
            Some(_) if descriptor.is_enum() => {
                return Err(invalid(&descriptor, "an enum cannot have a parent"));
            }
            Some(Type::Named { .. }) | None => (),
            Some(parent) => {
                return Err(invalid(
                    &descriptor,
                    &format!("parent `{parent}` is not a named type"),
                ));
            }
        }

        let descriptor = Arc::new(descriptor);
        if descriptor.is_template() {
            self.templates
                .insert(descriptor.path().to_owned(), descriptor);
        } else {
            self.instances.insert(descriptor.ty(), descriptor);
        }

        Ok(self)
    }

    /// Registers `T` and every type it refers to.
    pub fn register<T: Describe + ?Sized>(&mut self) -> Result<&mut Self> {
        let Some(descriptor) = T::descriptor() else {
            T::register_dependencies(self)?;
            return Ok(self);
        };
        if self.instances.contains_key(&descriptor.ty()) {
            return Ok(self);
        }

        // Inserted before recursing, so recursive types terminate.
        self.insert(descriptor)?;
        T::register_dependencies(self)?;

        Ok(self)
    }

    /// Declares that `view` extends each of `parents`.
    pub fn declare_view<I, P>(&mut self, view: impl Into<View>, parents: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<View>,
    {
        self.views.declare(view, parents);
        self
    }

    /// The view hierarchy.
    pub fn views(&self) -> &ViewHierarchy {
        &self.views
    }

    /// Whether a descriptor (concrete or template) exists for `ty`.
    pub fn contains(&self, ty: &Type) -> bool {
        self.resolve(ty).is_ok()
    }

    /// Finds the descriptor of a named type.
    ///
    /// An exact match is preferred; otherwise a template with the same path and arity is
    /// used, with its parameters bound to the arguments of `ty`.
    pub fn resolve(&self, ty: &Type) -> Result<ResolvedType> {
        let ty = ty.unwrapped();
        if let Some(descriptor) = self.instances.get(ty) {
            return Ok(ResolvedType {
                ty: ty.clone(),
                descriptor: descriptor.clone(),
                bindings: Vec::new(),
            });
        }

        let Type::Named { path, args } = ty else {
            return Err(Error::UnknownType(ty.to_string()));
        };
        match self.templates.get(path) {
            Some(template) if template.generic_params().len() == args.len() => {
                let bindings = template
                    .generic_params()
                    .iter()
                    .cloned()
                    .zip(args.iter().cloned())
                    .collect();

                Ok(ResolvedType {
                    ty: ty.clone(),
                    descriptor: template.clone(),
                    bindings,
                })
            }
            _ => Err(Error::UnknownType(ty.to_string())),
        }
    }

    /// Whether `ty` is a registered enum.
    pub fn is_enum(&self, ty: &Type) -> bool {
        self.resolve(ty)
            .map(|resolved| resolved.descriptor.is_enum())
            .unwrap_or(false)
    }

    /// The variant names of `ty` if it is a registered enum.
    pub fn enum_values(&self, ty: &Type) -> Option<Vec<String>> {
        let resolved = self.resolve(ty).ok()?;

        resolved.descriptor.variants().map(<[String]>::to_vec)
    }

    /// The natural name of a type.
    ///
    /// Primitives use their base name, enums are reported as `string`, collections by
    /// their container name and other named types by their simple name, with generic
    /// arguments rendered as `Page«User»`.
    pub fn type_name(&self, ty: &Type) -> String {
        let ty = ty.unwrapped();
        match ty {
            Type::Primitive(primitive) => primitive.name().to_owned(),
            Type::Collection(kind, _) => kind.name().to_owned(),
            Type::Param(name) => name.clone(),
            Type::Named { args, .. } => {
                if self.is_enum(ty) {
                    return "string".to_owned();
                }
                let name = ty.simple_name().to_owned();
                if args.is_empty() {
                    return name;
                }
                let args = args
                    .iter()
                    .map(|arg| self.type_name(arg))
                    .collect::<Vec<_>>()
                    .join(",");

                format!("{name}«{args}»")
            }
            Type::Optional(inner) => self.type_name(inner),
        }
    }
}

fn invalid(descriptor: &TypeDescriptor, reason: &str) -> Error {
    Error::InvalidDescriptor {
        ty: descriptor.ty().to_string(),
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{MemberAttrs, Primitive};

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .insert(
                TypeDescriptor::object("app::Page")
                    .generics(["T"])
                    .field("items", Type::list(Type::param("T")), MemberAttrs::new()),
            )
            .unwrap()
            .insert(TypeDescriptor::object("app::User"))
            .unwrap()
            .insert(TypeDescriptor::enumeration("app::Status", ["ON", "OFF"]))
            .unwrap();
        registry
    }

    #[test]
    fn resolve_template() {
        let registry = registry();
        let page = Type::generic("app::Page", vec![Type::named("app::User")]);

        let resolved = registry.resolve(&page).unwrap();
        assert_eq!(resolved.ty(), &page);
        assert!(resolved.descriptor().is_template());
        assert_eq!(
            resolved.bindings(),
            &[("T".to_string(), Type::named("app::User"))]
        );

        // Arity must match.
        let wrong = Type::generic(
            "app::Page",
            vec![Type::named("app::User"), Type::named("app::User")],
        );
        assert_eq!(
            registry.resolve(&wrong).unwrap_err(),
            Error::UnknownType("app::Page<app::User, app::User>".into())
        );
    }

    #[test]
    fn concrete_descriptor_wins() {
        let mut registry = registry();
        registry
            .insert(
                TypeDescriptor::object("app::Page")
                    .args(vec![Type::named("app::User")])
                    .description("users"),
            )
            .unwrap();

        let page = Type::generic("app::Page", vec![Type::named("app::User")]);
        let resolved = registry.resolve(&page).unwrap();
        assert!(resolved.bindings().is_empty());
        assert_eq!(resolved.descriptor().type_description(), Some("users"));
    }

    #[test]
    fn unknown_and_invalid() {
        let mut registry = registry();
        assert_eq!(
            registry.resolve(&Type::named("app::Missing")).unwrap_err(),
            Error::UnknownType("app::Missing".into())
        );
        assert!(!registry.contains(&Primitive::Int.into()));

        let err = registry
            .insert(TypeDescriptor::object("app::Bad").parent(Primitive::Int.into()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor { .. }));
    }

    #[test]
    fn type_names() {
        let registry = registry();
        assert_eq!(registry.type_name(&Primitive::Long.into()), "long");
        assert_eq!(registry.type_name(&Type::named("app::Status")), "string");
        assert_eq!(
            registry.type_name(&Type::list(Type::named("app::User"))),
            "List"
        );
        assert_eq!(
            registry.type_name(&Type::optional(Type::generic(
                "app::Page",
                vec![Type::named("app::User")]
            ))),
            "Page«User»"
        );
        assert_eq!(
            registry.enum_values(&Type::named("app::Status")),
            Some(vec!["ON".to_string(), "OFF".to_string()])
        );
        assert!(registry.is_enum(&Type::optional(Type::named("app::Status"))));
    }
}
