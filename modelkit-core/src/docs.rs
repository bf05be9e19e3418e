//! Type-level documentation lookup.

use core::fmt::Debug;

use crate::reflect::{Type, TypeRegistry};

/// Finds the free-text description of a type.
pub trait DocumentationLookup: Send + Sync + Debug {
    /// The description of `ty`, if it has one.
    fn description(&self, registry: &TypeRegistry, ty: &Type) -> Option<String>;
}

/// Reads the description declared on the type descriptor (doc comments, for derived types).
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorDocumentation;

impl DocumentationLookup for DescriptorDocumentation {
    fn description(&self, registry: &TypeRegistry, ty: &Type) -> Option<String> {
        let resolved = registry.resolve(ty).ok()?;

        resolved
            .descriptor()
            .type_description()
            .map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::TypeDescriptor;

    #[test]
    fn descriptor_description() {
        let mut registry = TypeRegistry::new();
        registry
            .insert(TypeDescriptor::object("app::User").description("A user."))
            .unwrap()
            .insert(TypeDescriptor::object("app::Plain"))
            .unwrap();

        let docs = DescriptorDocumentation;
        assert_eq!(
            docs.description(&registry, &Type::named("app::User")),
            Some("A user.".to_string())
        );
        assert_eq!(docs.description(&registry, &Type::named("app::Plain")), None);
        assert_eq!(docs.description(&registry, &Type::named("app::Missing")), None);
    }
}
