//! Reachable-type discovery.

use core::fmt::Debug;
use std::sync::Arc;

use crate::{
    alternate::AlternateTypeProvider,
    property::PropertiesProvider,
    reflect::{Type, TypeRegistry},
    ModelContext, Result,
};

/// Lists the types a context's model refers to, for recursive expansion.
pub trait DependencyProvider: Send + Sync + Debug {
    /// The object types directly referenced by the model of `context`, without duplicates.
    fn dependent_types(&self, context: &ModelContext) -> Result<Vec<Type>>;
}

/// Discovers dependencies through property types.
///
/// Every object type among the property types of the model, and among the element types of
/// collection properties, is a dependency. Primitives and enums are not. For a collection
/// root, the element type is the dependency.
#[derive(Debug, Clone)]
pub struct PropertyTypeDependencies {
    registry: Arc<TypeRegistry>,
    properties: Arc<dyn PropertiesProvider>,
    alternates: Arc<dyn AlternateTypeProvider>,
}

impl PropertyTypeDependencies {
    /// Discovers dependencies through `properties`.
    pub fn new(
        registry: Arc<TypeRegistry>,
        properties: Arc<dyn PropertiesProvider>,
        alternates: Arc<dyn AlternateTypeProvider>,
    ) -> Self {
        Self {
            registry,
            properties,
            alternates,
        }
    }

    fn collect(&self, ty: &Type, types: &mut Vec<Type>) {
        match ty.unwrapped() {
            Type::Collection(_, element) => self.collect(element, types),
            named @ Type::Named { .. } => {
                if !self.registry.is_enum(named) && !types.contains(named) {
                    types.push(named.clone());
                }
            }
            Type::Primitive(_) | Type::Param(_) | Type::Optional(_) => (),
        }
    }
}

impl DependencyProvider for PropertyTypeDependencies {
    fn dependent_types(&self, context: &ModelContext) -> Result<Vec<Type>> {
        let ty = self.alternates.alternate_for(context.ty());
        let mut types = Vec::new();
        match ty.unwrapped() {
            Type::Collection(_, element) => self.collect(element, &mut types),
            named @ Type::Named { .. } if !self.registry.is_enum(named) => {
                let properties =
                    self.properties
                        .properties(named, context.operation(), context.views())?;
                for property in &properties {
                    self.collect(property.ty(), &mut types);
                }
            }
            _ => (),
        }

        Ok(types)
    }
}
