use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use indexmap::{map::Entry, IndexMap};

use crate::{
    alternate::{AlternateTypeProvider, AlternateTypeRules},
    dependency::{DependencyProvider, PropertyTypeDependencies},
    docs::{DescriptorDocumentation, DocumentationLookup},
    introspect::{ConventionIntrospector, SerializationIntrospector},
    metadata::{DuplicatePolicy, Metadata},
    property::{DefaultPropertiesProvider, ModelProperty, PropertiesProvider},
    reflect::{Type, TypeRegistry},
    schema::{Model, ModelRef, Property},
    view::View,
    Error, ModelContext, Result,
};

/// Separates view names in model identifiers: `User` + `Public`, `Admin` is
/// `UserPublicAndAdmin`.
pub const MODEL_ID_VIEW_DELIMITER: &str = "And";

/// Natural type names reported under another wire name.
pub const DEFAULT_WIRE_NAME_OVERRIDES: &[(&str, &str)] = &[("LocalDateTime", "string")];

/// Turns types into [`Model`]s and walks the models they depend on.
///
/// ```rust
/// use modelkit_core::{
///     reflect::{MemberAttrs, Primitive, Type, TypeDescriptor, TypeRegistry},
///     ModelContext, ModelProvider,
/// };
///
/// let mut registry = TypeRegistry::new();
/// registry.insert(
///     TypeDescriptor::object("app::User")
///         .field("id", Primitive::Long, MemberAttrs::new())
///         .getter("getName", Primitive::String, MemberAttrs::new().view("Public")),
/// )?;
/// let provider = ModelProvider::builder(registry).build();
///
/// let context = ModelContext::return_value(Type::named("app::User")).with_views(["Public"]);
/// let model = provider.model_for(&context)?.expect("objects are modeled");
/// assert_eq!(model.id(), "UserPublic");
/// assert_eq!(model.to_string(), "model UserPublic (id: long, name: string)");
/// # Ok::<(), modelkit_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelProvider {
    registry: Arc<TypeRegistry>,
    alternates: Arc<dyn AlternateTypeProvider>,
    properties: Arc<dyn PropertiesProvider>,
    docs: Arc<dyn DocumentationLookup>,
    dependencies: Arc<dyn DependencyProvider>,
    wire_name_overrides: HashMap<String, String>,
}

impl ModelProvider {
    /// A builder resolving types of `registry`.
    pub fn builder(registry: impl Into<Arc<TypeRegistry>>) -> ModelProviderBuilder {
        ModelProviderBuilder::new(registry.into())
    }

    /// The registry types are resolved from.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The model of the context's type.
    ///
    /// Primitives, enums and collections have no model of their own and yield `None`. Every
    /// other registered type has one, even if it has no properties.
    pub fn model_for(&self, context: &ModelContext) -> Result<Option<Model>> {
        let substituted = self.alternates.alternate_for(context.ty());
        let ty = substituted.unwrapped();
        match ty {
            Type::Primitive(_) | Type::Collection(..) => return Ok(None),
            Type::Param(param) => {
                return Err(Error::UnboundTypeParameter {
                    ty: context.ty().to_string(),
                    param: param.clone(),
                });
            }
            Type::Named { .. } | Type::Optional(_) => (),
        }
        if self.registry.resolve(ty)?.descriptor().is_enum() {
            return Ok(None);
        }

        let id = self.model_id(ty, context.views());
        let mut properties = IndexMap::new();
        for property in self
            .properties
            .properties(ty, context.operation(), context.views())?
        {
            let position = properties.len();
            match properties.entry(property.name().to_owned()) {
                Entry::Occupied(_) => {
                    debug!("`{id}` already has a property `{}`", property.name());
                }
                Entry::Vacant(entry) => {
                    entry.insert(self.property(&property, position, context.views()));
                }
            }
        }
        debug!("Built model `{id}` with {} properties", properties.len());

        Ok(Some(Model::new(
            id,
            self.registry.type_name(ty),
            ty.qualified_name(),
            properties,
            self.docs.description(&self.registry, ty),
        )))
    }

    /// The identifier of the model of `ty` under `views`.
    ///
    /// The type name followed by the view names, in the given order, joined by
    /// [`MODEL_ID_VIEW_DELIMITER`]. Without views, the type name alone.
    pub fn model_id(&self, ty: &Type, views: &[View]) -> String {
        let mut id = self.registry.type_name(ty);
        for (i, view) in views.iter().enumerate() {
            if i > 0 {
                id.push_str(MODEL_ID_VIEW_DELIMITER);
            }
            let name = view.name();
            id.push_str(name.rsplit("::").next().unwrap_or(name));
        }

        id
    }

    /// The root model followed by every model reachable from it, by identifier.
    ///
    /// Each type is modeled at most once per call, so cyclic type graphs terminate. A
    /// discovered type that fails to resolve is logged and left out.
    pub fn dependencies(&self, context: &ModelContext) -> Result<IndexMap<String, Model>> {
        let root = Arc::new(context.clone());
        let mut models = IndexMap::new();
        let mut visited = HashSet::new();
        if let Some(model) = self.model_for(&root)? {
            visited.insert(model.id().to_owned());
            models.insert(model.id().to_owned(), model);
        }
        self.walk(&root, &mut visited, &mut models)?;

        Ok(models)
    }

    fn walk(
        &self,
        context: &Arc<ModelContext>,
        visited: &mut HashSet<String>,
        models: &mut IndexMap<String, Model>,
    ) -> Result<()> {
        for ty in self.dependencies.dependent_types(context)? {
            let child = Arc::new(ModelContext::from_parent(context, ty));
            let substituted = self.alternates.alternate_for(child.ty());
            if visited.contains(&self.model_id(&substituted, child.views())) {
                continue;
            }

            match self.model_for(&child) {
                Ok(Some(model)) => {
                    // Marked before recursing, so cycles terminate.
                    visited.insert(model.id().to_owned());
                    models.insert(model.id().to_owned(), model);
                    self.walk(&child, visited, models)?;
                }
                Ok(None) => (),
                Err(e) => warn!(
                    "Skipping dependency `{}` of `{}`: {e}",
                    child.ty(),
                    context.ty()
                ),
            }
        }

        Ok(())
    }

    fn property(&self, property: &ModelProperty, position: usize, views: &[View]) -> Property {
        let ty = property.ty();
        let items = ty.element_type().map(|element| self.item_ref(element, views));

        Property::new(self.wire_type_name(ty), ty.unwrapped().qualified_name())
            .with_position(position)
            .with_required(property.is_required())
            .with_description(property.description().map(str::to_owned))
            .with_allowable_values(property.allowable_values().to_vec())
            .with_items(items)
    }

    fn item_ref(&self, element: &Type, views: &[View]) -> ModelRef {
        let qualified_type = element.qualified_name();
        match element {
            Type::Named { .. } if !self.registry.is_enum(element) => ModelRef::Model {
                id: self.model_id(element, views),
                qualified_type,
            },
            _ => ModelRef::Inline {
                type_name: self.wire_type_name(element),
                qualified_type,
            },
        }
    }

    fn wire_type_name(&self, ty: &Type) -> String {
        let name = self.registry.type_name(ty);
        match self.wire_name_overrides.get(&name) {
            Some(wire_name) => wire_name.clone(),
            None => name,
        }
    }
}

/// Configures a [`ModelProvider`].
///
/// Every collaborator has a default: the [`ConventionIntrospector`], no alternate types,
/// descriptor documentation and property type dependencies.
#[derive(Debug)]
pub struct ModelProviderBuilder {
    registry: Arc<TypeRegistry>,
    introspector: Option<Arc<dyn SerializationIntrospector>>,
    policy: DuplicatePolicy,
    alternates: Option<Arc<dyn AlternateTypeProvider>>,
    properties: Option<Arc<dyn PropertiesProvider>>,
    docs: Option<Arc<dyn DocumentationLookup>>,
    dependencies: Option<Arc<dyn DependencyProvider>>,
    wire_name_overrides: HashMap<String, String>,
}

impl ModelProviderBuilder {
    fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            introspector: None,
            policy: DuplicatePolicy::default(),
            alternates: None,
            properties: None,
            docs: None,
            dependencies: None,
            wire_name_overrides: DEFAULT_WIRE_NAME_OVERRIDES
                .iter()
                .map(|(name, wire_name)| (name.to_string(), wire_name.to_string()))
                .collect(),
        }
    }

    /// Sets the serialization introspector.
    pub fn introspector(mut self, introspector: impl SerializationIntrospector + 'static) -> Self {
        self.introspector = Some(Arc::new(introspector));
        self
    }

    /// Sets the policy for duplicate internal property names.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the alternate-type provider.
    pub fn alternates(mut self, alternates: impl AlternateTypeProvider + 'static) -> Self {
        self.alternates = Some(Arc::new(alternates));
        self
    }

    /// Replaces the default properties provider.
    ///
    /// The introspector and duplicate policy only apply to the default provider.
    pub fn properties(mut self, properties: impl PropertiesProvider + 'static) -> Self {
        self.properties = Some(Arc::new(properties));
        self
    }

    /// Sets the type-level documentation lookup.
    pub fn documentation(mut self, docs: impl DocumentationLookup + 'static) -> Self {
        self.docs = Some(Arc::new(docs));
        self
    }

    /// Sets the reachable-type discovery used by [`ModelProvider::dependencies`].
    pub fn dependencies(mut self, dependencies: impl DependencyProvider + 'static) -> Self {
        self.dependencies = Some(Arc::new(dependencies));
        self
    }

    /// Reports the natural type name `name` as `wire_name`.
    pub fn wire_name_override(
        mut self,
        name: impl Into<String>,
        wire_name: impl Into<String>,
    ) -> Self {
        self.wire_name_overrides
            .insert(name.into(), wire_name.into());
        self
    }

    /// Builds the provider.
    pub fn build(self) -> ModelProvider {
        let registry = self.registry;
        let alternates = self
            .alternates
            .unwrap_or_else(|| Arc::new(AlternateTypeRules::new()));
        let properties = self.properties.unwrap_or_else(|| {
            let introspector = self
                .introspector
                .unwrap_or_else(|| Arc::new(ConventionIntrospector::new()));
            let metadata = Arc::new(Metadata::new(registry.clone(), introspector, self.policy));

            Arc::new(DefaultPropertiesProvider::new(metadata, alternates.clone()))
        });
        let dependencies = self.dependencies.unwrap_or_else(|| {
            Arc::new(PropertyTypeDependencies::new(
                registry.clone(),
                properties.clone(),
                alternates.clone(),
            ))
        });

        ModelProvider {
            registry,
            alternates,
            properties,
            docs: self
                .docs
                .unwrap_or_else(|| Arc::new(DescriptorDocumentation)),
            dependencies,
            wire_name_overrides: self.wire_name_overrides,
        }
    }
}
