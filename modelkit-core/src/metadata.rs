//! The serialization-metadata index.
//!
//! The index maps the internal name of every logical property of a type to its
//! [`PropertyDefinition`] for one operation and set of active views. Indexes are built
//! through a [`SerializationIntrospector`] and cached for the lifetime of the [`Metadata`]
//! store, which is bound to one [`TypeRegistry`].

use std::{collections::HashMap, sync::Arc};

use indexmap::{map::Entry, IndexMap};
use parking_lot::RwLock;

use crate::{
    introspect::{IntrospectionRequest, PropertyDefinition, SerializationIntrospector},
    reflect::{Members, Type, TypeRegistry},
    view::View,
    Error, Operation, Result,
};

/// What to do when an introspector reports two properties with the same internal name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Fail with [`Error::DuplicateProperty`].
    #[default]
    Reject,
    /// Keep the first definition and drop the later ones.
    FirstWins,
}

/// The metadata of one type for one operation and set of active views.
#[derive(Debug, Clone)]
pub struct MetadataIndex {
    ty: Type,
    operation: Operation,
    entries: IndexMap<String, PropertyDefinition>,
}

impl MetadataIndex {
    /// Indexes `definitions` by internal name.
    pub fn build(
        ty: Type,
        operation: Operation,
        definitions: Vec<PropertyDefinition>,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        let mut entries = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            match entries.entry(definition.internal_name().to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(definition);
                }
                Entry::Occupied(entry) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateProperty {
                            ty: ty.to_string(),
                            name: entry.key().clone(),
                        });
                    }
                    DuplicatePolicy::FirstWins => {
                        debug!(
                            "Dropping duplicate property `{}` of `{ty}`",
                            entry.key()
                        );
                    }
                },
            }
        }

        Ok(Self {
            ty,
            operation,
            entries,
        })
    }

    /// The indexed type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The operation the index was built for.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The definition of the property with the given internal name.
    pub fn get(&self, internal_name: &str) -> Option<&PropertyDefinition> {
        self.entries.get(internal_name)
    }

    /// All definitions, in introspection order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.entries.values()
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the type has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type CacheKey = (Type, Operation, Vec<View>);

/// A shared, caching source of [`MetadataIndex`]es.
///
/// Indexes are built at most once per (type, operation, views) and never change afterwards,
/// so the store can be shared by concurrent resolutions. The registry is fixed at
/// construction, since indexes depend on its view hierarchy.
#[derive(Debug)]
pub struct Metadata {
    registry: Arc<TypeRegistry>,
    introspector: Arc<dyn SerializationIntrospector>,
    policy: DuplicatePolicy,
    cache: RwLock<HashMap<CacheKey, Arc<MetadataIndex>>>,
}

impl Metadata {
    /// A store reading metadata of `registry` types through `introspector`.
    pub fn new(
        registry: Arc<TypeRegistry>,
        introspector: Arc<dyn SerializationIntrospector>,
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            registry,
            introspector,
            policy,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The registry indexes are built against.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The duplicate policy in effect.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The index of the type `members` belong to.
    pub fn index_for(
        &self,
        members: &Members,
        operation: Operation,
        views: &[View],
    ) -> Result<Arc<MetadataIndex>> {
        let key = (members.ty().clone(), operation, views.to_vec());
        if let Some(index) = self.cache.read().get(&key) {
            debug!("Metadata cache hit for `{}` ({operation:?})", key.0);
            return Ok(index.clone());
        }

        trace!("Building metadata index for `{}` ({operation:?})", key.0);
        let definitions = self.introspector.properties(IntrospectionRequest {
            registry: &self.registry,
            members,
            operation,
            views,
        })?;
        let index = Arc::new(MetadataIndex::build(
            members.ty().clone(),
            operation,
            definitions,
            self.policy,
        )?);

        // Another resolution may have raced us here; both built the same index.
        let index = self.cache.write().entry(key).or_insert(index).clone();

        Ok(index)
    }

    /// The wire name of `internal_name` in `operation`.
    ///
    /// If the definition in `operation` has none, the definition with the same internal
    /// name in the other operation supplies it.
    pub fn external_name(
        &self,
        members: &Members,
        operation: Operation,
        views: &[View],
        internal_name: &str,
    ) -> Result<String> {
        let index = self.index_for(members, operation, views)?;
        if let Some(name) = index.get(internal_name).and_then(PropertyDefinition::wire_name) {
            return Ok(name.to_owned());
        }

        let other = self.index_for(members, operation.other(), views)?;
        other
            .get(internal_name)
            .and_then(PropertyDefinition::wire_name)
            .map(str::to_owned)
            .ok_or_else(|| Error::MissingExternalName {
                ty: members.ty().to_string(),
                property: internal_name.to_owned(),
            })
    }
}
