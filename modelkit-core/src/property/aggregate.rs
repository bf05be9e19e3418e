use std::sync::Arc;

use crate::{
    alternate::AlternateTypeProvider,
    metadata::Metadata,
    reflect::{SourceKind, Type},
    view::View,
    Operation, Result,
};

use super::{ModelProperty, PropertiesProvider, SourceProvider};

/// Concatenates the field, accessor and creator parameter providers, in that order.
///
/// No deduplication happens here: each property is owned by exactly one source.
#[derive(Debug, Clone)]
pub struct DefaultPropertiesProvider {
    providers: [SourceProvider; 3],
}

impl DefaultPropertiesProvider {
    /// The three source providers sharing `metadata` and `alternates`.
    pub fn new(metadata: Arc<Metadata>, alternates: Arc<dyn AlternateTypeProvider>) -> Self {
        let provider = |kind| SourceProvider::new(kind, metadata.clone(), alternates.clone());

        Self {
            providers: [
                provider(SourceKind::Field),
                provider(SourceKind::Accessor),
                provider(SourceKind::ConstructorParameter),
            ],
        }
    }

    fn collect(&self, ty: &Type, operation: Operation, views: &[View]) -> Result<Vec<ModelProperty>> {
        let mut properties = Vec::new();
        for provider in &self.providers {
            properties.extend(provider.properties(ty, operation, views)?);
        }

        Ok(properties)
    }
}

impl PropertiesProvider for DefaultPropertiesProvider {
    fn properties_for_serialization(&self, ty: &Type, views: &[View]) -> Result<Vec<ModelProperty>> {
        self.collect(ty, Operation::Serialization, views)
    }

    fn properties_for_deserialization(
        &self,
        ty: &Type,
        views: &[View],
    ) -> Result<Vec<ModelProperty>> {
        self.collect(ty, Operation::Deserialization, views)
    }
}
