//! Property providers.
//!
//! A provider turns the members of a type into the [`ModelProperty`]s of its model, for one
//! operation and set of active views.

use core::fmt::Debug;

use crate::{
    reflect::{AccessorKind, SourceKind, Type},
    view::View,
    Operation, Result,
};

mod aggregate;
pub use aggregate::DefaultPropertiesProvider;
mod source;
pub use source::SourceProvider;

/// Where a [`ModelProperty`] comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertySource {
    /// A data field.
    Field {
        /// The field name.
        name: String,
    },
    /// A getter or setter method.
    Accessor {
        /// The method name.
        method: String,
        /// Getter or setter.
        kind: AccessorKind,
    },
    /// A creator parameter.
    ConstructorParameter {
        /// The parameter name.
        name: String,
        /// The 0-based position of the parameter.
        position: usize,
    },
}

impl PropertySource {
    /// The source kind.
    pub fn kind(&self) -> SourceKind {
        match self {
            PropertySource::Field { .. } => SourceKind::Field,
            PropertySource::Accessor { .. } => SourceKind::Accessor,
            PropertySource::ConstructorParameter { .. } => SourceKind::ConstructorParameter,
        }
    }
}

/// A resolved property of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProperty {
    name: String,
    source: PropertySource,
    ty: Type,
    required: bool,
    description: Option<String>,
    allowable_values: Vec<String>,
}

impl ModelProperty {
    /// The external (wire) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member carrying the property.
    pub fn source(&self) -> &PropertySource {
        &self.source
    }

    /// The declared type, after generic and alternate-type substitution.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Whether the property is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The allowable values.
    pub fn allowable_values(&self) -> &[String] {
        &self.allowable_values
    }
}

/// Lists the properties of a type.
pub trait PropertiesProvider: Send + Sync + Debug {
    /// Properties of `ty` when it is produced.
    fn properties_for_serialization(&self, ty: &Type, views: &[View]) -> Result<Vec<ModelProperty>>;

    /// Properties of `ty` when it is consumed.
    fn properties_for_deserialization(
        &self,
        ty: &Type,
        views: &[View],
    ) -> Result<Vec<ModelProperty>>;

    /// Properties of `ty` in `operation`.
    fn properties(
        &self,
        ty: &Type,
        operation: Operation,
        views: &[View],
    ) -> Result<Vec<ModelProperty>> {
        match operation {
            Operation::Serialization => self.properties_for_serialization(ty, views),
            Operation::Deserialization => self.properties_for_deserialization(ty, views),
        }
    }
}
