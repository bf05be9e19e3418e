//! Serialization introspection.
//!
//! A [`SerializationIntrospector`] decides, for a type and an operation, which logical
//! properties exist, under which external name, for which views, and which member is the
//! primary one carrying each property.

use core::fmt::Debug;

use crate::{
    reflect::{Members, SourceKind, TypeRegistry},
    view::View,
    Operation, Result,
};

mod convention;
pub use convention::ConventionIntrospector;

/// The member that primarily carries a property in a given operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimaryMember {
    kind: SourceKind,
    name: String,
}

impl PrimaryMember {
    /// A primary member of the given source and declared name.
    pub fn new(kind: SourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// The source of the member.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The declared (raw) name of the field, method or parameter.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Serialization metadata of one logical property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    internal_name: String,
    external_name: Option<String>,
    views: Vec<View>,
    primary: Option<PrimaryMember>,
    required: bool,
    description: Option<String>,
    allowable_values: Vec<String>,
}

impl PropertyDefinition {
    /// A definition for the logical property `internal_name`.
    pub fn new(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            external_name: None,
            views: Vec::new(),
            primary: None,
            required: false,
            description: None,
            allowable_values: Vec::new(),
        }
    }

    /// Sets the wire name.
    pub fn external_name(mut self, name: impl Into<String>) -> Self {
        self.external_name = Some(name.into());
        self
    }

    /// Sets the views the property is declared for.
    pub fn views(mut self, views: Vec<View>) -> Self {
        self.views = views;
        self
    }

    /// Sets the primary member.
    pub fn primary(mut self, primary: PrimaryMember) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Marks the property as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the allowable values.
    pub fn allowable_values(mut self, values: Vec<String>) -> Self {
        self.allowable_values = values;
        self
    }

    /// The logical property name.
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// The wire name in this operation, if the property has one.
    pub fn wire_name(&self) -> Option<&str> {
        self.external_name.as_deref()
    }

    /// The views the property is declared for. Empty means all views.
    pub fn declared_views(&self) -> &[View] {
        &self.views
    }

    /// The primary member, if any member carries the property in this operation.
    pub fn primary_member(&self) -> Option<&PrimaryMember> {
        self.primary.as_ref()
    }

    /// Whether `kind`/`raw_name` is the primary member of this property.
    pub fn is_primary(&self, kind: SourceKind, raw_name: &str) -> bool {
        self.primary
            .as_ref()
            .is_some_and(|primary| primary.kind == kind && primary.name == raw_name)
    }

    /// Whether the property is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The description.
    pub fn property_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The allowable values.
    pub fn property_allowable_values(&self) -> &[String] {
        &self.allowable_values
    }
}

/// What a [`SerializationIntrospector`] is asked to describe.
#[derive(Debug, Clone, Copy)]
pub struct IntrospectionRequest<'a> {
    /// The registry the type was resolved from.
    pub registry: &'a TypeRegistry,
    /// The enumerated members of the type.
    pub members: &'a Members,
    /// The direction.
    pub operation: Operation,
    /// The active views. Empty means unrestricted.
    pub views: &'a [View],
}

/// Produces the serialization metadata of a type.
///
/// Implementations must be deterministic: the same request yields the same definitions in
/// the same order.
pub trait SerializationIntrospector: Send + Sync + Debug {
    /// The property definitions of the requested type, in declaration order.
    fn properties(&self, request: IntrospectionRequest<'_>) -> Result<Vec<PropertyDefinition>>;
}
