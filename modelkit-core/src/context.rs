use std::sync::Arc;

use serde::Serialize;

use crate::{reflect::Type, view::View};

/// The direction a model is used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// The type is produced (a return value).
    Serialization,
    /// The type is consumed (an input parameter).
    Deserialization,
}

impl Operation {
    /// The opposite direction.
    pub fn other(self) -> Self {
        match self {
            Operation::Serialization => Operation::Deserialization,
            Operation::Deserialization => Operation::Serialization,
        }
    }
}

/// The request to build a model: a type, the direction it is used in and the active views.
///
/// Contexts created while walking dependencies keep a link to the context they were derived
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelContext {
    ty: Type,
    operation: Operation,
    views: Vec<View>,
    parent: Option<Arc<ModelContext>>,
}

impl ModelContext {
    /// A root context.
    pub fn new(ty: Type, operation: Operation, views: Vec<View>) -> Self {
        Self {
            ty,
            operation,
            views,
            parent: None,
        }
    }

    /// A root context for a type returned by an operation.
    pub fn return_value(ty: Type) -> Self {
        Self::new(ty, Operation::Serialization, Vec::new())
    }

    /// A root context for a type taken as an input parameter.
    pub fn input_param(ty: Type) -> Self {
        Self::new(ty, Operation::Deserialization, Vec::new())
    }

    /// Replaces the active views.
    pub fn with_views<I, V>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        self.views = views.into_iter().map(Into::into).collect();
        self
    }

    /// A context for `ty` inheriting direction and views from `parent`.
    pub fn from_parent(parent: &Arc<ModelContext>, ty: Type) -> Self {
        Self {
            ty,
            operation: parent.operation,
            views: parent.views.clone(),
            parent: Some(parent.clone()),
        }
    }

    /// The type to model.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The direction.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Whether the type is produced rather than consumed.
    pub fn is_return_type(&self) -> bool {
        self.operation == Operation::Serialization
    }

    /// The active views. Empty means unrestricted.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// The context this one was derived from.
    pub fn parent(&self) -> Option<&ModelContext> {
        self.parent.as_deref()
    }
}
