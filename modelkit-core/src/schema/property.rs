use core::fmt;

use serde::Serialize;

use super::ModelRef;

/// A property of a [`Model`](super::Model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    type_name: String,
    qualified_type: String,
    position: usize,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allowable_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<ModelRef>,
}

impl Property {
    /// Creates a property with the given wire type name and qualified type name.
    pub fn new(type_name: impl Into<String>, qualified_type: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            qualified_type: qualified_type.into(),
            position: 0,
            required: false,
            description: None,
            allowable_values: Vec::new(),
            items: None,
        }
    }

    /// Sets the position in the model.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Sets whether the property is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the allowable values.
    pub fn with_allowable_values(mut self, values: Vec<String>) -> Self {
        self.allowable_values = values;
        self
    }

    /// Sets the item reference.
    pub fn with_items(mut self, items: Option<ModelRef>) -> Self {
        self.items = items;
        self
    }

    /// The wire type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The qualified name of the declared type.
    pub fn qualified_type(&self) -> &str {
        &self.qualified_type
    }

    /// The 0-based position in the model.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the property is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The allowable values. Empty means unconstrained.
    pub fn allowable_values(&self) -> &[String] {
        &self.allowable_values
    }

    /// The item type of a collection property.
    pub fn items(&self) -> Option<&ModelRef> {
        self.items.as_ref()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)?;
        if let Some(items) = &self.items {
            write!(f, "[{items}]")?;
        }

        Ok(())
    }
}
