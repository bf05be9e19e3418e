use core::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::Property;

/// The schema of one type under one operation and set of views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    id: String,
    name: String,
    qualified_type: String,
    properties: IndexMap<String, Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Model {
    /// Creates a new model.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        qualified_type: impl Into<String>,
        properties: IndexMap<String, Property>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            qualified_type: qualified_type.into(),
            properties,
            description,
        }
    }

    /// The identifier, unique per type and set of views.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The qualified name of the type.
    pub fn qualified_type(&self) -> &str {
        &self.qualified_type
    }

    /// The properties by wire name, in resolution order.
    pub fn properties(&self) -> &IndexMap<String, Property> {
        &self.properties
    }

    /// The property with the given wire name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// The type-level description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            for line in description.lines() {
                writeln!(f, "# {line}")?;
            }
        }
        write!(f, "model {} (", self.id)?;
        let mut first = true;
        for (name, property) in &self.properties {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{name}: {property}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ModelRef;

    fn model() -> Model {
        let mut properties = IndexMap::new();
        properties.insert(
            "id".to_string(),
            Property::new("long", "i64").with_required(true),
        );
        properties.insert(
            "items".to_string(),
            Property::new("List", "List<app::LineItem>")
                .with_position(1)
                .with_items(Some(ModelRef::Model {
                    id: "LineItem".into(),
                    qualified_type: "app::LineItem".into(),
                })),
        );
        Model::new(
            "Order",
            "Order",
            "app::Order",
            properties,
            Some("An order.\nPlaced by a customer.".into()),
        )
    }

    #[test]
    fn display_with_description() {
        assert_eq!(
            model().to_string(),
            "# An order.\n# Placed by a customer.\nmodel Order (id: long, items: List[LineItem])"
        );
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_value(model()).unwrap();
        assert_eq!(json["qualifiedType"], "app::Order");
        assert_eq!(json["properties"]["id"]["typeName"], "long");
        assert_eq!(json["properties"]["id"]["required"], true);
        assert!(json["properties"]["id"].get("items").is_none());
        assert_eq!(json["properties"]["items"]["position"], 1);
        assert_eq!(json["properties"]["items"]["items"]["kind"], "model");

        // Property order is kept.
        let serialized = serde_json::to_string(&model()).unwrap();
        assert!(serialized.find(r#""id":{"#) < serialized.find(r#""items":{"#));
    }
}
