use core::fmt;

use serde::Serialize;

/// A reference from a collection property to the type of its items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ModelRef {
    /// A primitive or enum item type, named inline.
    Inline {
        /// The natural name of the item type, e.g. `string`.
        type_name: String,
        /// The qualified name of the item type.
        qualified_type: String,
    },
    /// An object item type, named by its model identifier.
    Model {
        /// The identifier of the item model under the same views.
        id: String,
        /// The qualified name of the item type.
        qualified_type: String,
    },
}

impl ModelRef {
    /// The inline type name or the model identifier.
    pub fn name(&self) -> &str {
        match self {
            ModelRef::Inline { type_name, .. } => type_name,
            ModelRef::Model { id, .. } => id,
        }
    }

    /// The qualified name of the item type.
    pub fn qualified_type(&self) -> &str {
        match self {
            ModelRef::Inline { qualified_type, .. } | ModelRef::Model { qualified_type, .. } => {
                qualified_type
            }
        }
    }

    /// Whether the item type is named inline.
    pub fn is_inline(&self) -> bool {
        matches!(self, ModelRef::Inline { .. })
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let inline = ModelRef::Inline {
            type_name: "string".into(),
            qualified_type: "String".into(),
        };
        assert_eq!(
            serde_json::to_string(&inline).unwrap(),
            r#"{"kind":"inline","typeName":"string","qualifiedType":"String"}"#
        );

        let model = ModelRef::Model {
            id: "LineItemPublic".into(),
            qualified_type: "app::LineItem".into(),
        };
        assert_eq!(
            serde_json::to_string(&model).unwrap(),
            r#"{"kind":"model","id":"LineItemPublic","qualifiedType":"app::LineItem"}"#
        );
        assert_eq!(model.name(), "LineItemPublic");
        assert!(!model.is_inline());
    }
}
