use indexmap::IndexMap;

use crate::{
    naming::RenameRule,
    reflect::{AccessorKind, ResolvedMember, SourceKind},
    view::View,
    Operation, Result,
};

use super::{IntrospectionRequest, PrimaryMember, PropertyDefinition, SerializationIntrospector};

/// The default [`SerializationIntrospector`], driven by member attributes and naming
/// conventions.
///
/// Members sharing a logical name form one property. Serialization reads through getters
/// and fields; deserialization writes through creator parameters, setters and fields. The
/// member preferred in that order is the primary one.
#[derive(Debug, Clone, Default)]
pub struct ConventionIntrospector {
    rename_rule: RenameRule,
}

impl ConventionIntrospector {
    /// An introspector keeping internal names unless renamed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the naming rule for types that don't declare their own.
    pub fn rename_rule(mut self, rule: RenameRule) -> Self {
        self.rename_rule = rule;
        self
    }
}

impl SerializationIntrospector for ConventionIntrospector {
    fn properties(&self, request: IntrospectionRequest<'_>) -> Result<Vec<PropertyDefinition>> {
        let mut groups: IndexMap<&str, Vec<&ResolvedMember>> = IndexMap::new();
        for member in request.members.iter() {
            groups.entry(member.name()).or_default().push(member);
        }
        let rule = request
            .members
            .descriptor()
            .rename_rule()
            .unwrap_or(self.rename_rule);

        let mut definitions = Vec::with_capacity(groups.len());
        for (name, group) in groups {
            if group.iter().any(|member| member.attrs().ignore) {
                trace!("Property `{name}` of `{}` is ignored", request.members.ty());
                continue;
            }
            let mut visible: Vec<&ResolvedMember> = group
                .into_iter()
                .filter(|member| is_visible(member, request.operation))
                .collect();
            // Stable, so members of the same rank keep declaration order.
            visible.sort_by_key(|member| rank(member, request.operation));
            let Some(primary) = visible.first() else {
                continue;
            };

            let views = visible
                .iter()
                .map(|member| &member.attrs().views)
                .find(|views| !views.is_empty())
                .cloned()
                .unwrap_or_default();
            if !in_active_views(&views, request) {
                trace!(
                    "Property `{name}` of `{}` is outside the active views",
                    request.members.ty()
                );
                continue;
            }

            let external_name = visible
                .iter()
                .find_map(|member| member.attrs().rename.clone())
                .unwrap_or_else(|| rule.apply(name));
            let description = visible
                .iter()
                .find_map(|member| member.attrs().description.clone());
            let allowable_values = visible
                .iter()
                .map(|member| &member.attrs().allowable_values)
                .find(|values| !values.is_empty())
                .cloned()
                .unwrap_or_default();

            definitions.push(
                PropertyDefinition::new(name)
                    .external_name(external_name)
                    .views(views)
                    .primary(PrimaryMember::new(primary.source(), primary.raw_name()))
                    .required(visible.iter().any(|member| member.attrs().required))
                    .description(description)
                    .allowable_values(allowable_values),
            );
        }

        Ok(definitions)
    }
}

fn is_visible(member: &ResolvedMember, operation: Operation) -> bool {
    let attrs = member.attrs();
    match (operation, member.source()) {
        (Operation::Serialization, SourceKind::Field) => !attrs.skip_serializing,
        (Operation::Serialization, SourceKind::Accessor) => {
            member.accessor_kind() == Some(AccessorKind::Getter) && !attrs.skip_serializing
        }
        (Operation::Serialization, SourceKind::ConstructorParameter) => false,
        (Operation::Deserialization, SourceKind::Field) => !attrs.skip_deserializing,
        (Operation::Deserialization, SourceKind::Accessor) => {
            member.accessor_kind() == Some(AccessorKind::Setter) && !attrs.skip_deserializing
        }
        (Operation::Deserialization, SourceKind::ConstructorParameter) => {
            !attrs.skip_deserializing
        }
    }
}

fn rank(member: &ResolvedMember, operation: Operation) -> u8 {
    match (operation, member.source()) {
        (Operation::Serialization, SourceKind::Accessor) => 0,
        (Operation::Serialization, _) => 1,
        (Operation::Deserialization, SourceKind::ConstructorParameter) => 0,
        (Operation::Deserialization, SourceKind::Accessor) => 1,
        (Operation::Deserialization, SourceKind::Field) => 2,
    }
}

// Any-match narrowing. Untagged properties belong to every view.
fn in_active_views(declared: &[View], request: IntrospectionRequest<'_>) -> bool {
    if declared.is_empty() || request.views.is_empty() {
        return true;
    }
    let hierarchy = request.registry.views();

    declared.iter().any(|declared| {
        request
            .views
            .iter()
            .any(|active| hierarchy.is_assignable_from(declared, active))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{
        MemberAttrs, MemberEnumerator, Members, Primitive, Type, TypeDescriptor, TypeRegistry,
    };

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .insert(
                TypeDescriptor::object("app::Account")
                    .field("id", Primitive::Long, MemberAttrs::new())
                    .field("display_name", Primitive::String, MemberAttrs::new())
                    .getter(
                        "getDisplay_name",
                        Primitive::String,
                        MemberAttrs::new().view("Public"),
                    )
                    .field("secret", Primitive::String, MemberAttrs::new().ignore())
                    .field(
                        "token",
                        Primitive::String,
                        MemberAttrs::new().skip_serializing(),
                    )
                    .setter(
                        "setNickname",
                        Primitive::String,
                        MemberAttrs::new().rename("nick"),
                    )
                    .field(
                        "audit",
                        Primitive::String,
                        MemberAttrs::new().view("Admin"),
                    )
                    .creator_param("id", Primitive::Long, MemberAttrs::new().required()),
            )
            .unwrap();
        registry.declare_view("Admin", ["Public"]);
        registry
    }

    fn members(registry: &TypeRegistry) -> Members {
        MemberEnumerator::new(registry)
            .members(&Type::named("app::Account"))
            .unwrap()
    }

    fn introspect(
        registry: &TypeRegistry,
        introspector: &ConventionIntrospector,
        operation: Operation,
        views: &[View],
    ) -> Vec<PropertyDefinition> {
        let members = members(registry);
        introspector
            .properties(IntrospectionRequest {
                registry,
                members: &members,
                operation,
                views,
            })
            .unwrap()
    }

    #[test]
    fn serialization() {
        let registry = registry();
        let definitions = introspect(
            &registry,
            &ConventionIntrospector::new(),
            Operation::Serialization,
            &[],
        );

        let names: Vec<_> = definitions
            .iter()
            .map(PropertyDefinition::internal_name)
            .collect();
        assert_eq!(names, ["id", "display_name", "audit"]);

        let display_name = &definitions[1];
        assert!(display_name.is_primary(SourceKind::Accessor, "getDisplay_name"));
        assert!(!display_name.is_primary(SourceKind::Field, "display_name"));
        assert_eq!(display_name.declared_views(), &[View::new("Public")]);
        assert!(!definitions[0].is_required());
    }

    #[test]
    fn deserialization() {
        let registry = registry();
        let definitions = introspect(
            &registry,
            &ConventionIntrospector::new(),
            Operation::Deserialization,
            &[],
        );

        let names: Vec<_> = definitions
            .iter()
            .map(PropertyDefinition::internal_name)
            .collect();
        assert_eq!(names, ["id", "display_name", "token", "audit", "nickname"]);

        let id = &definitions[0];
        assert!(id.is_primary(SourceKind::ConstructorParameter, "id"));
        assert!(id.is_required());
        assert!(definitions[1].is_primary(SourceKind::Field, "display_name"));
        assert_eq!(definitions[4].wire_name(), Some("nick"));
    }

    #[test]
    fn active_views_narrow() {
        let registry = registry();
        let introspector = ConventionIntrospector::new();

        let public = introspect(
            &registry,
            &introspector,
            Operation::Serialization,
            &[View::new("Public")],
        );
        let names: Vec<_> = public.iter().map(PropertyDefinition::internal_name).collect();
        assert_eq!(names, ["id", "display_name"]);

        let admin = introspect(
            &registry,
            &introspector,
            Operation::Serialization,
            &[View::new("Admin")],
        );
        assert_eq!(admin.len(), 3);
    }

    #[test]
    fn naming_rules() {
        let registry = registry();
        let definitions = introspect(
            &registry,
            &ConventionIntrospector::new().rename_rule(RenameRule::CamelCase),
            Operation::Serialization,
            &[],
        );
        assert_eq!(definitions[1].wire_name(), Some("displayName"));

        let mut registry = TypeRegistry::new();
        registry
            .insert(
                TypeDescriptor::object("app::Account")
                    .rename_all(RenameRule::KebabCase)
                    .field("display_name", Primitive::String, MemberAttrs::new()),
            )
            .unwrap();
        let definitions = introspect(
            &registry,
            &ConventionIntrospector::new().rename_rule(RenameRule::CamelCase),
            Operation::Serialization,
            &[],
        );
        assert_eq!(definitions[0].wire_name(), Some("display-name"));
    }
}
