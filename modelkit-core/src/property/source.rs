use std::sync::Arc;

use crate::{
    alternate::AlternateTypeProvider,
    introspect::PropertyDefinition,
    metadata::Metadata,
    reflect::{
        AccessorKind, MemberEnumerator, Members, ResolvedMember, SourceKind, Type,
    },
    view::{self, View},
    Error, Operation, Result,
};

use super::{ModelProperty, PropertiesProvider, PropertySource};

/// Properties backed by one kind of member: fields, accessors or creator parameters.
///
/// A member becomes a property only if the metadata index knows its logical name, the
/// property is visible in the requested views and the member is the primary one of the
/// property. The last rule makes each property owned by exactly one source kind.
#[derive(Debug, Clone)]
pub struct SourceProvider {
    kind: SourceKind,
    metadata: Arc<Metadata>,
    alternates: Arc<dyn AlternateTypeProvider>,
}

impl SourceProvider {
    /// A provider of `kind` members of the types in the registry of `metadata`.
    pub fn new(
        kind: SourceKind,
        metadata: Arc<Metadata>,
        alternates: Arc<dyn AlternateTypeProvider>,
    ) -> Self {
        Self {
            kind,
            metadata,
            alternates,
        }
    }

    /// The kind of members this provider reads.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    fn collect(&self, ty: &Type, operation: Operation, views: &[View]) -> Result<Vec<ModelProperty>> {
        let registry = self.metadata.registry();
        let members = MemberEnumerator::new(registry).members(ty)?;
        let index = self.metadata.index_for(&members, operation, views)?;

        let mut properties = Vec::new();
        for member in members.of(self.kind) {
            let Some(entry) = index.get(member.name()) else {
                trace!("`{}` of `{ty}` has no metadata", member.raw_name());
                continue;
            };
            if !view::qualifies(entry.declared_views(), views, registry.views()) {
                trace!("`{}` of `{ty}` is not in the requested views", member.raw_name());
                continue;
            }
            if !entry.is_primary(self.kind, member.raw_name()) {
                continue;
            }

            match self.property(&members, member, entry, operation, views) {
                Ok(property) => properties.push(property),
                Err(e) => warn!("Skipping `{}` of `{ty}`: {e}", member.raw_name()),
            }
        }

        Ok(properties)
    }

    fn property(
        &self,
        members: &Members,
        member: &ResolvedMember,
        entry: &PropertyDefinition,
        operation: Operation,
        views: &[View],
    ) -> Result<ModelProperty> {
        if let Some(param) = member.ty().unbound_param() {
            return Err(Error::UnboundTypeParameter {
                ty: members.ty().to_string(),
                param: param.to_owned(),
            });
        }
        let name = match entry.wire_name() {
            Some(name) => name.to_owned(),
            None => self.metadata.external_name(
                members,
                operation,
                views,
                entry.internal_name(),
            )?,
        };
        let ty = self.alternates.alternate_for(member.ty());
        let allowable_values = if entry.property_allowable_values().is_empty() {
            let values_of = ty.element_type().unwrap_or(&ty);
            self.metadata.registry().enum_values(values_of).unwrap_or_default()
        } else {
            entry.property_allowable_values().to_vec()
        };
        let source = match self.kind {
            SourceKind::Field => PropertySource::Field {
                name: member.raw_name().to_owned(),
            },
            SourceKind::Accessor => PropertySource::Accessor {
                method: member.raw_name().to_owned(),
                kind: member.accessor_kind().unwrap_or(AccessorKind::Getter),
            },
            SourceKind::ConstructorParameter => PropertySource::ConstructorParameter {
                name: member.raw_name().to_owned(),
                position: member.position(),
            },
        };

        Ok(ModelProperty {
            name,
            source,
            ty,
            required: entry.is_required(),
            description: entry.property_description().map(str::to_owned),
            allowable_values,
        })
    }
}

impl PropertiesProvider for SourceProvider {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alternate::AlternateTypeRules,
        introspect::{
            ConventionIntrospector, IntrospectionRequest, PrimaryMember,
            SerializationIntrospector,
        },
        metadata::DuplicatePolicy,
        reflect::{Primitive, TypeRegistry},
        test_utils,
    };

    fn provider(kind: SourceKind, registry: TypeRegistry) -> SourceProvider {
        SourceProvider::new(
            kind,
            Arc::new(Metadata::new(
                Arc::new(registry),
                Arc::new(ConventionIntrospector::new()),
                DuplicatePolicy::Reject,
            )),
            Arc::new(AlternateTypeRules::new()),
        )
    }

    fn names(properties: &[ModelProperty]) -> Vec<&str> {
        properties.iter().map(ModelProperty::name).collect()
    }

    #[test]
    fn ownership_by_primary_member() {
        let registry = test_utils::registry();
        let customer = Type::named(test_utils::CUSTOMER);

        let fields = provider(SourceKind::Field, registry.clone())
            .properties_for_serialization(&customer, &[])
            .unwrap();
        let accessors = provider(SourceKind::Accessor, registry.clone())
            .properties_for_serialization(&customer, &[])
            .unwrap();
        assert_eq!(names(&fields), ["id"]);
        assert_eq!(names(&accessors), ["name"]);
        assert_eq!(
            accessors[0].source(),
            &PropertySource::Accessor {
                method: "getName".into(),
                kind: AccessorKind::Getter,
            }
        );

        // Deserialization writes `name` through the field.
        let fields = provider(SourceKind::Field, registry.clone())
            .properties_for_deserialization(&customer, &[])
            .unwrap();
        let accessors = provider(SourceKind::Accessor, registry)
            .properties_for_deserialization(&customer, &[])
            .unwrap();
        assert_eq!(names(&fields), ["id", "name"]);
        assert!(accessors.is_empty());
    }

    #[test]
    fn strict_view_filter() {
        let registry = test_utils::registry();
        let customer = Type::named(test_utils::CUSTOMER);
        let accessors = provider(SourceKind::Accessor, registry);

        let public = accessors
            .properties_for_serialization(&customer, &[View::new("Public")])
            .unwrap();
        assert_eq!(names(&public), ["name"]);
        let other = accessors
            .properties_for_serialization(&customer, &[View::new("Other")])
            .unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn creator_parameters() {
        let registry = test_utils::registry();
        let params = provider(SourceKind::ConstructorParameter, registry)
            .properties_for_deserialization(&Type::named(test_utils::ORDER), &[])
            .unwrap();
        assert_eq!(names(&params), ["number"]);
        assert_eq!(
            params[0].source(),
            &PropertySource::ConstructorParameter {
                name: "number".into(),
                position: 0,
            }
        );
        assert!(params[0].is_required());
    }

    #[test]
    fn enum_allowable_values() {
        let registry = test_utils::registry();
        let fields = provider(SourceKind::Field, registry)
            .properties_for_serialization(&Type::named(test_utils::ORDER), &[])
            .unwrap();
        let status = fields.iter().find(|p| p.name() == "status").unwrap();
        assert_eq!(status.allowable_values(), ["OPEN", "SHIPPED"]);
        let history = fields.iter().find(|p| p.name() == "history").unwrap();
        assert_eq!(history.allowable_values(), ["OPEN", "SHIPPED"]);
    }

    #[test]
    fn alternate_types_apply() {
        let registry = test_utils::registry();
        let fields = SourceProvider::new(
            SourceKind::Field,
            Arc::new(Metadata::new(
                Arc::new(registry),
                Arc::new(ConventionIntrospector::new()),
                DuplicatePolicy::Reject,
            )),
            Arc::new(
                AlternateTypeRules::new().rule(Primitive::Long.into(), Primitive::String.into()),
            ),
        )
            .properties_for_serialization(&Type::named(test_utils::CUSTOMER), &[])
            .unwrap();
        assert_eq!(fields[0].ty(), &Type::from(Primitive::String));
    }

    // Reports every member as a field-owned property without any wire name.
    #[derive(Debug)]
    struct Nameless;

    impl SerializationIntrospector for Nameless {
        fn properties(
            &self,
            request: IntrospectionRequest<'_>,
        ) -> Result<Vec<PropertyDefinition>> {
            Ok(request
                .members
                .of(SourceKind::Field)
                .iter()
                .map(|member| {
                    PropertyDefinition::new(member.name())
                        .primary(PrimaryMember::new(SourceKind::Field, member.raw_name()))
                })
                .collect())
        }
    }

    #[test_log::test]
    fn failing_members_are_skipped() {
        let registry = test_utils::registry();
        let nameless = SourceProvider::new(
            SourceKind::Field,
            Arc::new(Metadata::new(
                Arc::new(registry.clone()),
                Arc::new(Nameless),
                DuplicatePolicy::Reject,
            )),
            Arc::new(AlternateTypeRules::new()),
        );
        let fields = nameless
            .properties_for_serialization(&Type::named(test_utils::CUSTOMER), &[])
            .unwrap();
        assert!(fields.is_empty());

        // An unbound generic parameter only affects its own member.
        let page = Type::generic(test_utils::PAGE, vec![Type::param("X")]);
        let fields = provider(SourceKind::Field, registry)
            .properties_for_serialization(&page, &[])
            .unwrap();
        assert_eq!(names(&fields), ["total"]);
    }
}
