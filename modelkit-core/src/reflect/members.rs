//! Member enumeration.
//!
//! Enumerators list the members of a resolved type grouped by source: fields, accessor
//! methods and creator parameters. Inherited members are included, with generic parameters
//! of the whole chain bound to concrete types.

use std::{collections::HashSet, sync::Arc};

use crate::{Error, Result};

use super::{AccessorKind, MemberAttrs, ResolvedType, Type, TypeDescriptor, TypeRegistry};

/// The member source a provider reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Data fields.
    Field,
    /// Getter and setter methods.
    Accessor,
    /// Parameters of the creator.
    ConstructorParameter,
}

/// How a member can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Access {
    /// The member can be read from an instance.
    pub read: bool,
    /// The member can be written to an instance.
    pub write: bool,
}

/// A member of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    name: String,
    raw_name: String,
    ty: Type,
    source: SourceKind,
    accessor: Option<AccessorKind>,
    position: usize,
    access: Access,
    attrs: MemberAttrs,
    declared_in: Type,
}

impl ResolvedMember {
    /// The logical (internal) property name.
    ///
    /// For accessors this is derived from the method name, e.g. `getName` is `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the field, method or parameter as declared.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// The member type, with generic parameters substituted where bound.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The source of the member.
    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Getter or setter, for accessor members.
    pub fn accessor_kind(&self) -> Option<AccessorKind> {
        self.accessor
    }

    /// Declaration index, meaningful for creator parameters.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read/write capability.
    pub fn access(&self) -> Access {
        self.access
    }

    /// The declared attributes.
    pub fn attrs(&self) -> &MemberAttrs {
        &self.attrs
    }

    /// The type of the inheritance chain declaring the member.
    pub fn declared_in(&self) -> &Type {
        &self.declared_in
    }
}

/// All members of a resolved type.
#[derive(Debug, Clone)]
pub struct Members {
    ty: Type,
    descriptor: Arc<TypeDescriptor>,
    fields: Vec<ResolvedMember>,
    accessors: Vec<ResolvedMember>,
    creator_params: Vec<ResolvedMember>,
}

impl Members {
    /// The type the members belong to.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The descriptor of the type.
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Members of the given source.
    pub fn of(&self, kind: SourceKind) -> &[ResolvedMember] {
        match kind {
            SourceKind::Field => &self.fields,
            SourceKind::Accessor => &self.accessors,
            SourceKind::ConstructorParameter => &self.creator_params,
        }
    }

    /// Fields, then accessors, then creator parameters.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedMember> {
        self.fields
            .iter()
            .chain(&self.accessors)
            .chain(&self.creator_params)
    }
}

/// Lists members of types known to a [`TypeRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct MemberEnumerator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> MemberEnumerator<'a> {
    /// An enumerator over `registry`.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Enumerates all members of `ty`.
    ///
    /// The inheritance chain is walked base-first. A member redeclared in a subtype (same
    /// declared name and source) replaces the inherited one in place. Creator parameters are
    /// only taken from `ty` itself.
    pub fn members(&self, ty: &Type) -> Result<Members> {
        let resolved = self.registry.resolve(ty)?;
        let chain = self.chain(&resolved)?;

        let mut fields = Vec::new();
        let mut accessors = Vec::new();
        for link in &chain {
            let descriptor = link.descriptor();
            let declared_in = link.ty();
            for field in descriptor.fields() {
                let member = ResolvedMember {
                    name: field.name().to_owned(),
                    raw_name: field.name().to_owned(),
                    ty: field.ty().substitute(link.bindings()),
                    source: SourceKind::Field,
                    accessor: None,
                    position: fields.len(),
                    access: Access {
                        read: true,
                        write: true,
                    },
                    attrs: field.attrs().clone(),
                    declared_in: declared_in.clone(),
                };
                merge(&mut fields, member);
            }
            for accessor in descriptor.accessors() {
                let kind = accessor.kind();
                let member = ResolvedMember {
                    name: property_name(accessor.method()),
                    raw_name: accessor.method().to_owned(),
                    ty: accessor.ty().substitute(link.bindings()),
                    source: SourceKind::Accessor,
                    accessor: Some(kind),
                    position: accessors.len(),
                    access: Access {
                        read: kind == AccessorKind::Getter,
                        write: kind == AccessorKind::Setter,
                    },
                    attrs: accessor.attrs().clone(),
                    declared_in: declared_in.clone(),
                };
                merge(&mut accessors, member);
            }
        }

        let creator_params = resolved
            .descriptor()
            .creator_params()
            .enumerate()
            .map(|(position, param)| ResolvedMember {
                name: param.name().to_owned(),
                raw_name: param.name().to_owned(),
                ty: param.ty().substitute(resolved.bindings()),
                source: SourceKind::ConstructorParameter,
                accessor: None,
                position,
                access: Access {
                    read: false,
                    write: true,
                },
                attrs: param.attrs().clone(),
                declared_in: resolved.ty().clone(),
            })
            .collect();

        Ok(Members {
            ty: resolved.ty().clone(),
            descriptor: resolved.descriptor().clone(),
            fields,
            accessors,
            creator_params,
        })
    }

    /// Fields of `ty`, including inherited ones.
    pub fn fields(&self, ty: &Type) -> Result<Vec<ResolvedMember>> {
        self.members(ty).map(|members| members.fields)
    }

    /// Accessor methods of `ty`, including inherited ones.
    pub fn accessors(&self, ty: &Type) -> Result<Vec<ResolvedMember>> {
        self.members(ty).map(|members| members.accessors)
    }

    /// Creator parameters of `ty`, in declaration order.
    pub fn constructor_params(&self, ty: &Type) -> Result<Vec<ResolvedMember>> {
        self.members(ty).map(|members| members.creator_params)
    }

    // The inheritance chain of `resolved`, base type first.
    fn chain(&self, resolved: &ResolvedType) -> Result<Vec<ResolvedType>> {
        let mut chain = vec![resolved.clone()];
        let mut seen = HashSet::from([resolved.ty().clone()]);
        while let Some(parent) = chain
            .last()
            .and_then(|last| {
                last.descriptor()
                    .parent_type()
                    .map(|parent| parent.substitute(last.bindings()))
            })
        {
            if !seen.insert(parent.clone()) {
                return Err(Error::InvalidDescriptor {
                    ty: resolved.ty().to_string(),
                    reason: format!("inheritance cycle through `{parent}`"),
                });
            }
            let parent = self.registry.resolve(&parent)?;
            chain.push(parent);
        }
        chain.reverse();

        Ok(chain)
    }
}

fn merge(members: &mut Vec<ResolvedMember>, member: ResolvedMember) {
    match members
        .iter_mut()
        .find(|existing| existing.raw_name == member.raw_name)
    {
        Some(existing) => {
            let position = existing.position;
            *existing = ResolvedMember { position, ..member };
        }
        None => members.push(member),
    }
}

/// The logical property name of an accessor method.
///
/// Handles both `get_name`/`set_name`/`is_name` and `getName`/`setName`/`isName`. An
/// all-uppercase remainder (`getURL`) is kept as is. Methods without a recognized prefix are
/// named after themselves.
pub fn property_name(method: &str) -> String {
    for prefix in ["get_", "set_", "is_"] {
        if let Some(rest) = method.strip_prefix(prefix) {
            if !rest.is_empty() {
                return rest.to_owned();
            }
        }
    }
    for prefix in ["get", "set", "is"] {
        let Some(rest) = method.strip_prefix(prefix) else {
            continue;
        };
        let mut chars = rest.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if !first.is_uppercase() {
            continue;
        }
        if chars.next().is_some_and(char::is_uppercase) {
            return rest.to_owned();
        }

        let mut name: String = first.to_lowercase().collect();
        name.push_str(&rest[first.len_utf8()..]);
        return name;
    }

    method.to_owned()
}
