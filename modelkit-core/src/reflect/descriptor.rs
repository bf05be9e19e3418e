//! Type descriptors: the declared shape of a type.

use crate::{naming::RenameRule, view::View};

use super::Type;

/// Metadata attached to a declared member, the equivalent of serialization annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberAttrs {
    /// Explicit external name.
    pub rename: Option<String>,
    /// Views the member is declared for. Empty means not view-restricted.
    pub views: Vec<View>,
    /// Excludes the whole logical property.
    pub ignore: bool,
    /// Hides the member from serialization.
    pub skip_serializing: bool,
    /// Hides the member from deserialization.
    pub skip_deserializing: bool,
    /// Marks the property as required.
    pub required: bool,
    /// Free-text description of the property.
    pub description: Option<String>,
    /// Explicit list of allowable values.
    pub allowable_values: Vec<String>,
}

impl MemberAttrs {
    /// Attributes with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the external name.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Adds a view the member is declared for.
    pub fn view(mut self, view: impl Into<View>) -> Self {
        self.views.push(view.into());
        self
    }

    /// Excludes the logical property altogether.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Hides the member from serialization.
    pub fn skip_serializing(mut self) -> Self {
        self.skip_serializing = true;
        self
    }

    /// Hides the member from deserialization.
    pub fn skip_deserializing(mut self) -> Self {
        self.skip_deserializing = true;
        self
    }

    /// Marks the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the allowable values.
    pub fn allowable_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowable_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    name: String,
    ty: Type,
    attrs: MemberAttrs,
}

impl FieldDecl {
    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The member attributes.
    pub fn attrs(&self) -> &MemberAttrs {
        &self.attrs
    }
}

/// Whether an accessor reads or writes its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// Returns the property value.
    Getter,
    /// Takes the property value as its single argument.
    Setter,
}

/// A declared accessor method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDecl {
    method: String,
    kind: AccessorKind,
    ty: Type,
    attrs: MemberAttrs,
}

impl AccessorDecl {
    /// The method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Getter or setter.
    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// The return type of a getter, or the argument type of a setter.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The member attributes.
    pub fn attrs(&self) -> &MemberAttrs {
        &self.attrs
    }
}

/// A declared creator (constructor) parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    name: String,
    ty: Type,
    attrs: MemberAttrs,
}

impl ParamDecl {
    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The member attributes.
    pub fn attrs(&self) -> &MemberAttrs {
        &self.attrs
    }
}

/// Object or enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorKind {
    /// A type with properties.
    Object,
    /// A type with a closed set of named values.
    Enum(Vec<String>),
}

/// The declared shape of an object or enum type.
///
/// A descriptor is either a concrete type (`app::User`, `app::Page<app::User>`) or a
/// generic template (`app::Page<T>`) whose member types mention its parameters.
///
/// ```rust
/// use modelkit_core::reflect::{MemberAttrs, Primitive, Type, TypeDescriptor};
///
/// let user = TypeDescriptor::object("app::User")
///     .description("A registered user")
///     .field("id", Primitive::Long, MemberAttrs::new().required())
///     .getter("getName", Primitive::String, MemberAttrs::new().view("Public"))
///     .setter("setName", Primitive::String, MemberAttrs::new());
///
/// assert_eq!(user.ty(), Type::named("app::User"));
/// assert_eq!(user.fields().count(), 1);
/// assert_eq!(user.accessors().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    path: String,
    generics: Vec<String>,
    args: Vec<Type>,
    kind: DescriptorKind,
    parent: Option<Type>,
    fields: Vec<FieldDecl>,
    accessors: Vec<AccessorDecl>,
    creator: Vec<ParamDecl>,
    description: Option<String>,
    rename_all: Option<RenameRule>,
}

impl TypeDescriptor {
    /// An object type.
    pub fn object(path: impl Into<String>) -> Self {
        Self::with_kind(path.into(), DescriptorKind::Object)
    }

    /// An enum type with the given (external) variant names.
    pub fn enumeration<I, S>(path: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants = variants.into_iter().map(Into::into).collect();
        Self::with_kind(path.into(), DescriptorKind::Enum(variants))
    }

    fn with_kind(path: String, kind: DescriptorKind) -> Self {
        Self {
            path,
            generics: Vec::new(),
            args: Vec::new(),
            kind,
            parent: None,
            fields: Vec::new(),
            accessors: Vec::new(),
            creator: Vec::new(),
            description: None,
            rename_all: None,
        }
    }

    /// Turns the descriptor into a template over the given generic parameters.
    pub fn generics<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generics = params.into_iter().map(Into::into).collect();
        self.args = self.generics.iter().cloned().map(Type::Param).collect();
        self
    }

    /// Makes the descriptor describe a concrete instance of a generic type.
    pub fn args(mut self, args: Vec<Type>) -> Self {
        self.generics.clear();
        self.args = args;
        self
    }

    /// Sets the parent type whose members are inherited.
    pub fn parent(mut self, parent: Type) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the type-level description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the naming rule for properties without an explicit external name.
    pub fn rename_all(mut self, rule: RenameRule) -> Self {
        self.rename_all = Some(rule);
        self
    }

    /// Declares a field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Type>, attrs: MemberAttrs) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty: ty.into(),
            attrs,
        });
        self
    }

    /// Declares a getter method.
    pub fn getter(self, method: impl Into<String>, ty: impl Into<Type>, attrs: MemberAttrs) -> Self {
        self.accessor(method.into(), AccessorKind::Getter, ty.into(), attrs)
    }

    /// Declares a setter method.
    pub fn setter(self, method: impl Into<String>, ty: impl Into<Type>, attrs: MemberAttrs) -> Self {
        self.accessor(method.into(), AccessorKind::Setter, ty.into(), attrs)
    }

    fn accessor(mut self, method: String, kind: AccessorKind, ty: Type, attrs: MemberAttrs) -> Self {
        self.accessors.push(AccessorDecl {
            method,
            kind,
            ty,
            attrs,
        });
        self
    }

    /// Declares the next creator parameter.
    pub fn creator_param(
        mut self,
        name: impl Into<String>,
        ty: impl Into<Type>,
        attrs: MemberAttrs,
    ) -> Self {
        self.creator.push(ParamDecl {
            name: name.into(),
            ty: ty.into(),
            attrs,
        });
        self
    }

    /// The qualified path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The type this descriptor describes.
    pub fn ty(&self) -> Type {
        Type::generic(self.path.clone(), self.args.clone())
    }

    /// The generic parameters, empty unless this is a template.
    pub fn generic_params(&self) -> &[String] {
        &self.generics
    }

    /// Whether this descriptor is a generic template.
    pub fn is_template(&self) -> bool {
        !self.generics.is_empty()
    }

    /// The kind of the type.
    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    /// Whether this is an enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, DescriptorKind::Enum(_))
    }

    /// The variant names of an enum.
    pub fn variants(&self) -> Option<&[String]> {
        match &self.kind {
            DescriptorKind::Enum(variants) => Some(variants),
            DescriptorKind::Object => None,
        }
    }

    /// The parent type.
    pub fn parent_type(&self) -> Option<&Type> {
        self.parent.as_ref()
    }

    /// The declared fields.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter()
    }

    /// The declared accessor methods.
    pub fn accessors(&self) -> impl Iterator<Item = &AccessorDecl> {
        self.accessors.iter()
    }

    /// The creator parameters, in order.
    pub fn creator_params(&self) -> impl Iterator<Item = &ParamDecl> {
        self.creator.iter()
    }

    /// The type-level description.
    pub fn type_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The naming rule, if the type sets one.
    pub fn rename_rule(&self) -> Option<RenameRule> {
        self.rename_all
    }
}
