//! The reflection source: type expressions, type descriptors and their members.
//!
//! Types are described once, either by deriving [`Describe`] or by registering hand-written
//! [`TypeDescriptor`]s in a [`TypeRegistry`]. Everything downstream reads types through the
//! registry.

mod r#type;
pub use r#type::{CollectionKind, Primitive, Type, TypeRef};

mod descriptor;
pub use descriptor::{
    AccessorDecl, AccessorKind, DescriptorKind, FieldDecl, MemberAttrs, ParamDecl,
    TypeDescriptor,
};

mod registry;
pub use registry::{ResolvedType, TypeRegistry};

mod members;
pub use members::{
    property_name, Access, MemberEnumerator, Members, ResolvedMember, SourceKind,
};

mod describe;
pub use describe::Describe;

/// Derive macro for the [`Describe`] trait.
#[cfg(feature = "derive")]
pub use modelkit_macros::Describe;
