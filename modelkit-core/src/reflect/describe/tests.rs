//! Tests for Describe trait implementations.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use super::*;
use crate::reflect::{MemberAttrs, Primitive};

#[test]
fn primitive_type() {
    assert_eq!(bool::type_expr(), Type::Primitive(Primitive::Bool));
    assert_eq!(i32::type_expr(), Type::Primitive(Primitive::Int));
    assert_eq!(u64::type_expr(), Type::Primitive(Primitive::Long));
    assert_eq!(f64::type_expr(), Type::Primitive(Primitive::Double));
    assert_eq!(<&str>::type_expr(), Type::Primitive(Primitive::String));
    assert_eq!(String::type_expr(), Type::Primitive(Primitive::String));
    assert!(String::descriptor().is_none());
}

#[test]
fn optional_type() {
    assert_eq!(
        <Option<i64>>::type_expr(),
        Type::optional(Primitive::Long.into())
    );
}

#[test]
fn collection_type() {
    assert_eq!(
        <Vec<String>>::type_expr(),
        Type::list(Primitive::String.into())
    );
    assert_eq!(
        <HashSet<u8>>::type_expr(),
        Type::set(Primitive::Byte.into())
    );
    assert_eq!(<[bool; 4]>::type_expr(), Type::array(Primitive::Bool.into()));
    assert_eq!(
        <BTreeMap<String, i32>>::type_expr(),
        Type::Primitive(Primitive::Object)
    );
}

#[test]
fn transparent_wrappers() {
    assert_eq!(<Box<str>>::type_expr(), Type::Primitive(Primitive::String));
    assert_eq!(
        <Arc<Vec<f32>>>::type_expr(),
        Type::list(Primitive::Float.into())
    );
    assert_eq!(
        <std::borrow::Cow<'_, str>>::type_expr(),
        Type::Primitive(Primitive::String)
    );
}

struct Tag;

impl Describe for Tag {
    fn type_expr() -> Type {
        Type::named("app::Tag")
    }

    fn descriptor() -> Option<TypeDescriptor> {
        Some(
            TypeDescriptor::object("app::Tag").field("label", Primitive::String, MemberAttrs::new()),
        )
    }
}

#[test]
fn registration_through_containers() {
    let mut registry = TypeRegistry::new();
    registry.register::<Option<Vec<Box<Tag>>>>().unwrap();

    assert!(registry.contains(&Type::named("app::Tag")));
    assert_eq!(
        <Option<Vec<Box<Tag>>>>::type_expr(),
        Type::optional(Type::list(Type::named("app::Tag")))
    );
}
