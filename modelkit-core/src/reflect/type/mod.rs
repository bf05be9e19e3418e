//! Type expressions.

mod type_ref;
pub use type_ref::TypeRef;

use core::fmt;
use serde::Serialize;

/// A base type that is always inlined at the point of reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    /// Boolean.
    Bool,
    /// 8-bit integer.
    Byte,
    /// 32-bit (or narrower) integer.
    Int,
    /// 64-bit (or pointer-sized) integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// UTF-8 string.
    String,
    /// Calendar date.
    Date,
    /// Zoned date and time.
    DateTime,
    /// Date and time without a zone.
    LocalDateTime,
    /// UUID, carried as a string.
    Uuid,
    /// Untyped object.
    Object,
}

impl Primitive {
    /// The natural type name.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "boolean",
            Primitive::Byte => "byte",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String | Primitive::Uuid => "string",
            Primitive::Date => "date",
            Primitive::DateTime => "date-time",
            // Reported through the wire-name override table of the resolver.
            Primitive::LocalDateTime => "LocalDateTime",
            Primitive::Object => "object",
        }
    }

    /// The canonical Rust path of the type.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Byte => "u8",
            Primitive::Int => "i32",
            Primitive::Long => "i64",
            Primitive::Float => "f32",
            Primitive::Double => "f64",
            Primitive::String => "String",
            Primitive::Date => "chrono::NaiveDate",
            Primitive::DateTime => "chrono::DateTime",
            Primitive::LocalDateTime => "chrono::NaiveDateTime",
            Primitive::Uuid => "uuid::Uuid",
            Primitive::Object => "serde_json::Value",
        }
    }
}

/// The container shape of a collection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKind {
    /// Ordered, growable sequence.
    List,
    /// Unordered set of unique elements.
    Set,
    /// Fixed-size sequence.
    Array,
}

impl CollectionKind {
    /// The container name.
    pub const fn name(self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Set => "Set",
            CollectionKind::Array => "Array",
        }
    }
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A primitive type.
    Primitive(Primitive),
    /// A collection of elements.
    Collection(CollectionKind, TypeRef),
    /// A nullable value, transparent for naming purposes.
    Optional(TypeRef),
    /// A registered object or enum type, with its generic arguments.
    Named {
        /// The qualified path of the type.
        path: String,
        /// Generic arguments, in declaration order.
        args: Vec<Type>,
    },
    /// A generic parameter of a type template.
    Param(String),
}

impl Type {
    /// A named type without generic arguments.
    pub fn named(path: impl Into<String>) -> Self {
        Type::Named {
            path: path.into(),
            args: Vec::new(),
        }
    }

    /// A named type with generic arguments.
    pub fn generic(path: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Named {
            path: path.into(),
            args,
        }
    }

    /// A list of `element`.
    pub fn list(element: Type) -> Self {
        Type::Collection(CollectionKind::List, TypeRef::new(element))
    }

    /// A set of `element`.
    pub fn set(element: Type) -> Self {
        Type::Collection(CollectionKind::Set, TypeRef::new(element))
    }

    /// An array of `element`.
    pub fn array(element: Type) -> Self {
        Type::Collection(CollectionKind::Array, TypeRef::new(element))
    }

    /// A nullable `inner`.
    pub fn optional(inner: Type) -> Self {
        Type::Optional(TypeRef::new(inner))
    }

    /// A generic parameter.
    pub fn param(name: impl Into<String>) -> Self {
        Type::Param(name.into())
    }

    /// The type with all `Optional` layers stripped.
    pub fn unwrapped(&self) -> &Type {
        let mut ty = self;
        while let Type::Optional(inner) = ty {
            ty = inner.inner();
        }
        ty
    }

    /// Whether this is (possibly an optional) collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.unwrapped(), Type::Collection(..))
    }

    /// Whether this is (possibly an optional) primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self.unwrapped(), Type::Primitive(_))
    }

    /// The element type if this is (possibly an optional) collection.
    pub fn element_type(&self) -> Option<&Type> {
        match self.unwrapped() {
            Type::Collection(_, element) => Some(element.inner().unwrapped()),
            _ => None,
        }
    }

    /// The qualified path if this is (possibly an optional) named type.
    pub fn path(&self) -> Option<&str> {
        match self.unwrapped() {
            Type::Named { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The last segment of the path of a named type, or the natural name otherwise.
    pub fn simple_name(&self) -> &str {
        match self.unwrapped() {
            Type::Named { path, .. } => path.rsplit("::").next().unwrap_or(path),
            Type::Primitive(primitive) => primitive.name(),
            Type::Collection(kind, _) => kind.name(),
            Type::Param(name) => name,
            Type::Optional(inner) => inner.simple_name(),
        }
    }

    /// The fully qualified name, with generic arguments.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }

    /// Replaces generic parameters by their bound types.
    ///
    /// Parameters without a binding are left in place.
    pub fn substitute(&self, bindings: &[(String, Type)]) -> Type {
        match self {
            Type::Param(name) => bindings
                .iter()
                .find(|(param, _)| param == name)
                .map(|(_, ty)| ty.clone())
                .unwrap_or_else(|| self.clone()),
            Type::Collection(kind, element) => {
                Type::Collection(*kind, TypeRef::new(element.substitute(bindings)))
            }
            Type::Optional(inner) => Type::Optional(TypeRef::new(inner.substitute(bindings))),
            Type::Named { path, args } => Type::Named {
                path: path.clone(),
                args: args.iter().map(|arg| arg.substitute(bindings)).collect(),
            },
            Type::Primitive(_) => self.clone(),
        }
    }

    /// The first generic parameter mentioned anywhere in this type.
    pub fn unbound_param(&self) -> Option<&str> {
        match self {
            Type::Param(name) => Some(name),
            Type::Collection(_, inner) | Type::Optional(inner) => inner.unbound_param(),
            Type::Named { args, .. } => args.iter().find_map(Type::unbound_param),
            Type::Primitive(_) => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(primitive) => write!(f, "{}", primitive.qualified_name()),
            Type::Collection(kind, element) => write!(f, "{}<{}>", kind.name(), element),
            Type::Optional(inner) => write!(f, "Option<{}>", inner),
            Type::Named { path, args } => {
                write!(f, "{path}")?;
                if args.is_empty() {
                    return Ok(());
                }
                write!(f, "<")?;
                let mut first = true;
                for arg in args {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            Type::Param(name) => write!(f, "{name}"),
        }
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Type::Primitive(primitive)
    }
}

impl Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names() {
        assert_eq!(Type::from(Primitive::Long).to_string(), "i64");
        assert_eq!(
            Type::list(Type::named("app::Address")).to_string(),
            "List<app::Address>"
        );
        assert_eq!(
            Type::optional(Type::generic(
                "app::Page",
                vec![Type::named("app::User"), Primitive::Int.into()]
            ))
            .to_string(),
            "Option<app::Page<app::User, i32>>"
        );
    }

    #[test]
    fn unwrapping() {
        let ty = Type::optional(Type::optional(Type::set(Type::named("app::Tag"))));
        assert!(ty.is_collection());
        assert!(!ty.is_primitive());
        assert_eq!(ty.element_type(), Some(&Type::named("app::Tag")));
        assert_eq!(ty.simple_name(), "Set");

        let named = Type::optional(Type::named("app::nested::Tag"));
        assert_eq!(named.simple_name(), "Tag");
        assert_eq!(named.path(), Some("app::nested::Tag"));
        assert_eq!(named.element_type(), None);
    }

    #[test]
    fn substitution() {
        let template = Type::list(Type::generic("app::Entry", vec![Type::param("T")]));
        let bindings = vec![("T".to_string(), Type::named("app::User"))];

        assert_eq!(template.unbound_param(), Some("T"));
        let bound = template.substitute(&bindings);
        assert_eq!(bound.unbound_param(), None);
        assert_eq!(
            bound,
            Type::list(Type::generic("app::Entry", vec![Type::named("app::User")]))
        );

        // Unknown parameters stay in place.
        let other = Type::param("U").substitute(&bindings);
        assert_eq!(other, Type::param("U"));
    }

    #[test]
    fn type_serialization() {
        let ty = Type::list(Type::from(Primitive::String));
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#""List<String>""#);
    }
}
