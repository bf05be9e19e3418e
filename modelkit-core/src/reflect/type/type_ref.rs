use super::Type;
use core::{fmt, ops::Deref};

/// An owned, boxed reference to a nested [`Type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(Box<Type>);

impl TypeRef {
    /// Creates a new type reference.
    pub fn new(inner: Type) -> Self {
        Self(Box::new(inner))
    }

    /// Returns a reference to the inner type.
    pub fn inner(&self) -> &Type {
        &self.0
    }

    /// Consumes the reference, returning the inner type.
    pub fn into_inner(self) -> Type {
        *self.0
    }
}

impl Deref for TypeRef {
    type Target = Type;

    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner())
    }
}

impl PartialEq<Type> for TypeRef {
    fn eq(&self, other: &Type) -> bool {
        self.inner() == other
    }
}

impl From<Type> for TypeRef {
    fn from(inner: Type) -> Self {
        Self::new(inner)
    }
}
