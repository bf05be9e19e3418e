/// The Error type for the modelkit crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The type is not known to the type registry.
    UnknownType(String),
    /// Two metadata entries of the same type share an internal name.
    DuplicateProperty {
        /// The qualified name of the type being introspected.
        ty: String,
        /// The duplicated internal name.
        name: String,
    },
    /// A member type still refers to a generic parameter after substitution.
    UnboundTypeParameter {
        /// The qualified name of the type declaring the member.
        ty: String,
        /// The name of the unbound parameter.
        param: String,
    },
    /// Neither operation context provides a wire name for a property.
    MissingExternalName {
        /// The qualified name of the type being modeled.
        ty: String,
        /// The internal name of the property.
        property: String,
    },
    /// A registered type descriptor is inconsistent.
    InvalidDescriptor {
        /// The qualified name of the offending descriptor.
        ty: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// The Result type for the modelkit crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownType(ty) => write!(f, "Type `{ty}` is not registered"),
            Error::DuplicateProperty { ty, name } => {
                write!(f, "Type `{ty}` declares property `{name}` more than once")
            }
            Error::UnboundTypeParameter { ty, param } => {
                write!(f, "Generic parameter `{param}` of `{ty}` is not bound")
            }
            Error::MissingExternalName { ty, property } => {
                write!(f, "No external name for property `{property}` of `{ty}`")
            }
            Error::InvalidDescriptor { ty, reason } => {
                write!(f, "Invalid descriptor for `{ty}`: {reason}")
            }
        }
    }
}
