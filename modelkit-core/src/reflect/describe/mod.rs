//! Type description support.
//!
//! This module provides implementations of the [`Describe`] trait for standard Rust types,
//! mapping them to their type expressions.
//!
//! # Organization
//!
//! The implementations are organized into logical categories:
//! - `primitives`: Basic Rust types (bool, integers, floats, strings)
//! - `collections`: Container types (Vec, HashSet, maps, arrays)
//! - `wrappers`: Transparent wrapper types (Box, Arc, Option, Cell, etc.)
//! - `special`: Special standard library types (paths, network addresses, time)
//! - `external`: Third-party crate integrations (uuid, chrono)

use crate::Result;

use super::{Type, TypeDescriptor, TypeRegistry};

/// Type description.
///
/// This trait maps a Rust type to its [`Type`] expression and, for object and enum types,
/// to the [`TypeDescriptor`] the resolver reads members from.
///
/// # Usage
///
/// For custom types, use the `Describe` derive macro:
///
/// ```ignore
/// use modelkit::reflect::Describe;
///
/// #[derive(Describe)]
/// struct Customer {
///     id: i64,
///     #[model(view = "Public")]
///     name: String,
/// }
/// ```
///
/// The derive macro generates the descriptor from the struct's fields and registers the
/// types they refer to.
pub trait Describe {
    /// The type expression.
    fn type_expr() -> Type;

    /// The descriptor of an object or enum type. `None` for primitives and containers.
    fn descriptor() -> Option<TypeDescriptor> {
        None
    }

    /// Registers the types this type refers to.
    fn register_dependencies(_registry: &mut TypeRegistry) -> Result<()> {
        Ok(())
    }
}

// Macro utilities.
#[macro_use]
mod macros;

// Implementation modules.
mod collections;
mod external;
mod primitives;
mod special;
mod wrappers;

#[cfg(test)]
mod tests;
