//! Describe implementations for special standard library types.
//!
//! This includes time types, network types, filesystem paths, and other standard library
//! types that are carried as strings or timestamps.

use crate::reflect::{Primitive, Type};

// ============================================================================
// Unit type
// ============================================================================

/// Unit type maps to an untyped object.
impl super::Describe for () {
    fn type_expr() -> Type {
        Type::Primitive(Primitive::Object)
    }
}

// ============================================================================
// Filesystem and network types
// ============================================================================

impl_primitive!(
    std::path::PathBuf,
    std::path::Path,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr => String
);

// ============================================================================
// Time types
// ============================================================================

impl_primitive!(std::time::SystemTime => DateTime);
impl_primitive!(std::time::Duration => Long);
