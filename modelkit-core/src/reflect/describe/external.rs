//! Describe implementations for external third-party crates.
//!
//! This module provides Describe trait implementations for commonly used external crates,
//! gated behind their respective feature flags.

// ============================================================================
// UUID support
// ============================================================================

#[cfg(feature = "uuid")]
impl_primitive!(uuid::Uuid => Uuid);

// ============================================================================
// Chrono support
// ============================================================================

#[cfg(feature = "chrono")]
impl_primitive!(chrono::NaiveDate => Date);

#[cfg(feature = "chrono")]
impl_primitive!(chrono::NaiveDateTime => LocalDateTime);

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> super::Describe for chrono::DateTime<Tz> {
    fn type_expr() -> crate::reflect::Type {
        crate::reflect::Type::Primitive(crate::reflect::Primitive::DateTime)
    }
}
