//! Describe implementations for wrapper types.
//!
//! This module contains implementations for types that transparently wrap other types,
//! such as smart pointers, cells, and optional types.

use super::Describe;
use crate::reflect::{Type, TypeRegistry};

// ============================================================================
// Optional type
// ============================================================================

impl<T: Describe> Describe for Option<T> {
    fn type_expr() -> Type {
        Type::optional(T::type_expr())
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<T>()?;
        Ok(())
    }
}

// ============================================================================
// Smart pointer types - transparent wrappers
// ============================================================================

impl_transparent!(Box<T>, std::rc::Rc<T>, std::sync::Arc<T>);

// ============================================================================
// Cell types - transparent wrappers
// ============================================================================

impl_transparent!(std::cell::Cell<T>, std::cell::RefCell<T>);
impl_transparent!(std::sync::Mutex<T>, std::sync::RwLock<T>);

// ============================================================================
// Cow type
// ============================================================================

impl<T> Describe for std::borrow::Cow<'_, T>
where
    T: Describe + ToOwned + ?Sized,
{
    fn type_expr() -> Type {
        T::type_expr()
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<T>()?;
        Ok(())
    }
}
