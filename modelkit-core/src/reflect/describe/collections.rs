//! Describe implementations for collection types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use super::Describe;
use crate::reflect::{Primitive, Type, TypeRegistry};

// ============================================================================
// Sequence types
// ============================================================================

impl_collection!(Vec<T>, VecDeque<T>, LinkedList<T> => list);

/// Slice implementation.
impl<T: Describe> Describe for [T] {
    fn type_expr() -> Type {
        Type::list(T::type_expr())
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<T>()?;
        Ok(())
    }
}

/// Fixed-size array implementation.
impl<T: Describe, const N: usize> Describe for [T; N] {
    fn type_expr() -> Type {
        Type::array(T::type_expr())
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<T>()?;
        Ok(())
    }
}

// ============================================================================
// Set types
// ============================================================================

impl_collection!(HashSet<T>, BTreeSet<T> => set);

// ============================================================================
// Map types - untyped objects, values are still registered
// ============================================================================

impl<K, V: Describe> Describe for HashMap<K, V> {
    fn type_expr() -> Type {
        Type::Primitive(Primitive::Object)
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<V>()?;
        Ok(())
    }
}

impl<K, V: Describe> Describe for BTreeMap<K, V> {
    fn type_expr() -> Type {
        Type::Primitive(Primitive::Object)
    }

    fn register_dependencies(registry: &mut TypeRegistry) -> crate::Result<()> {
        registry.register::<V>()?;
        Ok(())
    }
}
