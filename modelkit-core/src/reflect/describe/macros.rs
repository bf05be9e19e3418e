//! Macros for implementing the Describe trait.

/// Implements the Describe trait for multiple types mapping to the same primitive.
///
/// # Examples
///
/// ```ignore
/// impl_primitive!(bool => Bool);
/// impl_primitive!(i16, i32, u16 => Int);
/// ```
macro_rules! impl_primitive {
    ($($ty:ty),+ => $primitive:ident) => {
        $(
            impl $crate::reflect::Describe for $ty {
                fn type_expr() -> $crate::reflect::Type {
                    $crate::reflect::Type::Primitive($crate::reflect::Primitive::$primitive)
                }
            }
        )+
    };
}

/// Implements the Describe trait for a generic collection type.
///
/// The element type is registered along with the collection.
///
/// # Examples
///
/// ```ignore
/// impl_collection!(Vec<T> => list);
/// impl_collection!(HashSet<T> => set);
/// ```
macro_rules! impl_collection {
    ($($ty:ident<$generic:ident>),+ => $ctor:ident) => {
        $(
            impl<$generic: $crate::reflect::Describe> $crate::reflect::Describe for $ty<$generic> {
                fn type_expr() -> $crate::reflect::Type {
                    $crate::reflect::Type::$ctor($generic::type_expr())
                }

                fn register_dependencies(
                    registry: &mut $crate::reflect::TypeRegistry,
                ) -> $crate::Result<()> {
                    registry.register::<$generic>()?;
                    Ok(())
                }
            }
        )+
    };
}

/// Implements the Describe trait for wrappers that are transparent to the resolver.
///
/// # Examples
///
/// ```ignore
/// impl_transparent!(Box<T>, std::sync::Arc<T>);
/// ```
macro_rules! impl_transparent {
    ($($($seg:ident)::+ <$generic:ident>),+) => {
        $(
            impl<$generic: $crate::reflect::Describe + ?Sized> $crate::reflect::Describe
                for $($seg)::+<$generic>
            {
                fn type_expr() -> $crate::reflect::Type {
                    $generic::type_expr()
                }

                fn descriptor() -> Option<$crate::reflect::TypeDescriptor> {
                    $generic::descriptor()
                }

                fn register_dependencies(
                    registry: &mut $crate::reflect::TypeRegistry,
                ) -> $crate::Result<()> {
                    $generic::register_dependencies(registry)
                }
            }
        )+
    };
}
