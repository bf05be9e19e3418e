//! Describe implementations for primitive types.

// Boolean type.
impl_primitive!(bool => Bool);

// Integer types, by width.
impl_primitive!(i8, u8 => Byte);
impl_primitive!(i16, u16, i32 => Int);
impl_primitive!(u32, i64, u64, i128, u128, isize, usize => Long);

// Floating-point types.
impl_primitive!(f32 => Float);
impl_primitive!(f64 => Double);

// String types.
impl_primitive!(str, String, char => String);

impl<T: super::Describe + ?Sized> super::Describe for &T {
    fn type_expr() -> crate::reflect::Type {
        T::type_expr()
    }

    fn descriptor() -> Option<crate::reflect::TypeDescriptor> {
        T::descriptor()
    }

    fn register_dependencies(registry: &mut crate::reflect::TypeRegistry) -> crate::Result<()> {
        T::register_dependencies(registry)
    }
}
