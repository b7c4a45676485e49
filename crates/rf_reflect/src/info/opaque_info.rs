use core::any::Any;

use crate::info::{Type, impl_type_fn};

/// Metadata for types whose fields are not exposed.
///
/// Primitives, strings, enums, tuple structs and unit structs are all opaque:
/// they can fill a single column but are never walked field by field.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`] for `T`.
    #[inline]
    pub fn new<T: Any + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
