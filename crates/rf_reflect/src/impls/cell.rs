//! Containers for static storage of type information.
//!
//! Used to implement [`Typed`](crate::info::Typed), by hand or by the derive macro.
//!
//! - [`NonGenericTypeInfoCell`]: an [`OnceLock`], for non-generic types.
//! - [`GenericTypeInfoCell`]: a [`TypeIdMap`] behind a [`RwLock`], for generic
//!   types whose `static CELL` is shared by every instantiation.

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use rf_utils::TypeIdMap;

use crate::info::TypeInfo;

/// Static storage of [`TypeInfo`] for a non-generic type.
///
/// ```
/// use rf_reflect::{impls::NonGenericTypeInfoCell, info::{TypeInfo, OpaqueInfo}};
///
/// struct Celsius(f64);
///
/// fn celsius_info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Celsius>()))
/// }
///
/// assert!(core::ptr::eq(celsius_info(), celsius_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Static storage of [`TypeInfo`] for a generic type.
///
/// Every instantiation gets its own leaked `'static` info, keyed by `TypeId`.
///
/// ```
/// use rf_reflect::{impls::GenericTypeInfoCell, info::{TypeInfo, OpaqueInfo}};
///
/// struct Wrapper<T>(T);
///
/// fn wrapper_info<T: 'static>() -> &'static TypeInfo {
///     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| TypeInfo::Opaque(OpaqueInfo::new::<Wrapper<T>>()))
/// }
///
/// assert!(wrapper_info::<u8>().ty().is::<Wrapper<u8>>());
/// assert!(wrapper_info::<i64>().ty().is::<Wrapper<i64>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // `value` is built outside the lock; if another thread won the race it is dropped.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *map.get_or_insert(type_id, || {
            log::trace!("created type info for `{}`", value.type_name());
            &*Box::leak(Box::new(value))
        })
    }
}
