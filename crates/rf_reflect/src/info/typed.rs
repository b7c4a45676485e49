use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Record)]`](crate::derive::Record), and by this
/// crate for common opaque types (numbers, `bool`, `char`, strings, `Option`,
/// `Vec`, `Box`).
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] so the info is built only once:
///
/// ```
/// use std::any::Any;
/// use rf_reflect::{
///     FieldMut, FieldRef, Record,
///     impls::NonGenericTypeInfoCell,
///     info::{FieldInfo, RecordInfo, TypeInfo, Typed},
/// };
///
/// struct Pair {
///     pub left: i32,
///     pub right: i32,
/// }
///
/// impl Typed for Pair {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Record(RecordInfo::new::<Self>(&[
///             FieldInfo::new::<i32>("left"),
///             FieldInfo::new::<i32>("right"),
///         ])))
///     }
/// }
///
/// impl Record for Pair {
///     fn field_at(&self, index: usize) -> Option<FieldRef<'_>> {
///         match index {
///             0 => Some(FieldRef::Value(&self.left)),
///             1 => Some(FieldRef::Value(&self.right)),
///             _ => None,
///         }
///     }
///     fn field_at_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
///         match index {
///             0 => Some(FieldMut::Value(&mut self.left)),
///             1 => Some(FieldMut::Value(&mut self.right)),
///             _ => None,
///         }
///     }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
///
/// assert_eq!(Pair::type_info().as_record().unwrap().field_len(), 2);
/// ```
///
/// For generic types use [`GenericTypeInfoCell`] instead, because a `static`
/// inside a generic function is shared by every instantiation.
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the static type information of `Self`.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `T: Typed`, so a `dyn Record` can report its info.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
