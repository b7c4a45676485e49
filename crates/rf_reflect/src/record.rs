use core::any::Any;

use crate::info::DynamicTyped;

// -----------------------------------------------------------------------------
// Field references

/// A shared reference to one field, as returned by [`Record::field_at`].
pub enum FieldRef<'a> {
    /// An ordinary field.
    Value(&'a dyn Any),
    /// A field embedded by value; its own fields can be reached through it.
    Record(&'a dyn Record),
}

/// A mutable reference to one field, as returned by [`Record::field_at_mut`].
pub enum FieldMut<'a> {
    /// An ordinary field.
    Value(&'a mut dyn Any),
    /// A field embedded by value; its own fields can be reached through it.
    Record(&'a mut dyn Record),
}

impl<'a> FieldRef<'a> {
    /// Returns the field itself as `&dyn Any`.
    #[inline]
    pub fn into_any(self) -> &'a dyn Any {
        match self {
            Self::Value(value) => value,
            Self::Record(record) => record.as_any(),
        }
    }
}

impl<'a> FieldMut<'a> {
    /// Returns the field itself as `&mut dyn Any`.
    #[inline]
    pub fn into_any(self) -> &'a mut dyn Any {
        match self {
            Self::Value(value) => value,
            Self::Record(record) => record.as_any_mut(),
        }
    }
}

// -----------------------------------------------------------------------------
// Record

/// Object-safe access to the fields of a described type.
///
/// Field indices are declaration indices, the same ones used by
/// [`RecordInfo::field_at`](crate::info::RecordInfo::field_at).
/// Embedded fields are returned as [`FieldMut::Record`] so paths can descend
/// into them; every other field is a [`FieldMut::Value`].
///
/// Usually implemented by [`#[derive(Record)]`](crate::derive::Record).
/// Derived opaque types (enums, tuple and unit structs) have no fields.
pub trait Record: DynamicTyped + Any {
    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<FieldRef<'_>>;

    /// Returns the field at declaration index `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Casts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Casts to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Record {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to `&T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Downcasts to `&mut T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}
