use core::any::Any;

use crate::info::{FieldInfo, Type, impl_type_fn};

/// A container for compile-time information about a struct with named fields.
///
/// Fields are kept in **declaration order**.
///
/// # Examples
///
/// ```rust
/// use rf_reflect::{derive::Record, info::Typed};
///
/// #[derive(Record)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
/// }
///
/// let info = <Point as Typed>::type_info().as_record().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("y"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct RecordInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
}

impl RecordInfo {
    impl_type_fn!(ty);

    /// Creates a new [`RecordInfo`] for `T`.
    ///
    /// The field order is the input order.
    pub fn new<T: Any>(fields: &[FieldInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the field named `name`, if present.
    ///
    /// This is O(N).
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the field at `index`, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index of the field named `name`, if present.
    ///
    /// This is O(N).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of declared fields, eligible for mapping or not.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
