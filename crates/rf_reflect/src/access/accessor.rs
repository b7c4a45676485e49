//! Resolve a [`FieldPath`] against a record instance.

use core::any::{self, Any};

use thiserror::Error;

use crate::access::FieldPath;
use crate::info::{DynamicTyped, FieldInfo, FieldKind, TypeInfo};
use crate::{FieldMut, FieldRef, Record};

// -----------------------------------------------------------------------------
// Error

/// An error produced while following a [`FieldPath`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("field path is empty")]
    EmptyPath,
    #[error("`{type_name}` has no field #{index} (depth {depth})")]
    MissingField {
        type_name: &'static str,
        depth: usize,
        index: usize,
    },
    #[error("field #{index} of `{type_name}` (depth {depth}) is not an embedded record")]
    NotARecord {
        type_name: &'static str,
        depth: usize,
        index: usize,
    },
    #[error("field type mismatch: expected `{expected}`, found `{actual}`")]
    MismatchedType {
        expected: &'static str,
        actual: &'static str,
    },
}

impl AccessError {
    #[cold]
    fn missing_field(info: &TypeInfo, depth: usize, index: usize) -> Self {
        Self::MissingField {
            type_name: info.type_name(),
            depth,
            index,
        }
    }

    #[cold]
    fn not_a_record(info: &TypeInfo, depth: usize, index: usize) -> Self {
        Self::NotARecord {
            type_name: info.type_name(),
            depth,
            index,
        }
    }
}

const UNKNOWN_TYPE: &str = "<unknown>";

// -----------------------------------------------------------------------------
// Accessing

impl FieldPath {
    /// Follows the path through static type information only.
    ///
    /// Returns `None` if an index is out of range or an intermediate field is
    /// not embedded by value.
    pub fn field_info(&self, root: &'static TypeInfo) -> Option<&'static FieldInfo> {
        let (&last, prefix) = self.indices().split_last()?;
        let mut info = root;
        for &index in prefix {
            match info.as_record().ok()?.field_at(index)?.kind() {
                FieldKind::Embedded(inner) => info = inner(),
                FieldKind::Plain | FieldKind::EmbeddedIndirect => return None,
            }
        }
        info.as_record().ok()?.field_at(last)
    }

    /// Returns a shared reference to the addressed field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rf_reflect::{access::FieldPath, derive::Record};
    ///
    /// #[derive(Record)]
    /// struct Audit { pub created_by: String }
    ///
    /// #[derive(Record)]
    /// struct Order {
    ///     pub id: u32,
    ///     #[record(embed)]
    ///     pub audit: Audit,
    /// }
    ///
    /// let order = Order { id: 7, audit: Audit { created_by: "ops".into() } };
    /// let who = FieldPath::from([1, 0]).get_as::<String>(&order).unwrap();
    /// assert_eq!(who, "ops");
    /// ```
    pub fn get<'r>(&self, record: &'r dyn Record) -> Result<&'r dyn Any, AccessError> {
        let (&last, prefix) = self.indices().split_last().ok_or(AccessError::EmptyPath)?;
        let mut current = record;
        for (depth, &index) in prefix.iter().enumerate() {
            let info = current.reflect_type_info();
            current = match current.field_at(index) {
                Some(FieldRef::Record(inner)) => inner,
                Some(FieldRef::Value(_)) => {
                    return Err(AccessError::not_a_record(info, depth, index));
                }
                None => return Err(AccessError::missing_field(info, depth, index)),
            };
        }
        let info = current.reflect_type_info();
        match current.field_at(last) {
            Some(field) => Ok(field.into_any()),
            None => Err(AccessError::missing_field(info, prefix.len(), last)),
        }
    }

    /// Returns a writable slot for the addressed field.
    ///
    /// This is the hand-off to row scanning: the caller decodes a column
    /// value into the returned slot.
    pub fn slot<'r>(&self, record: &'r mut dyn Record) -> Result<&'r mut dyn Any, AccessError> {
        let (&last, prefix) = self.indices().split_last().ok_or(AccessError::EmptyPath)?;
        let mut current = record;
        for (depth, &index) in prefix.iter().enumerate() {
            let info = current.reflect_type_info();
            current = match current.field_at_mut(index) {
                Some(FieldMut::Record(inner)) => inner,
                Some(FieldMut::Value(_)) => {
                    return Err(AccessError::not_a_record(info, depth, index));
                }
                None => return Err(AccessError::missing_field(info, depth, index)),
            };
        }
        let info = current.reflect_type_info();
        match current.field_at_mut(last) {
            Some(field) => Ok(field.into_any()),
            None => Err(AccessError::missing_field(info, prefix.len(), last)),
        }
    }

    /// Like [`get`](Self::get), then downcasts to `T`.
    pub fn get_as<'r, T: Any>(&self, record: &'r dyn Record) -> Result<&'r T, AccessError> {
        let root = record.reflect_type_info();
        self.get(record)?
            .downcast_ref::<T>()
            .ok_or_else(|| self.mismatch::<T>(root))
    }

    /// Like [`slot`](Self::slot), then downcasts to `T`.
    pub fn slot_as<'r, T: Any>(
        &self,
        record: &'r mut dyn Record,
    ) -> Result<&'r mut T, AccessError> {
        let root = record.reflect_type_info();
        let error = || self.mismatch::<T>(root);
        self.slot(record)?.downcast_mut::<T>().ok_or_else(error)
    }

    /// Writes `value` into the addressed field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rf_reflect::{access::FieldPath, derive::Record};
    ///
    /// #[derive(Record, Default)]
    /// struct Sample { pub name: String, pub score: f64 }
    ///
    /// let mut sample = Sample::default();
    /// FieldPath::from([1]).assign(&mut sample, 9.5_f64).unwrap();
    /// assert_eq!(sample.score, 9.5);
    ///
    /// // The value must have the field's exact type.
    /// assert!(FieldPath::from([1]).assign(&mut sample, 9_i32).is_err());
    /// ```
    pub fn assign<T: Any>(&self, record: &mut dyn Record, value: T) -> Result<(), AccessError> {
        *self.slot_as::<T>(record)? = value;
        Ok(())
    }

    #[cold]
    fn mismatch<T: Any>(&self, root: &'static TypeInfo) -> AccessError {
        AccessError::MismatchedType {
            expected: any::type_name::<T>(),
            actual: self
                .field_info(root)
                .map_or(UNKNOWN_TYPE, |field| field.ty().name()),
        }
    }
}
