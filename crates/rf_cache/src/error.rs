use rf_reflect::info::TypeInfo;
use thiserror::Error;

/// An error returned when columns cannot be mapped onto a record's fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The target type has no named fields.
    #[error("type `{type_name}` is not a record type")]
    NotARecord { type_name: &'static str },
    /// Positional mapping with a different number of columns and fields.
    #[error("got {columns} values, but dst struct has only {fields} fields")]
    ArityMismatch { columns: usize, fields: usize },
    /// A column no field maps to. Reported in both match modes.
    #[error("no field for column {0}")]
    UnmatchedColumn(String),
    /// A field no column maps to, by its column name. Strict mode only.
    #[error("missing field {0}")]
    MissingField(&'static str),
}

impl ResolveError {
    #[cold]
    pub(crate) fn not_a_record(info: &TypeInfo) -> Self {
        Self::NotARecord {
            type_name: info.type_name(),
        }
    }
}
