//! Parse a `DeriveInput` into the data needed by [`impls`](crate::impls).

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod record_derive;
mod record_field;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use record_derive::{RecordDerive, RecordShape};
pub(crate) use record_field::{EmbedKind, RecordField};
