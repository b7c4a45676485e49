//! Addressing fields by declaration-index path.
//!
//! A [`FieldPath`] is what column resolution hands out: the sequence of
//! declaration indices leading from a record to one of its (possibly
//! embedded) fields. [`FieldPath::slot`] turns it into a writable reference
//! on a concrete instance.

mod accessor;
mod path;

pub use accessor::AccessError;
pub use path::FieldPath;
