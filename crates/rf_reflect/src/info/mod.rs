//! Compile-time type information.
//!
//! - [`Type`]: a [`TypeId`] paired with the type's name.
//! - [`TypeInfo`]: either a [`RecordInfo`] (a struct with named fields) or an
//!   [`OpaqueInfo`] (everything whose fields are not visible to this crate).
//! - [`FieldInfo`]: one named field of a record, with its raw column tag,
//!   visibility and [`FieldKind`].
//! - [`Typed`]: static access to a type's [`TypeInfo`].
//! - [`DynamicTyped`]: dynamic dispatch for [`Typed`].
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod opaque_info;
mod record_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldInfo, FieldKind};
pub use opaque_info::OpaqueInfo;
pub use record_info::RecordInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::Type;
pub use typed::{DynamicTyped, Typed};
