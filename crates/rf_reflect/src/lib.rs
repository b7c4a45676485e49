#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `::rf_reflect`, also inside its own tests.
extern crate self as rf_reflect;

// -----------------------------------------------------------------------------
// Modules

mod record;

pub mod access;
pub mod impls;
pub mod info;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use record::{FieldMut, FieldRef, Record};

#[cfg(feature = "derive")]
pub use rf_reflect_derive as derive;
