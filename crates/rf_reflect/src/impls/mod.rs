//! Utilities for implementing [`Typed`], and the built-in opaque implementations.
//!
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! All of the following are opaque: they fill one column and are never walked.
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char`
//! - `&'static str`, `String`
//! - `Option<T>`, `Vec<T>`, `Box<T>`
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod opaque;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
