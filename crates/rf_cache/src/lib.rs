#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod error;
mod named;
mod positional;
mod resolver;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use cache::FieldCache;
pub use error::ResolveError;
pub use named::{MatchMode, NamedFields, names_match};
pub use resolver::{FieldTable, declared_column};
