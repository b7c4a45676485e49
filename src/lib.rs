#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rf_cache as cache;
pub use rf_reflect as reflect;
pub use rf_utils as utils;

/// Commonly used items, `use rowfield::prelude::*;`.
pub mod prelude {
    pub use rf_cache::{FieldCache, MatchMode, NamedFields, ResolveError};
    pub use rf_reflect::access::{AccessError, FieldPath};
    pub use rf_reflect::info::Typed;
    pub use rf_reflect::Record;

    #[cfg(feature = "derive")]
    pub use rf_reflect::derive::Record;
}
