use core::fmt;
use core::hash::BuildHasher;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use rf_reflect::access::FieldPath;
use rf_reflect::info::{RecordInfo, TypeInfo, Typed};
use rf_utils::hash::FixedHashState;

use crate::named::{MatchMode, NamedFieldCache, NamedFields};
use crate::positional::PositionalFieldCache;
use crate::ResolveError;
use crate::resolver::{FieldPathResolver, FieldTable};

/// Column-to-field mapping caches for record types.
///
/// Owns the per-type field tables, the positional paths and the by-name
/// entries. All lookups take `&self` and may run concurrently; cached data is
/// never evicted, only discarded as a whole by [`reset`](Self::reset).
///
/// `S` hashes column sequences into buckets. Distinct sequences that share a
/// bucket are told apart by comparing them, so any hasher is correct.
///
/// # Examples
///
/// ```
/// use rf_cache::{FieldCache, MatchMode, ResolveError};
/// use rf_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Person {
///     pub last: String,
///     pub first: String,
///     pub age: i32,
/// }
///
/// let cache = FieldCache::new();
///
/// let fields = cache
///     .fields_by_name::<Person>(&["first", "last", "age"], MatchMode::Strict)
///     .unwrap();
/// let indices: Vec<_> = fields.paths().iter().map(|p| p.indices()[0]).collect();
/// assert_eq!(indices, [1, 0, 2]);
///
/// let err = cache.fields_by_name::<Person>(&["last", "age"], MatchMode::Strict).unwrap_err();
/// assert_eq!(err, ResolveError::MissingField("first"));
///
/// let lax = cache.fields_by_name::<Person>(&["last", "age"], MatchMode::Lax).unwrap();
/// assert_eq!(lax.missing_field(), Some("first"));
/// ```
pub struct FieldCache<S = FixedHashState> {
    resolver: FieldPathResolver,
    positional: PositionalFieldCache,
    named: NamedFieldCache<S>,
}

impl FieldCache {
    /// Creates an empty cache with the default bucketing hasher.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(FixedHashState)
    }

    /// Returns the process-wide cache, creating it on first use.
    ///
    /// The returned handle stays valid after [`reset_global`](Self::reset_global),
    /// but it then refers to the discarded cache.
    pub fn global() -> Arc<FieldCache> {
        global_slot().load_full()
    }

    /// Replaces the process-wide cache with an empty one.
    ///
    /// Intended for test isolation. Calls racing with it may still publish
    /// into the discarded cache, and their results are not carried over.
    pub fn reset_global() {
        log::debug!("resetting the global field cache");
        global_slot().store(Arc::new(FieldCache::new()));
    }
}

fn global_slot() -> &'static ArcSwap<FieldCache> {
    static GLOBAL: OnceLock<ArcSwap<FieldCache>> = OnceLock::new();
    GLOBAL.get_or_init(|| ArcSwap::from_pointee(FieldCache::new()))
}

impl Default for FieldCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> FieldCache<S> {
    /// Creates an empty cache bucketing column sequences with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            resolver: FieldPathResolver::new(),
            positional: PositionalFieldCache::new(),
            named: NamedFieldCache::with_hasher(hasher),
        }
    }

    /// Discards every cached table and entry.
    pub fn reset(&mut self) {
        log::debug!("resetting field cache");
        self.resolver.clear();
        self.positional.clear();
        self.named.clear();
    }

    /// Returns the mappable fields of `info` with their column names,
    /// in declaration order.
    pub fn field_table(&self, info: &'static TypeInfo) -> Result<FieldTable, ResolveError> {
        Ok(self.resolver.table(record_of(info)?))
    }

    /// Maps `num_columns` columns onto the fields of `info` by position.
    pub fn positional_fields(
        &self,
        info: &'static TypeInfo,
        num_columns: usize,
    ) -> Result<Arc<[FieldPath]>, ResolveError> {
        self.positional
            .fields(&self.resolver, record_of(info)?, num_columns)
    }

    /// Maps `columns` onto the fields of `info` by name.
    pub fn named_fields<C: AsRef<str>>(
        &self,
        info: &'static TypeInfo,
        columns: &[C],
        mode: MatchMode,
    ) -> Result<NamedFields, ResolveError> {
        self.named
            .resolve(&self.resolver, record_of(info)?, columns, mode)
    }

    /// [`positional_fields`](Self::positional_fields) for `T`.
    #[inline]
    pub fn fields_by_pos<T: Typed>(
        &self,
        num_columns: usize,
    ) -> Result<Arc<[FieldPath]>, ResolveError> {
        self.positional_fields(T::type_info(), num_columns)
    }

    /// [`named_fields`](Self::named_fields) for `T`.
    #[inline]
    pub fn fields_by_name<T: Typed>(
        &self,
        columns: &[impl AsRef<str>],
        mode: MatchMode,
    ) -> Result<NamedFields, ResolveError> {
        self.named_fields(T::type_info(), columns, mode)
    }

    /// Every column sequence cached in the same bucket as `columns` for `info`,
    /// `columns` included once it has been resolved.
    ///
    /// More than one sequence means their hashes collided.
    pub fn colliding_column_sets<C: AsRef<str>>(
        &self,
        info: &'static TypeInfo,
        columns: &[C],
    ) -> Vec<Box<[String]>> {
        match info.as_record() {
            Ok(record) => self.named.colliding_column_sets(record, columns),
            Err(_) => Vec::new(),
        }
    }

    /// The bucket hash of a column sequence.
    #[inline]
    pub fn hash_columns<C: AsRef<str>>(&self, columns: &[C]) -> u64 {
        self.named.hash_columns(columns)
    }
}

impl<S> fmt::Debug for FieldCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCache").finish_non_exhaustive()
    }
}

#[inline]
fn record_of(info: &'static TypeInfo) -> Result<&'static RecordInfo, ResolveError> {
    info.as_record()
        .map_err(|_| ResolveError::not_a_record(info))
}
