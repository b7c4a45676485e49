//! Mapping columns onto fields by name.
//!
//! Entries are keyed by the record type and a hash of the column sequence.
//! The hash only selects a bucket: every bucket holds a collision list of
//! entries, and a hit always requires the exact column sequence to match.
//! Lists are immutable snapshots behind an [`ArcSwap`]; a new entry is
//! published by prepending it with a compare-and-swap, retried until it
//! lands or an equal entry shows up.

use core::any::TypeId;
use core::fmt;
use core::hash::{BuildHasher, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use arc_swap::{ArcSwap, Guard};
use rf_reflect::access::FieldPath;
use rf_reflect::info::RecordInfo;
use rf_utils::hash::HashMap;

use crate::ResolveError;
use crate::resolver::FieldPathResolver;

// -----------------------------------------------------------------------------
// MatchMode

/// How strictly declared fields must be covered by columns.
///
/// Columns without a field are an error in both modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Every mapped field needs a column.
    #[default]
    Strict,
    /// Fields without a column are left untouched.
    Lax,
}

// -----------------------------------------------------------------------------
// NamedFields

struct NamedEntry {
    columns: Box<[Box<str>]>,
    paths: Box<[FieldPath]>,
    missing_field: Option<&'static str>,
}

impl NamedEntry {
    fn matches<C: AsRef<str>>(&self, columns: &[C]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|(stored, column)| **stored == *column.as_ref())
    }
}

/// The result of a by-name resolution: one path per column.
///
/// Cheap to clone, the underlying entry is shared with the cache.
#[derive(Clone)]
pub struct NamedFields(Arc<NamedEntry>);

impl NamedFields {
    /// Field paths aligned with [`columns`](Self::columns).
    #[inline]
    pub fn paths(&self) -> &[FieldPath] {
        &self.0.paths
    }

    /// The column sequence this was resolved for.
    #[inline]
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.columns.iter().map(|column| &**column)
    }

    /// The column name of the first declared field no column maps to.
    ///
    /// Only ever `Some` for a [`MatchMode::Lax`] result.
    #[inline]
    pub fn missing_field(&self) -> Option<&'static str> {
        self.0.missing_field
    }

    /// Returns `true` if both results are the same cached entry.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NamedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFields")
            .field("columns", &self.0.columns)
            .field("paths", &self.0.paths)
            .field("missing_field", &self.0.missing_field)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Matching

/// Compares a column with a field's column name, ignoring case and every
/// underscore on both sides.
///
/// Case is compared with simple (one char to one char) folding: `'ς'`, `'σ'`
/// and `'Σ'` all match, while `'İ'` only matches itself.
///
/// # Examples
///
/// ```
/// use rf_cache::names_match;
///
/// assert!(names_match("first_name", "FirstName"));
/// assert!(names_match("FIRST__NAME", "first_name"));
/// assert!(!names_match("first-name", "first_name"));
/// ```
pub fn names_match(column: &str, field: &str) -> bool {
    fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
        name.chars().filter(|&c| c != '_').map(simple_fold)
    }

    folded(column).eq(folded(field))
}

/// Maps `c` to one representative of its case-folding class.
fn simple_fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    let folded = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        // Multi-char lowercase forms have no simple folding.
        _ => return c,
    };
    match folded {
        '\u{3c2}' => '\u{3c3}', // final sigma
        '\u{17f}' => 's', // long s
        '\u{3d0}' => '\u{3b2}', // beta symbol
        '\u{3d1}' => '\u{3b8}', // theta symbol
        '\u{3d5}' => '\u{3c6}', // phi symbol
        '\u{3d6}' => '\u{3c0}', // pi symbol
        '\u{3f0}' => '\u{3ba}', // kappa symbol
        '\u{3f1}' => '\u{3c1}', // rho symbol
        '\u{3f5}' => '\u{3b5}', // lunate epsilon
        '\u{1e9b}' => '\u{1e61}', // long s with dot above
        '\u{1fbe}' => '\u{3b9}', // prosgegrammeni
        other => other,
    }
}

/// The first column a field named `name` maps to.
fn position_of<C: AsRef<str>>(columns: &[C], name: &str) -> Option<usize> {
    columns
        .iter()
        .position(|column| names_match(column.as_ref(), name))
}

/// A build with a column no field maps to. Never cached.
struct Unmatched {
    column: usize,
    missing_field: Option<&'static str>,
}

fn build_entry<C: AsRef<str>>(
    table: &[(FieldPath, &'static str)],
    columns: &[C],
) -> Result<NamedEntry, Unmatched> {
    let mut slots: Vec<Option<FieldPath>> = vec![None; columns.len()];
    let mut missing_field = None;

    for (path, name) in table {
        match position_of(columns, name) {
            // Later fields mapping to the same column win.
            Some(position) => slots[position] = Some(path.clone()),
            None => {
                missing_field.get_or_insert(*name);
            }
        }
    }

    if let Some(column) = slots.iter().position(Option::is_none) {
        return Err(Unmatched {
            column,
            missing_field,
        });
    }

    Ok(NamedEntry {
        columns: columns.iter().map(|column| column.as_ref().into()).collect(),
        paths: slots.into_iter().flatten().collect(),
        missing_field,
    })
}

// -----------------------------------------------------------------------------
// NamedFieldCache

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct NamedKey {
    type_id: TypeId,
    hash: u64,
}

type Entries = Vec<Arc<NamedEntry>>;
type CollisionList = ArcSwap<Entries>;

pub(crate) struct NamedFieldCache<S> {
    hasher: S,
    lists: RwLock<HashMap<NamedKey, Arc<CollisionList>>>,
}

impl<S: BuildHasher> NamedFieldCache<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            lists: RwLock::new(HashMap::default()),
        }
    }

    /// Order sensitive, with a zero byte after every name so that
    /// `["ab", "c"]` and `["a", "bc"]` differ.
    pub fn hash_columns<C: AsRef<str>>(&self, columns: &[C]) -> u64 {
        let mut hasher = self.hasher.build_hasher();
        for column in columns {
            hasher.write(column.as_ref().as_bytes());
            hasher.write_u8(0);
        }
        hasher.finish()
    }

    pub fn resolve<C: AsRef<str>>(
        &self,
        resolver: &FieldPathResolver,
        record: &'static RecordInfo,
        columns: &[C],
        mode: MatchMode,
    ) -> Result<NamedFields, ResolveError> {
        let key = NamedKey {
            type_id: record.ty_id(),
            hash: self.hash_columns(columns),
        };
        let list = self.list(key);

        let snapshot = list.load_full();
        if let Some(entry) = find(&snapshot, columns) {
            return check(entry.clone(), mode);
        }

        let entry = match build_entry(&resolver.table(record), columns) {
            Ok(entry) => Arc::new(entry),
            Err(unmatched) => {
                return Err(match (mode, unmatched.missing_field) {
                    (MatchMode::Strict, Some(field)) => ResolveError::MissingField(field),
                    _ => ResolveError::UnmatchedColumn(
                        columns[unmatched.column].as_ref().into(),
                    ),
                });
            }
        };
        if let (MatchMode::Strict, Some(field)) = (mode, entry.missing_field) {
            // Failed strict builds are recomputed on every call.
            return Err(ResolveError::MissingField(field));
        }
        log::trace!(
            "built named entry for `{}` with {} columns",
            record.type_name(),
            columns.len(),
        );

        let entry = publish(&list, snapshot, entry, columns);
        check(entry, mode)
    }

    /// All column sequences stored in the same bucket as `columns`.
    pub fn colliding_column_sets<C: AsRef<str>>(
        &self,
        record: &'static RecordInfo,
        columns: &[C],
    ) -> Vec<Box<[String]>> {
        let key = NamedKey {
            type_id: record.ty_id(),
            hash: self.hash_columns(columns),
        };
        let lists = self.lists.read().unwrap_or_else(PoisonError::into_inner);
        let Some(list) = lists.get(&key) else {
            return Vec::new();
        };
        list.load()
            .iter()
            .map(|entry| entry.columns.iter().map(|c| String::from(&**c)).collect())
            .collect()
    }

    pub fn clear(&mut self) {
        self.lists
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // Install-if-absent. A racing installer's empty list is dropped and
    // everyone shares the stored one.
    fn list(&self, key: NamedKey) -> Arc<CollisionList> {
        let found = self
            .lists
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(list) = found {
            return list;
        }

        let mut lists = self.lists.write().unwrap_or_else(PoisonError::into_inner);
        lists.entry(key).or_default().clone()
    }
}

#[inline]
fn find<'a, C: AsRef<str>>(entries: &'a Entries, columns: &[C]) -> Option<&'a Arc<NamedEntry>> {
    entries.iter().find(|entry| entry.matches(columns))
}

fn check(entry: Arc<NamedEntry>, mode: MatchMode) -> Result<NamedFields, ResolveError> {
    match (mode, entry.missing_field) {
        (MatchMode::Strict, Some(field)) => Err(ResolveError::MissingField(field)),
        _ => Ok(NamedFields(entry)),
    }
}

/// Prepends `entry` to the list, unless an equal entry appears first.
///
/// Returns whichever entry ended up in the list.
fn publish<C: AsRef<str>>(
    list: &CollisionList,
    mut current: Arc<Entries>,
    entry: Arc<NamedEntry>,
    columns: &[C],
) -> Arc<NamedEntry> {
    loop {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(entry.clone());
        next.extend(current.iter().cloned());

        let prev = list.compare_and_swap(&current, Arc::new(next));
        if Arc::ptr_eq(&prev, &current) {
            if !current.is_empty() {
                log::debug!(
                    "column hash collision, {} sequences now share one bucket",
                    current.len() + 1,
                );
            }
            #[cfg(feature = "debug")]
            debug_assert!(entry.matches(columns), "published entry differs from its query");
            return entry;
        }

        log::trace!("collision list changed concurrently, retrying");
        current = Guard::into_inner(prev);
        if let Some(found) = find(&current, columns) {
            return found.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::names_match;

    #[test]
    fn underscores_and_case() {
        assert!(names_match("first_name", "FirstName"));
        assert!(names_match("FirstName", "first_name"));
        assert!(names_match("_id_", "ID"));
        assert!(names_match("", "___"));
        assert!(names_match("\u{c9}COLE", "\u{e9}cole"));
    }

    #[test]
    fn simple_case_folding() {
        // ς, σ and Σ
        assert!(names_match("\u{3c2}", "\u{3a3}"));
        assert!(names_match("\u{3c3}", "\u{3c2}"));
        // ſ and S
        assert!(names_match("\u{17f}", "S"));
        // Kelvin sign and k
        assert!(names_match("\u{212a}", "k"));
        // İ has no one-char lowercase.
        assert!(!names_match("\u{130}", "i"));
        assert!(names_match("\u{130}", "\u{130}"));
    }

    #[test]
    fn no_other_normalization() {
        assert!(!names_match("first name", "first_name"));
        assert!(!names_match("first-name", "firstname"));
        assert!(!names_match("firstname", "first_names"));
    }
}
