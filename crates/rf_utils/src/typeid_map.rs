use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// `TypeId` is already a well distributed hash, so keys are passed through
/// [`NoOpHashState`] instead of being hashed again.
///
/// Only a small, map-agnostic surface is exposed so the backing container can
/// change without touching callers.
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rf_utils::TypeIdMap;
    /// static EMPTY: TypeIdMap<u32> = TypeIdMap::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Returns the value stored for `type_id`, inserting `f()` first if absent.
    ///
    /// `f` is only called when the key is missing, and an existing value is
    /// never replaced.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value stored for `type_id`.
    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of stored types.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no type is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn get_or_insert_keeps_first() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<u8>(), || 1) += 10;
        let value = *map.get_or_insert(TypeId::of::<u8>(), || 99);
        assert_eq!(value, 11);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn lookup_and_clear() {
        let mut map = TypeIdMap::new();
        map.get_or_insert(TypeId::of::<u32>(), || "u32");
        map.get_or_insert(TypeId::of::<i64>(), || "i64");

        assert_eq!(map.get(&TypeId::of::<u32>()), Some(&"u32"));
        assert!(map.get(&TypeId::of::<u16>()).is_none());

        map.clear();
        assert!(map.is_empty());
        assert!(map.get(&TypeId::of::<i64>()).is_none());
    }
}
