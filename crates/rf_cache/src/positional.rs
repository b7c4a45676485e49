//! Mapping columns onto fields by ordinal position.

use std::sync::{Arc, PoisonError, RwLock};

use rf_reflect::access::FieldPath;
use rf_reflect::info::RecordInfo;
use rf_utils::TypeIdMap;

use crate::ResolveError;
use crate::resolver::FieldPathResolver;

/// The paths of a record's field table, memoized per type.
pub(crate) struct PositionalFieldCache {
    paths: RwLock<TypeIdMap<Arc<[FieldPath]>>>,
}

impl PositionalFieldCache {
    pub const fn new() -> Self {
        Self {
            paths: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns one path per column, in declaration order.
    ///
    /// The column count is checked on every call, it is not part of the
    /// memoized state.
    pub fn fields(
        &self,
        resolver: &FieldPathResolver,
        record: &'static RecordInfo,
        num_columns: usize,
    ) -> Result<Arc<[FieldPath]>, ResolveError> {
        let paths = self.paths_of(resolver, record);
        if paths.len() != num_columns {
            return Err(ResolveError::ArityMismatch {
                columns: num_columns,
                fields: paths.len(),
            });
        }
        Ok(paths)
    }

    fn paths_of(
        &self,
        resolver: &FieldPathResolver,
        record: &'static RecordInfo,
    ) -> Arc<[FieldPath]> {
        let type_id = record.ty_id();

        let cached = self
            .paths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if let Some(paths) = cached {
            return paths;
        }

        let paths: Arc<[FieldPath]> = resolver
            .table(record)
            .iter()
            .map(|(path, _)| path.clone())
            .collect();
        let mut cache = self.paths.write().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_insert(type_id, || paths).clone()
    }

    pub fn clear(&mut self) {
        self.paths
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
