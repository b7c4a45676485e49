//! Declaration-order field tables.

use std::sync::{Arc, PoisonError, RwLock};

use rf_reflect::access::FieldPath;
use rf_reflect::info::{FieldInfo, FieldKind, RecordInfo, TypeInfo};
use rf_utils::TypeIdMap;

/// Every mappable field of a record with its column name, in declaration
/// order, embedded records flattened in place.
pub type FieldTable = Arc<[(FieldPath, &'static str)]>;

/// The column name a field is mapped by, or `None` if it is excluded.
///
/// Without a tag this is the declared name. Otherwise it is the tag up to the
/// first comma, which may be empty; a name of exactly `-` excludes the field.
///
/// # Examples
///
/// ```
/// use rf_cache::declared_column;
/// use rf_reflect::info::FieldInfo;
///
/// let field = FieldInfo::new::<String>("name");
/// assert_eq!(declared_column(&field), Some("name"));
/// assert_eq!(declared_column(&field.clone().with_tag("user_name,notnull")), Some("user_name"));
/// assert_eq!(declared_column(&field.clone().with_tag("-")), None);
/// assert_eq!(declared_column(&field.with_tag("-,")), None);
/// ```
pub fn declared_column(field: &FieldInfo) -> Option<&'static str> {
    match field.tag() {
        None => Some(field.name()),
        Some(tag) => {
            let name = tag.split_once(',').map_or(tag, |(name, _)| name);
            (name != "-").then_some(name)
        }
    }
}

/// Builds and memoizes one [`FieldTable`] per record type.
pub(crate) struct FieldPathResolver {
    tables: RwLock<TypeIdMap<FieldTable>>,
}

impl FieldPathResolver {
    pub const fn new() -> Self {
        Self {
            tables: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the table of `record`, computing it on first use.
    ///
    /// The walk runs outside the lock. Racing callers may each compute it;
    /// the first stored table wins and the others are dropped.
    pub fn table(&self, record: &'static RecordInfo) -> FieldTable {
        let type_id = record.ty_id();

        let cached = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if let Some(table) = cached {
            return table;
        }

        let table = compute_table(record);
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables
            .get_or_insert(type_id, || {
                log::debug!(
                    "computed field table for `{}`: {} of {} declared fields mapped",
                    record.type_name(),
                    table.len(),
                    record.field_len(),
                );
                table
            })
            .clone()
    }

    pub fn clear(&mut self) {
        self.tables
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

fn compute_table(record: &'static RecordInfo) -> FieldTable {
    let mut fields = Vec::with_capacity(record.field_len());
    let mut stack = Vec::with_capacity(1);
    walk(record, &mut stack, &mut fields);
    fields.into()
}

// Depth first. Records embedded by value are flattened regardless of the
// embedding field's visibility; everything else must be public.
fn walk(
    record: &'static RecordInfo,
    stack: &mut Vec<usize>,
    fields: &mut Vec<(FieldPath, &'static str)>,
) {
    for (index, field) in record.iter().enumerate() {
        stack.push(index);
        match field.kind() {
            FieldKind::EmbeddedIndirect => {}
            FieldKind::Embedded(inner) => match inner() {
                TypeInfo::Record(inner) => walk(inner, stack, fields),
                TypeInfo::Opaque(_) => push_visible(field, stack, fields),
            },
            FieldKind::Plain => push_visible(field, stack, fields),
        }
        stack.pop();
    }
}

#[inline]
fn push_visible(field: &FieldInfo, stack: &[usize], fields: &mut Vec<(FieldPath, &'static str)>) {
    if field.is_public()
        && let Some(column) = declared_column(field)
    {
        fields.push((FieldPath::new(stack), column));
    }
}
