mod common;

use common::{Order, Person};
use rf_cache::{FieldCache, ResolveError};
use rf_reflect::info::Typed;

#[test]
fn succeeds_iff_counts_agree() {
    let cache = FieldCache::new();

    for columns in 0..6 {
        let result = cache.fields_by_pos::<Person>(columns);
        if columns == 3 {
            let paths = result.unwrap();
            let indices: Vec<_> = paths.iter().map(|p| p.indices().to_vec()).collect();
            assert_eq!(indices, [vec![0], vec![1], vec![2]]);
        } else {
            assert_eq!(
                result.unwrap_err(),
                ResolveError::ArityMismatch { columns, fields: 3 }
            );
        }
    }
}

#[test]
fn arity_message() {
    let cache = FieldCache::new();
    let err = cache.fields_by_pos::<Person>(4).unwrap_err();
    assert_eq!(err.to_string(), "got 4 values, but dst struct has only 3 fields");
}

#[test]
fn flattens_embedded_records() {
    let cache = FieldCache::new();

    let paths = cache.fields_by_pos::<Order>(3).unwrap();
    let indices: Vec<_> = paths.iter().map(|p| p.indices().to_vec()).collect();
    assert_eq!(indices, [vec![0], vec![1, 0], vec![1, 1]]);

    let table = cache.field_table(Order::type_info()).unwrap();
    let names: Vec<_> = table.iter().map(|(_, name)| *name).collect();
    assert_eq!(names, ["id", "created_by", "created_at"]);
}

#[test]
fn memoized_per_type() {
    let cache = FieldCache::new();
    let a = cache.fields_by_pos::<Person>(3).unwrap();
    let b = cache.fields_by_pos::<Person>(3).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn scan_by_position() {
    let cache = FieldCache::new();
    let paths = cache.fields_by_pos::<Order>(3).unwrap();

    let mut order = Order::default();
    paths[0].assign(&mut order, 7_i64).unwrap();
    paths[1].assign(&mut order, String::from("ops")).unwrap();
    paths[2].assign(&mut order, 1_700_000_000_i64).unwrap();

    assert_eq!(order.id, 7);
    assert_eq!(order.audit.created_by, "ops");
    assert_eq!(order.audit.created_at, 1_700_000_000);
}

#[test]
fn not_a_record() {
    let cache = FieldCache::new();
    let err = cache.fields_by_pos::<u32>(1).unwrap_err();
    assert_eq!(err, ResolveError::NotARecord { type_name: "u32" });
    assert_eq!(err.to_string(), "type `u32` is not a record type");
}
