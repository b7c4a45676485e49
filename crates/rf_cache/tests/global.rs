// The global cache is process-wide, so everything touching it lives in one test.

mod common;

use common::Person;
use rf_cache::{FieldCache, MatchMode};
use rf_reflect::info::Typed;

#[test]
fn global_cache_and_reset() {
    let columns = ["last", "first", "age"];

    let a = FieldCache::global()
        .fields_by_name::<Person>(&columns, MatchMode::Strict)
        .unwrap();
    let b = FieldCache::global()
        .fields_by_name::<Person>(&columns, MatchMode::Strict)
        .unwrap();
    assert!(a.ptr_eq(&b));

    let before = FieldCache::global();
    FieldCache::reset_global();
    let after = FieldCache::global();
    assert!(!std::sync::Arc::ptr_eq(&before, &after));
    assert!(after.colliding_column_sets(Person::type_info(), &columns).is_empty());

    let c = after
        .fields_by_name::<Person>(&columns, MatchMode::Strict)
        .unwrap();
    assert!(!c.ptr_eq(&a));
    assert_eq!(c.paths(), a.paths());
}
