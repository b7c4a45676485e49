mod common;

use std::sync::Barrier;
use std::thread;

use common::{Colliding, Person, indices};
use rf_cache::{FieldCache, MatchMode, NamedFields};
use rf_reflect::info::Typed;

const THREADS: usize = 10;
const TRIALS: usize = 100;

const A: [&str; 3] = ["first", "last", "age"];
const B: [&str; 3] = ["age", "first", "last"];

fn race<S>(
    cache: &FieldCache<S>,
    pick: impl Fn(usize) -> &'static [&'static str] + Sync,
) -> Vec<NamedFields>
where
    S: core::hash::BuildHasher + Sync,
{
    let barrier = Barrier::new(THREADS);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let barrier = &barrier;
                let pick = &pick;
                scope.spawn(move || {
                    barrier.wait();
                    cache
                        .fields_by_name::<Person>(pick(i), MatchMode::Strict)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

#[test]
fn racing_first_resolvers_converge() {
    for _ in 0..TRIALS {
        let cache = FieldCache::new();
        let results = race(&cache, |_| &A);

        for fields in &results {
            assert!(fields.ptr_eq(&results[0]));
            assert_eq!(indices(fields), [vec![1], vec![0], vec![2]]);
        }
        assert_eq!(cache.colliding_column_sets(Person::type_info(), &A).len(), 1);
    }
}

#[test]
fn racing_resolvers_alternate_colliding_keys() {
    for _ in 0..TRIALS {
        let cache = FieldCache::with_hasher(Colliding);
        let results = race(&cache, |i| if i % 2 == 0 { &A } else { &B });

        for (i, fields) in results.iter().enumerate() {
            let same_key = &results[i % 2];
            assert!(fields.ptr_eq(same_key));
            if i % 2 == 0 {
                assert_eq!(fields.columns().collect::<Vec<_>>(), A);
                assert_eq!(indices(fields), [vec![1], vec![0], vec![2]]);
            } else {
                assert_eq!(fields.columns().collect::<Vec<_>>(), B);
                assert_eq!(indices(fields), [vec![2], vec![1], vec![0]]);
            }
        }
        assert_eq!(cache.colliding_column_sets(Person::type_info(), &A).len(), 2);
    }
}

#[test]
fn uneven_mix_of_colliding_keys() {
    for _ in 0..TRIALS {
        let cache = FieldCache::with_hasher(Colliding);
        let results = race(&cache, |i| if i % 3 == 0 { &A } else { &B });

        let (a, b): (Vec<_>, Vec<_>) = results.iter().partition(|f| f.columns().eq(A));
        assert_eq!((a.len(), b.len()), (4, 6));
        assert!(a.iter().all(|f| f.ptr_eq(a[0])));
        assert!(b.iter().all(|f| f.ptr_eq(b[0])));
        assert_eq!(cache.colliding_column_sets(Person::type_info(), &B).len(), 2);
    }
}
