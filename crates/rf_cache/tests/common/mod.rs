#![allow(dead_code)]

use core::hash::{BuildHasher, Hasher};

use rf_cache::NamedFields;
use rf_reflect::derive::Record;

/// Buckets every column sequence together.
#[derive(Clone, Copy, Default)]
pub struct Colliding;

pub struct ConstHasher;

impl Hasher for ConstHasher {
    fn finish(&self) -> u64 {
        0x5EED
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

impl BuildHasher for Colliding {
    type Hasher = ConstHasher;

    fn build_hasher(&self) -> ConstHasher {
        ConstHasher
    }
}

#[derive(Record, Default, Debug, PartialEq)]
pub struct Person {
    pub last: String,
    pub first: String,
    pub age: i32,
}

#[derive(Record, Default, Debug, PartialEq)]
pub struct Audit {
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Record, Default, Debug, PartialEq)]
pub struct Order {
    pub id: i64,
    #[record(embed)]
    pub audit: Audit,
    #[record(embed)]
    pub parent: Option<Box<Audit>>,
    #[record(column = "-")]
    pub note: String,
    hidden: bool,
}

/// The declaration indices of every path, one vector per column.
pub fn indices(fields: &NamedFields) -> Vec<Vec<usize>> {
    fields
        .paths()
        .iter()
        .map(|path| path.indices().to_vec())
        .collect()
}
