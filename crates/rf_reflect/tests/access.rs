#![cfg(feature = "derive")]

use rf_reflect::access::{AccessError, FieldPath};
use rf_reflect::derive::Record;
use rf_reflect::info::Typed;

#[derive(Record, Default, Debug, PartialEq)]
struct Address {
    pub street: String,
    pub zip: u32,
}

#[derive(Record, Default, Debug, PartialEq)]
struct Contact {
    pub email: String,
    #[record(embed)]
    pub address: Address,
}

#[derive(Record, Default, Debug, PartialEq)]
struct Customer {
    pub id: u64,
    #[record(embed)]
    pub contact: Contact,
    #[record(embed)]
    pub referrer: Option<Box<Customer>>,
}

#[test]
fn assign_nested() {
    let mut customer = Customer::default();

    FieldPath::from([0]).assign(&mut customer, 11_u64).unwrap();
    FieldPath::from([1, 0])
        .assign(&mut customer, String::from("a@b.c"))
        .unwrap();
    FieldPath::from([1, 1, 1]).assign(&mut customer, 90210_u32).unwrap();

    assert_eq!(customer.id, 11);
    assert_eq!(customer.contact.email, "a@b.c");
    assert_eq!(customer.contact.address.zip, 90210);
}

#[test]
fn slot_and_get() {
    let mut customer = Customer::default();

    let street = FieldPath::from([1, 1, 0])
        .slot_as::<String>(&mut customer)
        .unwrap();
    street.push_str("Main St");

    let path = FieldPath::from([1, 1, 0]);
    assert_eq!(path.get_as::<String>(&customer).unwrap(), "Main St");

    // A whole embedded record is addressable too.
    let address = FieldPath::from([1, 1]).get_as::<Address>(&customer).unwrap();
    assert_eq!(address.street, "Main St");
}

#[test]
fn empty_path() {
    let mut customer = Customer::default();
    let path = FieldPath::new(&[]);
    assert!(path.is_empty());
    assert_eq!(path.slot(&mut customer).unwrap_err(), AccessError::EmptyPath);
    assert_eq!(path.get(&customer).unwrap_err(), AccessError::EmptyPath);
}

#[test]
fn missing_field() {
    let mut customer = Customer::default();

    let err = FieldPath::from([9]).slot(&mut customer).unwrap_err();
    assert!(matches!(err, AccessError::MissingField { depth: 0, index: 9, .. }));

    let err = FieldPath::from([1, 1, 5]).slot(&mut customer).unwrap_err();
    match err {
        AccessError::MissingField {
            type_name,
            depth,
            index,
        } => {
            assert!(type_name.ends_with("Address"));
            assert_eq!((depth, index), (2, 5));
        }
        err => panic!("unexpected error {err}"),
    }
}

#[test]
fn descending_into_non_record() {
    let mut customer = Customer::default();

    // `id` is a plain field.
    let err = FieldPath::from([0, 0]).slot(&mut customer).unwrap_err();
    assert!(matches!(err, AccessError::NotARecord { depth: 0, index: 0, .. }));

    // Reference-like embeds are never descended into.
    let err = FieldPath::from([2, 0]).get(&customer).unwrap_err();
    assert!(matches!(err, AccessError::NotARecord { depth: 0, index: 2, .. }));
}

#[test]
fn mismatched_type() {
    let mut customer = Customer::default();

    let err = FieldPath::from([1, 1, 1])
        .assign(&mut customer, 5_i64)
        .unwrap_err();
    assert_eq!(
        err,
        AccessError::MismatchedType {
            expected: "i64",
            actual: "u32",
        }
    );
    assert_eq!(
        err.to_string(),
        "field type mismatch: expected `i64`, found `u32`"
    );
    assert_eq!(customer, Customer::default());
}

#[test]
fn static_field_info() {
    let root = Customer::type_info();

    let zip = FieldPath::from([1, 1, 1]).field_info(root).unwrap();
    assert_eq!(zip.name(), "zip");

    assert!(FieldPath::from([0, 0]).field_info(root).is_none());
    assert!(FieldPath::from([2, 0]).field_info(root).is_none());
    assert!(FieldPath::from([3]).field_info(root).is_none());
}
