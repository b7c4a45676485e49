#![cfg(feature = "derive")]

use std::sync::Arc;

use rf_reflect::derive::Record;
use rf_reflect::info::{DynamicTyped, FieldKind, ReflectKind, Typed};
use rf_reflect::{FieldRef, Record};

#[derive(Record, Default)]
struct Audit {
    pub created_by: String,
    pub(crate) revision: u32,
}

#[derive(Record, Default)]
struct Order {
    pub id: i64,
    #[record(column = "order_total,notnull")]
    pub total: f64,
    #[record(skip)]
    pub cached: bool,
    secret: u8,
    #[record(embed)]
    pub audit: Audit,
    #[record(embed)]
    pub previous: Option<Box<Audit>>,
    #[record(embed)]
    pub shared: Arc<Audit>,
}

#[derive(Record)]
struct Meters(pub f64);

#[derive(Record)]
enum Status {
    Open,
    Closed,
}

#[derive(Record)]
struct Page<T> {
    pub items: Vec<T>,
    pub cursor: u64,
}

#[derive(Record)]
struct Wrapped<T> {
    #[record(embed)]
    pub inner: T,
}

#[derive(Record)]
struct Keyword {
    pub r#type: String,
}

#[test]
fn named_struct_is_a_record() {
    let info = Order::type_info();
    assert_eq!(info.kind(), ReflectKind::Record);

    let record = info.as_record().unwrap();
    let names: Vec<_> = record.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        ["id", "total", "cached", "secret", "audit", "previous", "shared"]
    );
}

#[test]
fn field_attributes() {
    let record = Order::type_info().as_record().unwrap();

    let id = record.field("id").unwrap();
    assert_eq!(id.tag(), None);
    assert!(id.is_public());
    assert!(id.type_is::<i64>());
    assert!(matches!(id.kind(), FieldKind::Plain));

    assert_eq!(record.field("total").unwrap().tag(), Some("order_total,notnull"));
    assert_eq!(record.field("cached").unwrap().tag(), Some("-"));
    assert!(!record.field("secret").unwrap().is_public());

    match record.field("audit").unwrap().kind() {
        FieldKind::Embedded(inner) => assert!(inner().ty().is::<Audit>()),
        kind => panic!("unexpected kind {kind:?}"),
    }
    assert!(matches!(
        record.field("previous").unwrap().kind(),
        FieldKind::EmbeddedIndirect
    ));
    assert!(matches!(
        record.field("shared").unwrap().kind(),
        FieldKind::EmbeddedIndirect
    ));
}

#[test]
fn restricted_visibility_counts_as_public() {
    let record = Audit::type_info().as_record().unwrap();
    assert!(record.field("revision").unwrap().is_public());
}

#[test]
fn raw_identifiers_are_unraw() {
    let record = Keyword::type_info().as_record().unwrap();
    assert_eq!(record.field_at(0).unwrap().name(), "type");
}

#[test]
fn other_shapes_are_opaque() {
    assert_eq!(Meters::type_info().kind(), ReflectKind::Opaque);
    assert_eq!(Status::type_info().kind(), ReflectKind::Opaque);
    assert!(Status::type_info().as_record().is_err());

    let meters = Meters(1.0);
    assert!(meters.field_at(0).is_none());
    assert_eq!(meters.0, 1.0);
    let _ = (Status::Open, Status::Closed);
}

#[test]
fn generic_records_have_one_info_per_instantiation() {
    let a = Page::<u8>::type_info();
    let b = Page::<String>::type_info();

    assert!(a.ty().is::<Page<u8>>());
    assert!(b.ty().is::<Page<String>>());
    assert!(core::ptr::eq(a, Page::<u8>::type_info()));

    let items = a.as_record().unwrap().field_at(0).unwrap();
    assert!(items.type_is::<Vec<u8>>());
}

#[test]
fn generic_embed() {
    let info = Wrapped::<Audit>::type_info().as_record().unwrap();
    match info.field_at(0).unwrap().kind() {
        FieldKind::Embedded(inner) => assert!(inner().is_record()),
        kind => panic!("unexpected kind {kind:?}"),
    }

    let value = Wrapped { inner: Audit::default() };
    assert!(matches!(value.field_at(0), Some(FieldRef::Record(_))));
}

#[test]
fn field_access_by_index() {
    let mut order = Order {
        id: 3,
        ..Default::default()
    };

    match order.field_at(0) {
        Some(FieldRef::Value(value)) => assert_eq!(value.downcast_ref::<i64>(), Some(&3)),
        _ => panic!("expected a value"),
    }
    match order.field_at(4) {
        Some(FieldRef::Record(audit)) => assert!(audit.is::<Audit>()),
        _ => panic!("expected an embedded record"),
    }
    // Reference-like embeds are plain values.
    assert!(matches!(order.field_at(5), Some(FieldRef::Value(_))));
    assert!(order.field_at(7).is_none());

    let secret = order.field_at_mut(3).unwrap().into_any();
    *secret.downcast_mut::<u8>().unwrap() = 42;
    assert_eq!(order.secret, 42);
}

#[test]
fn dyn_record_reports_type_info() {
    let order = Order::default();
    let record: &dyn Record = &order;
    assert!(record.reflect_type_info().ty().is::<Order>());
    assert!(record.downcast_ref::<Order>().is_some());
}
