use core::any::Any;
use core::fmt;

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldKind

/// How a field takes part in its parent's field namespace.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// An ordinary field.
    Plain,
    /// A field embedded by value (`#[record(embed)]`).
    ///
    /// If the embedded type is a record, its fields are flattened into the parent.
    /// The function pointer delays creating the inner `TypeInfo` until first use.
    Embedded(fn() -> &'static TypeInfo),
    /// A field embedded through a reference-like type (`Box<T>`, `&T`, `Arc<T>`, ...).
    ///
    /// Such fields are never traversed and never mapped.
    EmbeddedIndirect,
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::Embedded(info) => f.debug_tuple("Embedded").field(&info().ty()).finish(),
            Self::EmbeddedIndirect => f.write_str("EmbeddedIndirect"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for one named field of a record.
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Record, info::{FieldKind, Typed}};
///
/// #[derive(Record)]
/// struct Account {
///     #[record(column = "account_id,pk")]
///     pub id: u64,
///     balance: i64,
/// }
///
/// let info = Account::type_info().as_record().unwrap();
/// let id = info.field_at(0).unwrap();
///
/// assert_eq!(id.name(), "id");
/// assert_eq!(id.tag(), Some("account_id,pk"));
/// assert!(id.is_public());
/// assert!(id.type_is::<u64>());
/// assert!(matches!(id.kind(), FieldKind::Plain));
///
/// assert!(!info.field_at(1).unwrap().is_public());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    tag: Option<&'static str>,
    public: bool,
    kind: FieldKind,
}

impl FieldInfo {
    /// Creates a public, untagged, plain field named `name` of type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            tag: None,
            public: true,
            kind: FieldKind::Plain,
        }
    }

    /// Sets the raw column tag, e.g. `"user_name"` or `"-"`.
    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Sets whether the field is visible outside its defining module.
    #[inline]
    pub const fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Marks the field as embedding `T` by value.
    #[inline]
    pub fn embedded<T: Typed>(mut self) -> Self {
        self.kind = FieldKind::Embedded(T::type_info);
        self
    }

    /// Marks the field as embedding a record through a reference-like type.
    #[inline]
    pub const fn embedded_indirect(mut self) -> Self {
        self.kind = FieldKind::EmbeddedIndirect;
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the field has type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the raw column tag, options included.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Returns `true` when the field is declared `pub` (in any form).
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.public
    }

    /// Returns the [`FieldKind`].
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }
}
