//! See [`Record`](derive_record).
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits:
///
/// - `Typed`
/// - `Record`
///
/// Structs with named fields become records: every named field is described
/// in declaration order and can be reached by its declaration index.
/// Tuple structs, unit structs and enums are described as `Opaque` and expose
/// no fields; they may still be embedded, where they act as an ordinary field.
///
/// Lifetime parameters and unions are not supported. Type parameters must be
/// `'static`.
///
/// ## Column names
///
/// By default a field maps to the column of the same name, compared without
/// underscores and ignoring case (`first_name` matches `FirstName`).
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     pub id: i64,
///     // Only the text before the first comma is the column name.
///     #[record(column = "user_name,notnull")]
///     pub name: String,
///     // Never mapped. Same as `#[record(column = "-")]`.
///     #[record(skip)]
///     pub cached_rank: u32,
///     // Private fields are described but never mapped.
///     secret: String,
/// }
/// ```
///
/// ## Embedding
///
/// `#[record(embed)]` flattens the fields of a record into the parent, as if
/// they were declared there.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Audit {
///     pub created_by: String,
/// }
///
/// #[derive(Record)]
/// struct Order {
///     pub id: i64,
///     #[record(embed)]
///     pub audit: Audit,               // `created_by` maps to path [1, 0]
///     #[record(embed)]
///     pub previous: Option<Box<Audit>>, // reference-like: never mapped
/// }
/// ```
///
/// Reference-like embeds (`&T`, raw pointers, `Box<T>`, `Rc<T>`, `Arc<T>`
/// and any `Option<..>`) are described but never traversed nor mapped.
///
/// ## Attributes
///
/// - `#[record(column = "...")]`: raw column tag.
/// - `#[record(skip)]`: shorthand for `column = "-"`; cannot be combined with `column`.
/// - `#[record(embed)]`: transparent embedding.
///
/// These attributes can only be applied to fields.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordDerive::from_input(&ast) {
        Ok(derive) => impls::impl_record(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
