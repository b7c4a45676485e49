//! Code generation for `#[derive(Record)]`.

// -----------------------------------------------------------------------------
// Modules

mod trait_record;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::{WhereClause, parse_quote};

use crate::derive_data::{EmbedKind, RecordDerive, RecordShape};

/// Generate `Typed` and `Record` for one derived type.
pub(crate) fn impl_record(derive: &RecordDerive) -> TokenStream {
    let typed_tokens = trait_typed::impl_trait_typed(derive);
    let record_tokens = trait_record::impl_trait_record(derive);

    quote! {
        #typed_tokens

        #record_tokens
    }
}

/// The type's own where clause plus the bounds the generated impls rely on.
///
/// Every type parameter must be `Any` so fields can be described by `TypeId`,
/// and every field embedded by value must itself be `Typed + Record`. The
/// second set is only added for generic types, where it cannot be checked
/// at the definition site.
fn where_clause_with_bounds(derive: &RecordDerive) -> WhereClause {
    let mut where_clause = derive
        .generics()
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));

    if !derive.is_generic() {
        return where_clause;
    }

    for param in derive.generics().type_params() {
        let ident = &param.ident;
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::core::any::Any));
    }

    if let RecordShape::Named(fields) = derive.shape() {
        let rf_reflect_path = derive.rf_reflect_path();
        let typed_ = crate::path::typed_(rf_reflect_path);
        let record_ = crate::path::record_(rf_reflect_path);
        for field in fields.iter().filter(|f| f.embed == EmbedKind::Value) {
            let ty = field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #typed_ + #record_));
        }
    }

    where_clause
}
