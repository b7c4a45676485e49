//! Paths into `rf_reflect` used by generated code.
//!
//! Kept in one place so a reorganization of `rf_reflect` only touches this file.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `rf_reflect` crate.
///
/// 1. For crates that depend on `rf_reflect`, `::rf_reflect` is returned.
/// 2. For crates that depend on `rowfield`, `::rowfield::reflect` is returned.
/// 3. For other situations, `::rf_reflect` is returned, but this may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is called once per derive and
/// the result is passed around.
pub(crate) fn rf_reflect() -> syn::Path {
    rf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rf_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn typed_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn record_info_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn record_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::Record
    }
}

#[inline(always)]
pub(crate) fn field_ref_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::FieldRef
    }
}

#[inline(always)]
pub(crate) fn field_mut_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::FieldMut
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(rf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rf_reflect_path::impls::GenericTypeInfoCell
    }
}
