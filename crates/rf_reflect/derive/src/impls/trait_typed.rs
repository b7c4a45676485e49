use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::derive_data::{EmbedKind, RecordDerive, RecordField, RecordShape};

/// Generate implementation code for `Typed`.
///
/// Named structs produce a `TypeInfo::Record` listing every named field in
/// declaration order, private and skipped ones included, so declaration
/// indices stay valid paths. Other shapes produce `TypeInfo::Opaque`.
pub(crate) fn impl_trait_typed(derive: &RecordDerive) -> TokenStream {
    let rf_reflect_path = derive.rf_reflect_path();
    let typed_ = crate::path::typed_(rf_reflect_path);
    let type_info_ = crate::path::type_info_(rf_reflect_path);

    let type_info_tokens = match derive.shape() {
        RecordShape::Named(fields) => {
            let record_info_ = crate::path::record_info_(rf_reflect_path);
            let field_infos = fields.iter().map(|field| field_info_tokens(derive, field));
            quote! {
                #type_info_::Record(#record_info_::new::<Self>(&[
                    #(#field_infos,)*
                ]))
            }
        }
        RecordShape::Opaque => {
            let opaque_info_ = crate::path::opaque_info_(rf_reflect_path);
            quote! {
                #type_info_::Opaque(#opaque_info_::new::<Self>())
            }
        }
    };

    let inner_cell_tokens = if derive.is_generic() {
        let info_cell = crate::path::generic_type_info_cell_(rf_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(rf_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = derive.ident();
    let (impl_generics, ty_generics, _) = derive.generics().split_for_impl();
    let where_clause = super::where_clause_with_bounds(derive);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}

/// Similar to following:
///
/// ```ignore
/// FieldInfo::new::<Audit>("audit")
///     .with_tag("-")
///     .with_public(false)
///     .embedded::<Audit>()
/// ```
fn field_info_tokens(derive: &RecordDerive, field: &RecordField) -> TokenStream {
    let field_info_ = crate::path::field_info_(derive.rf_reflect_path());
    let ty = field.ty;
    let name = field.ident.unraw().to_string();

    let mut tokens = quote! {
        #field_info_::new::<#ty>(#name)
    };

    if let Some(tag) = field.attrs.tag() {
        tokens.extend(quote! { .with_tag(#tag) });
    }
    if !field.public {
        tokens.extend(quote! { .with_public(false) });
    }
    match field.embed {
        EmbedKind::None => {}
        EmbedKind::Value => tokens.extend(quote! { .embedded::<#ty>() }),
        EmbedKind::Indirect => tokens.extend(quote! { .embedded_indirect() }),
    }

    tokens
}
