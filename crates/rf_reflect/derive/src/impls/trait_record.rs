use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{EmbedKind, RecordDerive, RecordShape};

/// Generate implementation code for `Record`.
///
/// Match arms use declaration indices. Fields embedded by value are handed
/// out as `FieldRef::Record`/`FieldMut::Record` so paths can descend into them.
pub(crate) fn impl_trait_record(derive: &RecordDerive) -> TokenStream {
    let rf_reflect_path = derive.rf_reflect_path();
    let record_ = crate::path::record_(rf_reflect_path);
    let field_ref_ = crate::path::field_ref_(rf_reflect_path);
    let field_mut_ = crate::path::field_mut_(rf_reflect_path);

    let (field_at_tokens, field_at_mut_tokens) = match derive.shape() {
        RecordShape::Named(fields) => {
            let mut ref_arms = Vec::with_capacity(fields.len());
            let mut mut_arms = Vec::with_capacity(fields.len());

            for (index, field) in fields.iter().enumerate() {
                let ident = field.ident;
                let variant = match field.embed {
                    EmbedKind::Value => quote! { Record },
                    EmbedKind::None | EmbedKind::Indirect => quote! { Value },
                };
                ref_arms.push(quote! {
                    #index => ::core::option::Option::Some(#field_ref_::#variant(&self.#ident)),
                });
                mut_arms.push(quote! {
                    #index => ::core::option::Option::Some(#field_mut_::#variant(&mut self.#ident)),
                });
            }

            (
                quote! {
                    fn field_at(&self, index: usize) -> ::core::option::Option<#field_ref_<'_>> {
                        match index {
                            #(#ref_arms)*
                            _ => ::core::option::Option::None,
                        }
                    }
                },
                quote! {
                    fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<#field_mut_<'_>> {
                        match index {
                            #(#mut_arms)*
                            _ => ::core::option::Option::None,
                        }
                    }
                },
            )
        }
        RecordShape::Opaque => (
            quote! {
                #[inline]
                fn field_at(&self, _index: usize) -> ::core::option::Option<#field_ref_<'_>> {
                    ::core::option::Option::None
                }
            },
            quote! {
                #[inline]
                fn field_at_mut(&mut self, _index: usize) -> ::core::option::Option<#field_mut_<'_>> {
                    ::core::option::Option::None
                }
            },
        ),
    };

    let ident = derive.ident();
    let (impl_generics, ty_generics, _) = derive.generics().split_for_impl();
    let where_clause = super::where_clause_with_bounds(derive);

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            #field_at_tokens

            #field_at_mut_tokens

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }
        }
    }
}
