use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Path};

use super::RecordField;

/// The shape a derived type takes.
pub(crate) enum RecordShape<'a> {
    /// A struct with named fields, in declaration order.
    Named(Vec<RecordField<'a>>),
    /// Tuple structs, unit structs and enums.
    Opaque,
}

/// Everything needed to generate the impls of one `#[derive(Record)]`.
pub(crate) struct RecordDerive<'a> {
    rf_reflect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    shape: RecordShape<'a>,
}

impl<'a> RecordDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.params.iter().find_map(|param| match param {
            GenericParam::Lifetime(lifetime) => Some(lifetime),
            _ => None,
        }) {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`#[derive(Record)]` does not support lifetime parameters, records must be `'static`",
            ));
        }

        let shape = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => RecordShape::Named(
                    named
                        .named
                        .iter()
                        .map(RecordField::new)
                        .collect::<syn::Result<_>>()?,
                ),
                Fields::Unnamed(_) | Fields::Unit => RecordShape::Opaque,
            },
            Data::Enum(_) => RecordShape::Opaque,
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Record)]` does not support unions",
                ));
            }
        };

        Ok(Self {
            rf_reflect_path: crate::path::rf_reflect(),
            ident: &input.ident,
            generics: &input.generics,
            shape,
        })
    }

    #[inline]
    pub fn rf_reflect_path(&self) -> &Path {
        &self.rf_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn shape(&self) -> &RecordShape<'a> {
        &self.shape
    }

    /// Whether the type has type or const parameters, and so needs
    /// one type info per instantiation.
    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
