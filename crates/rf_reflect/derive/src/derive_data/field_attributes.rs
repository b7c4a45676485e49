use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::RECORD_ATTRIBUTE_NAME;

/// Parsed `#[record(...)]` attributes of one field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[record(column = "...")]`, kept raw: options after the first comma
    /// are stored and interpreted by the resolver.
    pub column: Option<LitStr>,
    /// `#[record(skip)]`, equivalent to `column = "-"`.
    pub skip: Option<Span>,
    /// `#[record(embed)]`.
    pub embed: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    if this.column.is_some() {
                        return Err(meta.error("duplicate `column` attribute"));
                    }
                    this.column = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    if this.skip.is_some() {
                        return Err(meta.error("duplicate `skip` attribute"));
                    }
                    this.skip = Some(meta.path.span());
                } else if meta.path.is_ident("embed") {
                    if this.embed.is_some() {
                        return Err(meta.error("duplicate `embed` attribute"));
                    }
                    this.embed = Some(meta.path.span());
                } else {
                    return Err(meta.error(
                        "unsupported record attribute, expected `column`, `skip` or `embed`",
                    ));
                }
                Ok(())
            })?;
        }

        if let (Some(column), Some(_)) = (&this.column, this.skip) {
            return Err(syn::Error::new(
                column.span(),
                "`column` and `skip` cannot be used together",
            ));
        }

        Ok(this)
    }

    /// The raw tag to record, if any.
    pub fn tag(&self) -> Option<String> {
        match (&self.column, self.skip) {
            (Some(column), _) => Some(column.value()),
            (None, Some(_)) => Some(String::from("-")),
            (None, None) => None,
        }
    }
}
