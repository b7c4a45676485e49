use syn::{Field, GenericArgument, Ident, PathArguments, Type, Visibility};

use super::FieldAttributes;

/// The `FieldKind` a field is generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmbedKind {
    /// No `#[record(embed)]`.
    None,
    /// `#[record(embed)]` on a value type.
    Value,
    /// `#[record(embed)]` on a reference-like type, never traversed.
    Indirect,
}

/// One named field of a derived record.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub public: bool,
    pub embed: EmbedKind,
    pub attrs: FieldAttributes,
}

impl<'a> RecordField<'a> {
    pub fn new(field: &'a Field) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        // Named fields always have an ident.
        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "`#[derive(Record)]` expects named fields")
        })?;

        let embed = match attrs.embed {
            None => EmbedKind::None,
            Some(_) if is_reference_like(&field.ty) => EmbedKind::Indirect,
            Some(_) => EmbedKind::Value,
        };

        Ok(Self {
            ident,
            ty: &field.ty,
            public: !matches!(field.vis, Visibility::Inherited),
            embed,
            attrs,
        })
    }
}

/// Types that refer to a record rather than contain it.
///
/// `&T`, `*const T`, `*mut T`, `Box<T>`, `Rc<T>`, `Arc<T>` and any `Option<..>`.
/// Only the last path segment is inspected, so `std::sync::Arc<T>` and a bare
/// `Arc<T>` are both recognized.
fn is_reference_like(ty: &Type) -> bool {
    const POINTERS: &[&str] = &["Box", "Rc", "Arc", "Option"];

    match ty {
        Type::Reference(_) | Type::Ptr(_) => true,
        Type::Group(group) => is_reference_like(&group.elem),
        Type::Paren(paren) => is_reference_like(&paren.elem),
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| {
                POINTERS.iter().any(|name| segment.ident == *name)
                    && matches!(segment.arguments, PathArguments::AngleBracketed(ref args)
                        if args.args.iter().any(|arg| matches!(arg, GenericArgument::Type(_))))
            }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_reference_like;

    fn check(ty: &str) -> bool {
        is_reference_like(&syn::parse_str(ty).unwrap())
    }

    #[test]
    fn reference_like() {
        assert!(check("&'static Audit"));
        assert!(check("*const Audit"));
        assert!(check("Box<Audit>"));
        assert!(check("std::sync::Arc<Audit>"));
        assert!(check("::std::rc::Rc<Audit>"));
        assert!(check("Option<Audit>"));
        assert!(check("Option<Box<Audit>>"));
    }

    #[test]
    fn by_value() {
        assert!(!check("Audit"));
        assert!(!check("crate::model::Audit"));
        assert!(!check("Page<u32>"));
        assert!(!check("[u8; 4]"));
        // A user type that happens to be named `Box`, without arguments.
        assert!(!check("Box"));
    }
}
