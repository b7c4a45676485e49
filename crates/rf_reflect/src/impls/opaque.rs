use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{OpaqueInfo, TypeInfo, Typed};

macro_rules! impl_typed_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
                }
            }
        )*
    };
}

macro_rules! impl_typed_opaque_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: 'static> Typed for $ty<T> {
                fn type_info() -> &'static TypeInfo {
                    static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                    CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
                }
            }
        )*
    };
}

impl_typed_opaque!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char,
    &'static str, String,
);

impl_typed_opaque_generic!(Option, Vec, Box);

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn generic_instances_are_distinct() {
        let a = <Option<u8> as Typed>::type_info();
        let b = <Option<String> as Typed>::type_info();
        assert!(a.ty().is::<Option<u8>>());
        assert!(b.ty().is::<Option<String>>());
        assert!(core::ptr::eq(a, <Option<u8> as Typed>::type_info()));
    }

    #[test]
    fn all_opaque() {
        assert_eq!(<Vec<i64> as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<&'static str as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<f64 as Typed>::type_info().type_name(), "f64");
    }
}
