use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

/// The identity of a type together with its name.
///
/// Equality and hashing only look at the [`TypeId`]; the name is for messages.
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// # use rf_reflect::info::Type;
/// let ty = Type::of::<String>();
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert!(ty.is::<String>());
/// assert_eq!(ty.name(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    type_id: TypeId,
    type_name: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type name, as given by [`core::any::type_name`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the name without module path, e.g. `Vec<u8>` for `alloc::vec::Vec<u8>`.
    ///
    /// Only the outermost path is shortened.
    pub fn short_name(&self) -> &'static str {
        let generic_start = self.type_name.find('<').unwrap_or(self.type_name.len());
        let start = self.type_name[..generic_start]
            .rfind("::")
            .map_or(0, |pos| pos + 2);
        &self.type_name[start..]
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name)
    }
}

/// Implements `ty`, `ty_id`, `type_name` and `type_is` on an info struct holding a `Type`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying [`Type`](crate::info::Type).
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns the full type name.
        #[inline]
        pub const fn type_name(&self) -> &'static str {
            self.$field.name()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn short_name() {
        assert_eq!(Type::of::<String>().short_name(), "String");
        assert_eq!(Type::of::<Vec<String>>().short_name(), "Vec<alloc::string::String>");
        assert_eq!(Type::of::<u32>().short_name(), "u32");
    }

    #[test]
    fn identity_ignores_name() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
    }
}
