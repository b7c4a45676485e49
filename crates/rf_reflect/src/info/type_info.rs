use core::{error, fmt};

use crate::info::{OpaqueInfo, RecordInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields.
    Record,
    /// Any type whose fields are not visible.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => f.pad("Record"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not the expected [`ReflectKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
    pub ty: Type,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch for `{}`: expected {}, received {}",
            self.ty, self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a type.
///
/// Obtained through [`Typed::type_info`] or, behind a `dyn Record`, through
/// [`DynamicTyped::reflect_type_info`]. Both return the same `'static` value
/// for a given type.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Record(RecordInfo),
    Opaque(OpaqueInfo),
}

impl TypeInfo {
    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Record(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the full type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns the [`ReflectKind`].
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Record(_) => ReflectKind::Record,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns `true` for [`TypeInfo::Record`].
    #[inline]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Converts to [`RecordInfo`], or reports the actual kind.
    #[inline]
    pub fn as_record(&self) -> Result<&RecordInfo, ReflectKindError> {
        match self {
            Self::Record(info) => Ok(info),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Record,
                received: self.kind(),
                ty: *self.ty(),
            }),
        }
    }

    /// Converts to [`OpaqueInfo`], or reports the actual kind.
    #[inline]
    pub fn as_opaque(&self) -> Result<&OpaqueInfo, ReflectKindError> {
        match self {
            Self::Opaque(info) => Ok(info),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Opaque,
                received: self.kind(),
                ty: *self.ty(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReflectKind, TypeInfo};
    use crate::info::{OpaqueInfo, Typed};

    #[test]
    fn opaque_is_not_record() {
        let info = TypeInfo::Opaque(OpaqueInfo::new::<u64>());
        let err = info.as_record().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Record);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert!(err.ty.is::<u64>());
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch for `u64`: expected Record, received Opaque"
        );
    }

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(<i32 as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert!(!<String as Typed>::type_info().is_record());
    }
}
