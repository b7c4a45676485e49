use core::fmt;
use std::sync::Arc;

/// The location of one field inside a record, as declaration indices.
///
/// A single index addresses a direct field. Longer paths descend through
/// fields embedded by value: `[2, 0]` is field `0` of the record embedded at
/// field `2`.
///
/// Paths are cheap to clone; the indices are shared.
///
/// # Examples
///
/// ```
/// use rf_reflect::access::FieldPath;
///
/// let path = FieldPath::from([2, 0]);
/// assert_eq!(path.indices(), &[2, 0]);
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.to_string(), "#2#0");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Arc<[usize]>);

impl FieldPath {
    /// Creates a path from declaration indices, outermost first.
    #[inline]
    pub fn new(indices: &[usize]) -> Self {
        Self(Arc::from(indices))
    }

    /// Returns the declaration indices, outermost first.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of indices.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no index and so addresses nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[usize]> for FieldPath {
    #[inline]
    fn from(indices: &[usize]) -> Self {
        Self::new(indices)
    }
}

impl From<Vec<usize>> for FieldPath {
    #[inline]
    fn from(indices: Vec<usize>) -> Self {
        Self(Arc::from(indices))
    }
}

impl<const N: usize> From<[usize; N]> for FieldPath {
    #[inline]
    fn from(indices: [usize; N]) -> Self {
        Self::new(&indices)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.0.iter() {
            write!(f, "#{index}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
