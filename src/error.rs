/// The error type for the fallible constructors of this crate.
///
/// Every variant is returned before the source iterator is touched,
/// so on error no item has been consumed.
///
/// Errors raised by caller-supplied closures are never wrapped in this type.
/// See [`try_fold_until()`](crate::SeqExt::try_fold_until).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was outside of the range the operation accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use weblinq::{prelude::*, Error};
    ///
    /// let err = [1, 2, 3].into_iter().chunk_by_size(0).unwrap_err();
    ///
    /// assert!(matches!(err, Error::InvalidArgument { name: "size", .. }));
    /// assert_eq!(err.to_string(), "invalid argument `size`: must be greater than zero");
    /// ```
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the parameter is required to satisfy.
        reason: &'static str,
    },
}

impl Error {
    #[cfg(feature = "alloc")]
    #[inline]
    pub(crate) const fn zero(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "must be greater than zero",
        }
    }

    #[cfg(feature = "alloc")]
    #[inline]
    pub(crate) const fn too_large(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "too large to allocate",
        }
    }
}
