//! Error types for the collection algebra.
//!
//! Almost every operation in this crate is total: empty inputs produce empty
//! outputs (or the initial accumulator) rather than failing. The one exception
//! is pagination, which rejects page numbers and page sizes below 1.

use thiserror::Error;

/// Result alias used by the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Errors produced by the collection algebra.
///
/// # Examples
///
/// ```rust
/// use keyalg::{AlgebraError, paginate};
///
/// let error = paginate(&[1, 2, 3], 0, 10).unwrap_err();
/// assert_eq!(error, AlgebraError::InvalidPageParameters { page: 0, size: 10 });
/// assert_eq!(
///     error.to_string(),
///     "invalid page parameters: page=0, size=10 (both must be at least 1)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AlgebraError {
    /// The 1-based page number or the page size was zero.
    #[error("invalid page parameters: page={page}, size={size} (both must be at least 1)")]
    InvalidPageParameters {
        /// The requested page number.
        page: usize,
        /// The requested page size.
        size: usize,
    },
}
