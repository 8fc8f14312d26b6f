//! Page slicing.
//!
//! Pages are 1-based. Page `n` of size `s` covers the zero-based range
//! `(n - 1) * s .. n * s`, clamped to the length of the input. A page that
//! starts at or past the end is empty, while a page number or size of zero is
//! rejected with [`AlgebraError::InvalidPageParameters`].
//!
//! # Examples
//!
//! ```rust
//! use keyalg::{PageRequest, paginate};
//!
//! assert_eq!(paginate(&[1, 2, 3, 4], 2, 2).unwrap(), vec![3, 4]);
//! assert_eq!(paginate(&[1], 2, 1).unwrap(), Vec::<i32>::new());
//!
//! let request = PageRequest::new(1, 2).unwrap();
//! assert_eq!(request.apply(&[1, 2, 3]), vec![1, 2]);
//! ```

use crate::error::{AlgebraError, Result};

/// Page size used by [`PageRequest::default`].
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Returns the elements on 1-based page `page` of size `size`.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidPageParameters`] if `page` or `size` is zero.
///
/// # Examples
///
/// ```rust
/// use keyalg::paginate;
///
/// assert_eq!(paginate(&[1, 2], 2, 1).unwrap(), vec![2]);
/// assert_eq!(paginate(&[1, 2, 3], 1, 2).unwrap(), vec![1, 2]);
/// assert!(paginate(&[1, 2, 3], 1, 0).is_err());
/// ```
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Result<Vec<T>> {
    PageRequest::new(page, size).map(|request| request.apply(items))
}

/// A validated page number and page size.
///
/// Both fields are at least 1 for any value built through [`PageRequest::new`]
/// or [`PageRequest::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PageParameters"))]
pub struct PageRequest {
    page: usize,
    size: usize,
}

/// Unvalidated wire form of a [`PageRequest`]; missing fields take the
/// defaults of [`PageRequest::default`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PageParameters {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_size")]
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PageParameters> for PageRequest {
    type Error = AlgebraError;

    fn try_from(parameters: PageParameters) -> Result<Self> {
        Self::new(parameters.page, parameters.size)
    }
}

#[cfg(feature = "serde")]
const fn default_page() -> usize {
    1
}

#[cfg(feature = "serde")]
const fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidPageParameters`] if `page` or `size` is
    /// zero.
    pub fn new(page: usize, size: usize) -> Result<Self> {
        if page == 0 || size == 0 {
            tracing::debug!(page, size, "rejected page parameters");
            return Err(AlgebraError::InvalidPageParameters { page, size });
        }
        Ok(Self { page, size })
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The maximum number of elements on the page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Zero-based index of the first element on the page, or `None` if it
    /// does not fit in a `usize`.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        (self.page - 1).checked_mul(self.size)
    }

    /// Copies the elements of `items` that fall on this page.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let page = match self.offset() {
            Some(start) if start < items.len() => {
                let end = start.saturating_add(self.size).min(items.len());
                items[start..end].to_vec()
            }
            _ => Vec::new(),
        };
        tracing::trace!(
            page = self.page,
            size = self.size,
            input = items.len(),
            output = page.len(),
            "paginate"
        );
        page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
