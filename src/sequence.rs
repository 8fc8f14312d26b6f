//! Method syntax for the collection algebra.
//!
//! [`SequenceAlgebra`] is implemented for every slice `[T]` with `T: Clone`,
//! so the operations read left to right on slices, arrays and `Vec`s. Each
//! method delegates to the free function of the same family and has the same
//! semantics.
//!
//! # Examples
//!
//! ```rust
//! use keyalg::SequenceAlgebra;
//!
//! let stored = vec![1, 2, 3];
//! let incoming = vec![3, 4, 5];
//!
//! let merged = stored.merge_by(&incoming, |value| *value);
//! assert_eq!(merged, vec![1, 2, 3, 4, 5]);
//!
//! let page = merged
//!     .filter_by(|value| value % 2 == 1)
//!     .paginate(1, 2)
//!     .unwrap();
//! assert_eq!(page.join_with(",", |value| value.to_string()), "1,3");
//! ```

use std::hash::Hash;

use crate::error::Result;
use crate::index::KeyIndex;

/// Extension trait exposing the collection algebra as methods.
///
/// See the crate root for the semantics of each operation; every method here
/// is a direct call to the corresponding free function.
pub trait SequenceAlgebra {
    /// The element type of the sequence.
    type Element: Clone;

    /// Method form of [`crate::map`].
    fn map_each<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&Self::Element) -> R;

    /// Method form of [`crate::reduce`].
    fn reduce_left<A, F>(&self, function: F, init: A) -> A
    where
        F: FnMut(A, &Self::Element) -> A;

    /// Method form of [`crate::filter`].
    fn filter_by<P>(&self, predicate: P) -> Vec<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool;

    /// Method form of [`crate::to_map`].
    fn to_map_by<K, F>(&self, key: F) -> KeyIndex<K, Self::Element>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::group_by`].
    fn group_by_key<K, F>(&self, key: F) -> KeyIndex<K, Vec<Self::Element>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::unique`].
    fn unique_by<K, F>(&self, key: F) -> Vec<Self::Element>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::diff`].
    fn diff_by<K, F>(&self, other: &[Self::Element], key: F) -> Vec<Self::Element>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::intersect`].
    fn intersect_by<K, F>(&self, other: &[Self::Element], key: F) -> Vec<Self::Element>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::partition`].
    fn partition_by<K, F>(
        &self,
        other: &[Self::Element],
        key: F,
    ) -> (Vec<Self::Element>, Vec<Self::Element>)
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::merge`].
    fn merge_by<K, F>(&self, other: &[Self::Element], key: F) -> Vec<Self::Element>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::contains`].
    fn contains_by<K, F>(&self, probe: &Self::Element, key: F) -> bool
    where
        K: Eq + Hash,
        F: FnMut(&Self::Element) -> K;

    /// Method form of [`crate::paginate`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgebraError::InvalidPageParameters`] if `page` or
    /// `size` is zero.
    fn paginate(&self, page: usize, size: usize) -> Result<Vec<Self::Element>>;

    /// Method form of [`crate::join`].
    fn join_with<S, F>(&self, separator: &str, function: F) -> String
    where
        S: AsRef<str>,
        F: FnMut(&Self::Element) -> S;
}

impl<T: Clone> SequenceAlgebra for [T] {
    type Element = T;

    #[inline]
    fn map_each<R, F>(&self, function: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        crate::transform::map(self, function)
    }

    #[inline]
    fn reduce_left<A, F>(&self, function: F, init: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        crate::transform::reduce(self, function, init)
    }

    #[inline]
    fn filter_by<P>(&self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        crate::transform::filter(self, predicate)
    }

    #[inline]
    fn to_map_by<K, F>(&self, key: F) -> KeyIndex<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::index::to_map(self, key)
    }

    #[inline]
    fn group_by_key<K, F>(&self, key: F) -> KeyIndex<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::index::group_by(self, key)
    }

    #[inline]
    fn unique_by<K, F>(&self, key: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::unique(self, key)
    }

    #[inline]
    fn diff_by<K, F>(&self, other: &[T], key: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::diff(self, other, key)
    }

    #[inline]
    fn intersect_by<K, F>(&self, other: &[T], key: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::intersect(self, other, key)
    }

    #[inline]
    fn partition_by<K, F>(&self, other: &[T], key: F) -> (Vec<T>, Vec<T>)
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::partition(self, other, key)
    }

    #[inline]
    fn merge_by<K, F>(&self, other: &[T], key: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::merge(self, other, key)
    }

    #[inline]
    fn contains_by<K, F>(&self, probe: &T, key: F) -> bool
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        crate::algebra::contains(self, probe, key)
    }

    #[inline]
    fn paginate(&self, page: usize, size: usize) -> Result<Vec<T>> {
        crate::paginate::paginate(self, page, size)
    }

    #[inline]
    fn join_with<S, F>(&self, separator: &str, function: F) -> String
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        crate::text::join(self, separator, function)
    }
}
