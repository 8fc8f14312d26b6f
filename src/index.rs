//! Key-indexed views over slices.
//!
//! Every set-style operation in [`crate::algebra`] is defined in terms of an
//! index built from its secondary sequence. This module provides those
//! indexes:
//!
//! - [`to_map`]: key to owned element, last write wins
//! - [`index_by`]: key to borrowed element, last write wins
//! - [`to_set`]: key presence only
//! - [`group_by`]: key to every element with that key, in input order
//!
//! A view lives for one call. It has no identity beyond the value returned.
//!
//! # Last Write Wins
//!
//! When the key function is not injective over the input, later elements
//! overwrite earlier ones at the same key. [`crate::merge`] relies on this to
//! prefer the final occurrence in the secondary sequence.
//!
//! ```rust
//! use keyalg::to_map;
//!
//! let pairs = [(1, "first"), (2, "other"), (1, "last")];
//! let index = to_map(&pairs, |pair| pair.0);
//! assert_eq!(index[&1], (1, "last"));
//! assert_eq!(index.len(), 2);
//! ```
//!
//! # Hashing
//!
//! The hasher is fixed at build time by Cargo features and exported as
//! [`IndexHasher`]: `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash`
//! selects `ahash::RandomState`, and the default is the standard library's
//! SipHash `RandomState`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Hasher used by every key-indexed view.
#[cfg(feature = "fxhash")]
pub type IndexHasher = rustc_hash::FxBuildHasher;

/// Hasher used by every key-indexed view.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type IndexHasher = ahash::RandomState;

/// Hasher used by every key-indexed view.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type IndexHasher = std::collections::hash_map::RandomState;

/// A mapping from extracted key to value.
pub type KeyIndex<K, V> = HashMap<K, V, IndexHasher>;

/// The presence-marker form of a [`KeyIndex`].
pub type KeySet<K> = HashSet<K, IndexHasher>;

#[inline]
pub(crate) fn key_index_with_capacity<K, V>(capacity: usize) -> KeyIndex<K, V> {
    HashMap::with_capacity_and_hasher(capacity, IndexHasher::default())
}

#[inline]
pub(crate) fn key_set_with_capacity<K>(capacity: usize) -> KeySet<K> {
    HashSet::with_capacity_and_hasher(capacity, IndexHasher::default())
}

/// Builds a mapping from each element's key to a clone of the element.
///
/// Later elements overwrite earlier ones that share a key.
///
/// # Arguments
///
/// * `items` - The sequence to index
/// * `key` - Derives the key of an element
///
/// # Examples
///
/// ```rust
/// use keyalg::to_map;
///
/// let index = to_map(&[1, 2, 3], |value| *value);
/// for (key, value) in &index {
///     assert_eq!(key, value);
/// }
/// ```
pub fn to_map<T, K, F>(items: &[T], mut key: F) -> KeyIndex<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items
        .iter()
        .fold(key_index_with_capacity(items.len()), |mut index, item| {
            index.insert(key(item), item.clone());
            index
        })
}

/// Builds a mapping from each element's key to a reference to the element.
///
/// This is the borrowed form of [`to_map`] and follows the same
/// last-write-wins rule. The index cannot outlive `items`.
///
/// # Examples
///
/// ```rust
/// use keyalg::index_by;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial = index_by(&words, |word| word.as_bytes()[0]);
/// assert_eq!(by_initial[&b'a'], &"avocado");
/// assert_eq!(by_initial[&b'b'], &"banana");
/// ```
pub fn index_by<T, K, F>(items: &[T], mut key: F) -> KeyIndex<K, &T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut index = key_index_with_capacity(items.len());
    for item in items {
        index.insert(key(item), item);
    }
    index
}

/// Collects the set of keys present in `items`.
///
/// # Examples
///
/// ```rust
/// use keyalg::to_set;
///
/// let present = to_set(&[3, 1, 3, 2], |value| *value);
/// assert_eq!(present.len(), 3);
/// assert!(present.contains(&1));
/// ```
pub fn to_set<T, K, F>(items: &[T], key: F) -> KeySet<K>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut present = key_set_with_capacity(items.len());
    present.extend(items.iter().map(key));
    present
}

/// Groups clones of the elements of `items` by key.
///
/// Unlike [`to_map`], nothing is overwritten: every element lands in the group
/// of its key, and each group keeps the input order.
///
/// # Examples
///
/// ```rust
/// use keyalg::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |value| value % 2);
/// assert_eq!(groups[&1], vec![1, 3, 5]);
/// assert_eq!(groups[&0], vec![2, 4]);
/// ```
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> KeyIndex<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: KeyIndex<K, Vec<T>> = key_index_with_capacity(0);
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}
