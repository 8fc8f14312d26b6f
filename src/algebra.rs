//! Key-based set algebra over slices.
//!
//! Each operation compares elements by the key a caller-supplied closure
//! extracts from them. Binary operations index their secondary sequence once
//! and then scan the primary sequence once, so they run in
//! `O(|primary| + |secondary|)` and keep the primary sequence's order.
//!
//! | Operation     | Output                                                      |
//! |---------------|-------------------------------------------------------------|
//! | [`unique`]    | first element of each key                                   |
//! | [`diff`]      | primary elements whose key is absent from the secondary     |
//! | [`intersect`] | primary elements whose key is present in the secondary      |
//! | [`partition`] | `(diff, intersect)` from one scan                           |
//! | [`merge`]     | primary with shared keys replaced, then unmatched secondary |
//! | [`contains`]  | whether the probe's key occurs                              |
//!
//! # Examples
//!
//! ```rust
//! use keyalg::{diff, intersect, merge};
//!
//! let left = [1, 2, 3, 4, 5];
//! let right = [4, 5, 6, 7, 8];
//! let identity = |value: &i32| *value;
//!
//! assert_eq!(diff(&left, &right, identity), vec![1, 2, 3]);
//! assert_eq!(intersect(&left, &right, identity), vec![4, 5]);
//! assert_eq!(merge(&[1, 2, 3], &[3, 4, 5], identity), vec![1, 2, 3, 4, 5]);
//! ```

use std::hash::Hash;

use crate::index::{index_by, key_set_with_capacity, to_set};

/// Keeps the first element of each distinct key, in input order.
///
/// Later elements whose key was already seen are dropped, which is the
/// opposite tie-break from [`crate::to_map`].
///
/// # Examples
///
/// ```rust
/// use keyalg::unique;
///
/// let values = [1, 2, 1, 3, 4, 5, 1, 2, 3, 4];
/// assert_eq!(unique(&values, |value| *value), vec![1, 2, 3, 4, 5]);
///
/// let people = [(1, "tom"), (2, "jerry"), (1, "tom again")];
/// assert_eq!(unique(&people, |person| person.0), vec![(1, "tom"), (2, "jerry")]);
/// ```
pub fn unique<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = key_set_with_capacity(items.len());
    let result: Vec<T> = items
        .iter()
        .filter(|&item| seen.insert(key(item)))
        .cloned()
        .collect();
    tracing::trace!(
        input = items.len(),
        dropped = items.len() - result.len(),
        "unique"
    );
    result
}

/// Returns the elements of `primary` whose key does not occur in `secondary`.
///
/// # Examples
///
/// ```rust
/// use keyalg::diff;
///
/// assert_eq!(diff(&[1, 2, 3], &[4, 5, 6], |value| *value), vec![1, 2, 3]);
/// assert!(diff(&[1, 2, 3], &[1, 2, 3], |value| *value).is_empty());
/// ```
pub fn diff<T, K, F>(primary: &[T], secondary: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let present = to_set(secondary, &mut key);
    primary
        .iter()
        .filter(|&item| !present.contains(&key(item)))
        .cloned()
        .collect()
}

/// Returns the elements of `primary` whose key occurs in `secondary`.
///
/// The returned elements come from `primary`, not `secondary`. Use [`merge`]
/// to adopt the secondary sequence's values.
///
/// # Examples
///
/// ```rust
/// use keyalg::intersect;
///
/// let stored = [(1, "old"), (2, "old")];
/// let incoming = [(2, "new")];
/// assert_eq!(intersect(&stored, &incoming, |pair| pair.0), vec![(2, "old")]);
/// ```
pub fn intersect<T, K, F>(primary: &[T], secondary: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let present = to_set(secondary, &mut key);
    primary
        .iter()
        .filter(|&item| present.contains(&key(item)))
        .cloned()
        .collect()
}

/// Splits `primary` into `(diff, intersect)` against `secondary` in one scan.
///
/// Every element of `primary` lands in exactly one half, and both halves keep
/// the order of `primary`.
///
/// # Examples
///
/// ```rust
/// use keyalg::partition;
///
/// let (only_left, shared) = partition(&[1, 2, 3, 4, 5], &[4, 5, 6], |value| *value);
/// assert_eq!(only_left, vec![1, 2, 3]);
/// assert_eq!(shared, vec![4, 5]);
/// ```
pub fn partition<T, K, F>(primary: &[T], secondary: &[T], mut key: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let present = to_set(secondary, &mut key);
    primary
        .iter()
        .cloned()
        .partition(|item| !present.contains(&key(item)))
}

/// Unions two sequences by key, letting `secondary` replace shared elements.
///
/// Walks `primary` in order. An element whose key occurs in `secondary` is
/// replaced by the last element of `secondary` with that key; any other
/// element is kept as is. Every element of `secondary` whose key never matched
/// is then appended in `secondary`'s order.
///
/// When keys are unique within each input the result holds exactly one
/// element per distinct key, and its length is `|primary| + |secondary|` minus
/// the number of shared keys.
///
/// # Examples
///
/// ```rust
/// use keyalg::merge;
///
/// let stored = [(1, "tom"), (2, "jerry")];
/// let incoming = [(3, "lili"), (2, "jerry (edited)")];
/// assert_eq!(
///     merge(&stored, &incoming, |pair| pair.0),
///     vec![(1, "tom"), (2, "jerry (edited)"), (3, "lili")]
/// );
/// ```
pub fn merge<T, K, F>(primary: &[T], secondary: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let replacements = index_by(secondary, &mut key);
    let mut replaced = key_set_with_capacity(replacements.len());
    let mut result = Vec::with_capacity(primary.len() + secondary.len());

    for item in primary {
        let item_key = key(item);
        match replacements.get(&item_key) {
            Some(replacement) => {
                result.push((*replacement).clone());
                replaced.insert(item_key);
            }
            None => result.push(item.clone()),
        }
    }

    let replaced_count = replaced.len();
    result.extend(
        secondary
            .iter()
            .filter(|&item| !replaced.contains(&key(item)))
            .cloned(),
    );

    tracing::trace!(
        primary = primary.len(),
        secondary = secondary.len(),
        replaced = replaced_count,
        output = result.len(),
        "merge"
    );
    result
}

/// Reports whether any element of `items` shares `probe`'s key.
///
/// # Examples
///
/// ```rust
/// use keyalg::contains;
///
/// assert!(contains(&[1, 2, 3, 4, 5], &5, |value| *value));
/// assert!(!contains(&[1, 2, 3, 4], &5, |value| *value));
/// assert!(!contains(&[], &5, |value: &i32| *value));
/// ```
pub fn contains<T, K, F>(items: &[T], probe: &T, mut key: F) -> bool
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    to_set(items, &mut key).contains(&key(probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_calls_key_once_per_element() {
        let mut calls = 0;
        let _ = merge(&[1, 2], &[2, 3], |value| {
            calls += 1;
            *value
        });
        assert_eq!(calls, 6);
    }

    #[test]
    fn merge_prefers_last_secondary_duplicate() {
        let merged = merge(&[(1, 'a')], &[(1, 'b'), (1, 'c')], |pair| pair.0);
        assert_eq!(merged, vec![(1, 'c')]);
    }
}
