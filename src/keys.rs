//! Key and value listing for associative containers.
//!
//! Both functions accept anything whose borrowed iteration yields `(&K, &V)`
//! pairs: `HashMap`, `BTreeMap`, a [`crate::KeyIndex`] and so on. The output
//! follows the container's own iteration order, which is unspecified for hash
//! maps. Compare results as sets unless the container is ordered.

/// Returns the keys of `map`.
///
/// # Examples
///
/// ```rust
/// use std::collections::{BTreeMap, HashSet};
/// use keyalg::keys;
///
/// let ordered = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(keys(&ordered), vec!["a", "b"]);
///
/// let index = keyalg::to_map(&[10, 20, 30], |value| value / 10);
/// let found: HashSet<i32> = keys(&index).into_iter().collect();
/// assert_eq!(found, HashSet::from([1, 2, 3]));
/// ```
pub fn keys<'a, K, V, M>(map: M) -> Vec<K>
where
    K: Clone + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter().map(|(key, _)| key.clone()).collect()
}

/// Returns the values of `map`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use keyalg::values;
///
/// let ordered = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(values(&ordered), vec![1, 2]);
/// ```
pub fn values<'a, K, V, M>(map: M) -> Vec<V>
where
    K: 'a,
    V: Clone + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter().map(|(_, value)| value.clone()).collect()
}
