//! Element-wise transforms: [`map`], [`reduce`] and [`filter`].
//!
//! These are thin wrappers over the iteration contract shared by the rest of
//! the crate: borrow the input, walk it once from left to right, return a new
//! value.

/// Applies `function` to every element, preserving length and order.
///
/// # Examples
///
/// ```rust
/// use keyalg::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 2), vec![2, 4, 6]);
/// assert_eq!(map(&["a", "b"], |value| format!("{value}1")), vec!["a1", "b1"]);
/// ```
pub fn map<T, R, F>(items: &[T], function: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    items.iter().map(function).collect()
}

/// Folds `items` from left to right, starting from `init`.
///
/// The combinator sees the accumulator first and the element second, and is
/// applied exactly once per element in order. An empty slice returns `init`
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use keyalg::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |accumulator, value| accumulator + value, 0), 15);
/// assert_eq!(
///     reduce(&["a", "b", "c"], |accumulator, value| accumulator + *value, String::new()),
///     "abc"
/// );
/// ```
pub fn reduce<T, A, F>(items: &[T], function: F, init: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(init, function)
}

/// Returns the elements satisfying `predicate`, in input order.
///
/// # Examples
///
/// ```rust
/// use keyalg::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |value| *value > 2), vec![3, 4, 5]);
/// ```
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| predicate(item)).cloned().collect()
}
