//! String joining.

/// Stringifies every element with `function` and joins the results with
/// `separator`.
///
/// There is no leading or trailing separator, and an empty slice yields an
/// empty string.
///
/// # Examples
///
/// ```rust
/// use keyalg::join;
///
/// assert_eq!(join(&[1, 2, 3, 4, 5], ",", |value| value.to_string()), "1,2,3,4,5");
/// assert_eq!(join(&[] as &[i32], ",", |value| value.to_string()), "");
/// assert_eq!(join(&[("a", 1), ("b", 2)], "&", |pair| format!("{}={}", pair.0, pair.1)), "a=1&b=2");
/// ```
pub fn join<T, S, F>(items: &[T], separator: &str, mut function: F) -> String
where
    S: AsRef<str>,
    F: FnMut(&T) -> S,
{
    let mut joined = String::new();
    for (position, item) in items.iter().enumerate() {
        if position > 0 {
            joined.push_str(separator);
        }
        joined.push_str(function(item).as_ref());
    }
    joined
}
