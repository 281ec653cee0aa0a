//! Iteration helpers: repeat a closure, or produce arithmetic progressions.

use crate::error::{LodashError, Result};

/// Call `iteratee` with `0..n` and collect the results.
///
/// ```
/// use lodash_core::times;
///
/// assert_eq!(times(3, |i| i * 2), vec![0, 2, 4]);
/// ```
pub fn times<T, F>(n: usize, iteratee: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..n).map(iteratee).collect()
}

/// Call `iteratee` with `0..n` for its side effects.
pub fn times_each<F>(n: usize, iteratee: F)
where
    F: FnMut(usize),
{
    (0..n).for_each(iteratee);
}

/// Integers from `start` up to, but not including, `end`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Integers from `start` towards `end` (exclusive), `step` apart.
///
/// A positive step counts up while below `end`; a negative step counts down
/// while above `end`. A step pointing away from `end` yields nothing.
///
/// # Errors
///
/// Returns [`LodashError::ZeroStep`] when `step` is zero.
///
/// ```
/// use lodash_core::range_step;
///
/// assert_eq!(range_step(0, 6, 2).unwrap(), vec![0, 2, 4]);
/// assert_eq!(range_step(5, 0, -2).unwrap(), vec![5, 3, 1]);
/// assert!(range_step(0, 5, 0).is_err());
/// ```
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        tracing::debug!(start, end, "rejected zero step");
        return Err(LodashError::ZeroStep);
    }

    let mut out = Vec::new();
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        out.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(out)
}
