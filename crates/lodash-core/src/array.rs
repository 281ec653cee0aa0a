//! Sequence helpers: chunking, filtering, set-style subtraction and slicing.
//!
//! Helpers that only compare elements take `T: PartialEq` so they also work
//! on `serde_json::Value`, which is not hashable. The `_by` variants hash the
//! extracted keys instead.

use crate::error::{LodashError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// The element count `drop`, `drop_right`, `take` and `take_right` use when
/// a caller has no specific count in mind.
pub const DEFAULT_COUNT: usize = 1;

/// Split `items` into consecutive chunks of `size` elements.
///
/// The last chunk holds whatever remains and may be shorter. An empty input
/// yields no chunks.
///
/// # Errors
///
/// Returns [`LodashError::InvalidChunkSize`] when `size` is zero.
///
/// # Examples
///
/// ```
/// use lodash_core::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4], 3).unwrap(), vec![vec![1, 2, 3], vec![4]]);
/// assert!(chunk(&[1], 0).is_err());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        tracing::debug!(size, "rejected chunk size");
        return Err(LodashError::InvalidChunkSize(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Remove falsy values: `null`, `false`, numeric zero and the empty string.
///
/// Everything else, including empty arrays and objects, is kept.
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|v| is_truthy(v)).cloned().collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Concatenate values, splatting any argument that is itself an array.
///
/// Splatting goes one level deep: an array nested inside an argument array
/// stays an element.
///
/// ```
/// use serde_json::json;
/// use lodash_core::concat;
///
/// let out = concat(&[json!([1]), json!(2), json!([3, [4]])]);
/// assert_eq!(out, vec![json!(1), json!(2), json!(3), json!([4])]);
/// ```
pub fn concat(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) => out.extend(inner.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}

/// Elements of `base` not present in any of the `excludes` lists.
///
/// Base order and duplicate counts are preserved for surviving elements.
pub fn difference<T, E>(base: &[T], excludes: &[E]) -> Vec<T>
where
    T: PartialEq + Clone,
    E: AsRef<[T]>,
{
    base.iter()
        .filter(|item| !excludes.iter().any(|list| list.as_ref().contains(*item)))
        .cloned()
        .collect()
}

/// Like [`difference`], comparing by a key extracted with `key_fn`.
///
/// ```
/// use lodash_core::difference_by;
///
/// let base = [2.1_f64, 1.2, 3.3];
/// let kept = difference_by(&base, &[vec![4.4, 2.5]], |x| x.floor() as i64);
/// assert_eq!(kept, vec![1.2, 3.3]);
/// ```
pub fn difference_by<T, E, K, F>(base: &[T], excludes: &[E], key_fn: F) -> Vec<T>
where
    T: Clone,
    E: AsRef<[T]>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let excluded: HashSet<K> = excludes
        .iter()
        .flat_map(|list| list.as_ref().iter().map(&key_fn))
        .collect();
    base.iter()
        .filter(|item| !excluded.contains(&key_fn(*item)))
        .cloned()
        .collect()
}

/// Remove duplicates, keeping the first occurrence of each element.
pub fn uniq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Remove elements whose extracted key was already seen; first one wins.
pub fn uniq_by<T, K, F>(items: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key_fn(*item)))
        .cloned()
        .collect()
}

/// All but the first `n` elements. `n` past the end yields an empty vector.
pub fn drop<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[n.min(items.len())..].to_vec()
}

/// All but the last `n` elements.
pub fn drop_right<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..items.len().saturating_sub(n)].to_vec()
}

/// The first `n` elements, or all of them when `n` exceeds the length.
pub fn take<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..n.min(items.len())].to_vec()
}

/// The last `n` elements.
pub fn take_right<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}
