//! Path-addressable access into a JSON value tree.
//!
//! [`get`] and [`has`] share one walk ([`resolve`]) and differ only in how
//! they treat a `null` at the end of the path:
//!
//! - `get` treats a resolved `null` as absent and hands back the default.
//! - `has` treats it as present: the key exists, its value happens to be null.
//!
//! Neither ever fails. A missing key, an out-of-bounds or non-numeric index,
//! or an attempt to descend into a scalar all end the walk as "absent".

use crate::path::parse_path;
use serde_json::Value;

/// Walk `root` along `path`, returning the value at the end if every segment
/// resolves.
///
/// Objects are indexed by key; arrays by the segment parsed as a
/// non-negative index. Reaching a scalar (or `null`) with segments left is a
/// miss. A path with no segments resolves to `root` itself.
///
/// The returned value may be `Value::Null` when the final key is present with
/// a null value.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in parse_path(path) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                arr.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Get the value at `path`, or `default` when it is absent or null.
///
/// A null `root` or an empty `path` returns `default` without parsing.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use lodash_core::get;
///
/// let data = json!({"a": {"b": [{"c": 42}]}});
/// assert_eq!(get(&data, "a.b[0].c", &json!(null)), &json!(42));
/// assert_eq!(get(&json!({}), "x.y", &json!("fallback")), &json!("fallback"));
/// ```
pub fn get<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    if root.is_null() || path.is_empty() {
        return default;
    }
    match resolve(root, path) {
        Some(value) if !value.is_null() => value,
        _ => default,
    }
}

/// Whether every segment of `path` resolves inside `root`.
///
/// Unlike [`get`], a key that is present with a `null` value counts as
/// present. A null `root` or an empty `path` is never present.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use lodash_core::{get, has};
///
/// let data = json!({"user": {"email": null}});
/// assert!(has(&data, "user.email"));
/// assert_eq!(get(&data, "user.email", &json!("none")), &json!("none"));
/// ```
pub fn has(root: &Value, path: &str) -> bool {
    if root.is_null() || path.is_empty() {
        return false;
    }
    resolve(root, path).is_some()
}
