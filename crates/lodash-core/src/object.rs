//! Mapping helpers over JSON objects.
//!
//! Every function builds a fresh [`Map`]; the input is never modified.
//! Insertion order is preserved (serde_json is built with `preserve_order`).

use serde_json::{Map, Value};

/// Keep only the entries whose key is listed in `keys`. Unknown keys are
/// ignored.
///
/// ```
/// use serde_json::json;
/// use lodash_core::pick;
///
/// let data = json!({"a": 1, "b": 2, "c": 3});
/// let picked = pick(data.as_object().unwrap(), &["a", "c", "missing"]);
/// assert_eq!(serde_json::Value::Object(picked), json!({"a": 1, "c": 3}));
/// ```
pub fn pick(map: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    pick_by(map, |key, _| keys.contains(&key))
}

/// Keep only the entries for which `predicate(key, value)` holds.
pub fn pick_by<F>(map: &Map<String, Value>, mut predicate: F) -> Map<String, Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    map.iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Drop the entries whose key is listed in `keys`.
pub fn omit(map: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    pick_by(map, |key, _| !keys.contains(&key))
}

/// Drop the entries for which `predicate(key, value)` holds.
pub fn omit_by<F>(map: &Map<String, Value>, mut predicate: F) -> Map<String, Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    pick_by(map, |key, value| !predicate(key, value))
}

/// Keys of an object in insertion order; empty for any other value.
pub fn keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Values of an object in insertion order; empty for any other value.
pub fn values(value: &Value) -> Vec<Value> {
    match value {
        Value::Object(map) => map.values().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Key-value pairs of an object in insertion order; empty for any other
/// value.
pub fn entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Replace every value with `transform(key, value)`.
pub fn map_values<F>(map: &Map<String, Value>, mut transform: F) -> Map<String, Value>
where
    F: FnMut(&str, &Value) -> Value,
{
    map.iter()
        .map(|(key, value)| (key.clone(), transform(key, value)))
        .collect()
}

/// Replace every key with `transform(key, value)`.
///
/// When two keys map to the same new key, the later entry's value wins.
pub fn map_keys<F>(map: &Map<String, Value>, mut transform: F) -> Map<String, Value>
where
    F: FnMut(&str, &Value) -> String,
{
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        out.insert(transform(key, value), value.clone());
    }
    out
}

/// Swap keys and values. Values become keys via [`value_key`]; when several
/// keys share a value the last one wins.
///
/// ```
/// use serde_json::json;
/// use lodash_core::invert;
///
/// let data = json!({"a": 1, "b": "x", "c": 1});
/// let inverted = invert(data.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(inverted), json!({"1": "c", "x": "b"}));
/// ```
pub fn invert(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        out.insert(value_key(value), Value::String(key.clone()));
    }
    out
}

/// Group keys by their value: each distinct value (as a key, via
/// [`value_key`]) maps to the array of every key holding it, in insertion
/// order.
///
/// ```
/// use serde_json::json;
/// use lodash_core::invert_by;
///
/// let data = json!({"x": "status", "y": "status", "z": "type"});
/// let grouped = invert_by(data.as_object().unwrap());
/// assert_eq!(
///     serde_json::Value::Object(grouped),
///     json!({"status": ["x", "y"], "type": ["z"]})
/// );
/// ```
pub fn invert_by(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in map {
        let group = out
            .entry(value_key(value))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(members) = group {
            members.push(Value::String(key.clone()));
        }
    }
    out
}

/// Render a value as an object key: strings verbatim, anything else as its
/// compact JSON text (`1`, `true`, `null`, `[1,2]`).
pub fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
