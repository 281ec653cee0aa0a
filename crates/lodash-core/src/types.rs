//! Emptiness and null checks over JSON values.

use serde_json::Value;

/// `null`, `""`, `[]` and `{}` are empty; every other value, including
/// `false` and `0`, is not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: &Value) -> bool {
    !is_empty(value)
}

/// Whether `value` is JSON `null`.
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Whether `value` is anything but JSON `null`.
pub fn is_not_null(value: &Value) -> bool {
    !value.is_null()
}
