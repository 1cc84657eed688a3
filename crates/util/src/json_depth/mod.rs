//! Nesting depth of JSON values.

use serde_json::Value;

/// Returns the container nesting depth of a JSON value.
///
/// Scalars have depth 0; every array or object level adds one.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use atomic_json_patch_util::json_depth;
///
/// assert_eq!(json_depth(&json!("foo")), 0);
/// assert_eq!(json_depth(&json!([])), 1);
/// assert_eq!(json_depth(&json!({"a": [1, {"b": null}]})), 3);
/// ```
pub fn json_depth(value: &Value) -> usize {
    match value {
        Value::Array(arr) => 1 + arr.iter().map(json_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        _ => 0,
    }
}
