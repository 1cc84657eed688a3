use serde_json::{Map, Number, Value};

/// Performs a structural equality check between two JSON values.
///
/// - Values of different JSON types are never equal (`"1"` is not `1`).
/// - Arrays are compared element by element, so order matters.
/// - Objects are compared as sets of members: both sides are canonicalized
///   by sorting their keys before the members are compared pairwise, so the
///   insertion order of either side is irrelevant.
/// - Numbers are compared by value, see [`number_equal`].
///
/// The comparison never goes through a serialized form.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use atomic_json_patch_util::json_equal;
///
/// let a = json!({"foo": 1, "bar": [1, 2]});
/// let b = json!({"bar": [1, 2], "foo": 1});
/// let c = json!({"bar": [2, 1], "foo": 1});
///
/// assert!(json_equal(&a, &b));
/// assert!(!json_equal(&a, &c));
/// ```
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(a, b)| json_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            sorted_members(obj_a)
                .into_iter()
                .zip(sorted_members(obj_b))
                .all(|((key_a, val_a), (key_b, val_b))| key_a == key_b && json_equal(val_a, val_b))
        }

        // Different types are never equal
        _ => false,
    }
}

/// Compares two JSON numbers by value.
///
/// Integers are compared exactly; as soon as one side is a float both sides
/// are compared as `f64`, so `1` equals `1.0`.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn sorted_members(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut members: Vec<_> = map.iter().collect();
    // keys are unique, stability is irrelevant
    members.sort_unstable_by(|a, b| a.0.cmp(b.0));
    members
}
