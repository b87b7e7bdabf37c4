//! Structural checks on decoded JSON values.
//!
//! Useful inside response transforms before reaching into a body:
//!
//! ```rust
//! use rest_crud::{has_own_key, is_plain_object};
//! use serde_json::json;
//!
//! let body = json!({"data": [1, 2], "7": true});
//! assert!(is_plain_object(&body));
//! assert!(has_own_key(&body, "data"));
//! assert!(has_own_key(&body, 7));
//! assert!(!has_own_key(&json!([1, 2]), 0));
//! ```

use std::fmt::Display;

use serde_json::Value;

/// Returns `true` iff `value` is a JSON object (not an array, `null` or scalar).
#[must_use]
pub const fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` iff `value` is a JSON object with a key equal to `key`'s string form.
#[must_use]
pub fn has_own_key(value: &Value, key: impl Display) -> bool {
    match value {
        Value::Object(map) => map.contains_key(&key.to_string()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_plain_object_accepts_objects_only() {
        assert!(is_plain_object(&json!({})));
        assert!(is_plain_object(&json!({"a": 1})));

        assert!(!is_plain_object(&json!([])));
        assert!(!is_plain_object(&json!(null)));
        assert!(!is_plain_object(&json!("object")));
        assert!(!is_plain_object(&json!(1)));
        assert!(!is_plain_object(&json!(false)));
    }

    #[test]
    fn test_has_own_key_on_objects() {
        let value = json!({"name": "Tom", "1": "one", "nested": {"inner": 1}});
        assert!(has_own_key(&value, "name"));
        assert!(has_own_key(&value, 1));
        assert!(!has_own_key(&value, "inner"));
        assert!(!has_own_key(&value, "missing"));
    }

    #[test]
    fn test_has_own_key_false_for_non_objects() {
        assert!(!has_own_key(&json!(["name"]), "name"));
        assert!(!has_own_key(&json!(["a", "b"]), 0));
        assert!(!has_own_key(&json!(null), "name"));
        assert!(!has_own_key(&json!("name"), "name"));
    }

    #[test]
    fn test_has_own_key_with_null_value() {
        assert!(has_own_key(&json!({"gone": null}), "gone"));
    }
}
