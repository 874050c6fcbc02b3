use serde_json::{Map, Value};

/// Removes empty values from a JSON object, in place.
///
/// A key is dropped when its value is the empty string, an empty array, or an
/// object that is empty after being cleaned itself. `null`, `false`, and `0`
/// are meaningful configuration values and stay. Arrays are carried through
/// without descending into their elements.
///
/// Non-object values are left untouched.
pub fn clean_value(value: &mut Value) {
    if let Value::Object(map) = value {
        clean_object(map);
    }
}

/// Object-level worker behind [`clean_value`]. Exposed for callers that
/// already hold a map.
pub fn clean_object(map: &mut Map<String, Value>) {
    map.retain(|_, value| match value {
        Value::Object(nested) => {
            clean_object(nested);
            !nested.is_empty()
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn removes_empty_string_array_and_object() {
        let mut value = json!({
            "a": "",
            "b": [],
            "c": {},
            "keep": "value"
        });

        clean_value(&mut value);

        assert_eq!(value, json!({ "keep": "value" }));
    }

    #[test]
    fn preserves_null_false_and_zero() {
        let mut value = json!({
            "null": null,
            "false": false,
            "zero": 0
        });

        clean_value(&mut value);

        assert_eq!(value, json!({ "null": null, "false": false, "zero": 0 }));
    }

    #[test]
    fn removes_empties_at_every_depth() {
        let mut value = json!({
            "outer": {
                "inner": {
                    "empty": "",
                    "list": []
                },
                "kept": 1
            }
        });

        clean_value(&mut value);

        assert_eq!(value, json!({ "outer": { "kept": 1 } }));
    }

    #[test]
    fn removes_object_that_becomes_empty_after_cleaning() {
        let mut value = json!({
            "outer": {
                "inner": { "empty": "" }
            }
        });

        clean_value(&mut value);

        assert_eq!(value, json!({}));
    }

    #[test]
    fn does_not_descend_into_arrays() {
        let mut value = json!({
            "plugins": ["name", { "empty": "" }]
        });

        clean_value(&mut value);

        // Array elements belong to the engine; only top-level emptiness counts.
        assert_eq!(value, json!({ "plugins": ["name", { "empty": "" }] }));
    }

    #[test]
    fn idempotent() {
        let mut once = json!({
            "a": "",
            "b": { "c": [], "d": null },
            "e": [1, 2],
            "f": false
        });
        clean_value(&mut once);

        let mut twice = once.clone();
        clean_value(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn non_object_values_are_untouched() {
        let mut value = json!("just a string");

        clean_value(&mut value);

        assert_eq!(value, json!("just a string"));
    }
}
