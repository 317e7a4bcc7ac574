//! Inline conditional filter: `{{ "Active" | if: is_active, "Inactive" }}`.

use serde_json::Value;

/// `true_value` if `condition` is truthy, otherwise `false_value` (default `""`).
pub fn iff(true_value: Value, condition: &Value, false_value: Option<Value>) -> Value {
    if is_truthy(condition) {
        true_value
    } else {
        false_value.unwrap_or_else(|| Value::String(String::new()))
    }
}

/// Template truthiness: null, `false`, zero and `""` are falsy.
///
/// Arrays and objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iff_truthy() {
        assert_eq!(iff(json!("yes"), &json!(true), Some(json!("no"))), json!("yes"));
        assert_eq!(iff(json!("yes"), &json!(1), Some(json!("no"))), json!("yes"));
        assert_eq!(iff(json!("yes"), &json!("text"), None), json!("yes"));
        assert_eq!(iff(json!("yes"), &json!([]), None), json!("yes"));
        assert_eq!(iff(json!("yes"), &json!({}), None), json!("yes"));
    }

    #[test]
    fn test_iff_falsy() {
        assert_eq!(iff(json!("yes"), &json!(false), Some(json!("no"))), json!("no"));
        assert_eq!(iff(json!("yes"), &json!(0), Some(json!("no"))), json!("no"));
        assert_eq!(iff(json!("yes"), &json!(""), Some(json!("no"))), json!("no"));
        assert_eq!(iff(json!("yes"), &Value::Null, Some(json!("no"))), json!("no"));
    }

    #[test]
    fn test_iff_default_false_value() {
        assert_eq!(iff(json!("yes"), &json!(false), None), json!(""));
    }

    #[test]
    fn test_iff_passes_values_through() {
        assert_eq!(iff(json!(42), &json!(true), None), json!(42));
        assert_eq!(iff(json!({"a": 1}), &json!(true), None), json!({"a": 1}));
        assert_eq!(iff(json!("yes"), &json!(false), Some(json!([1, 2]))), json!([1, 2]));
    }
}
