//! JSON text encoding for payloads sent with a JSON content type.

use super::collapse_whole_floats;
use crate::client::error::RequestError;
use serde_json::Value;

/// Encodes a payload as JSON text.
///
/// Text payloads are returned as-is, on the assumption that they already hold
/// JSON. Missing and falsy payloads (`null`, `false`, `0`) become `{}`.
/// Whole-number floats are written as integers (`1.0` -> `1`).
///
/// # Examples
///
/// ```
/// use request_pipeline::encoding::json::to_text;
/// use serde_json::json;
///
/// assert_eq!(to_text(Some(&json!({"a": 1}))).unwrap(), r#"{"a":1}"#);
/// assert_eq!(to_text(None).unwrap(), "{}");
/// ```
pub fn to_text(data: Option<&Value>) -> Result<String, RequestError> {
    match data {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(value) if !is_falsy(value) => {
            let mut value = value.clone();
            collapse_whole_floats(&mut value);
            Ok(serde_json::to_string(&value)?)
        }
        _ => Ok("{}".to_string()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_serialized_compactly() {
        let text = to_text(Some(&json!({"a": 1, "b": [true, null]}))).unwrap();
        assert_eq!(text, r#"{"a":1,"b":[true,null]}"#);
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(to_text(Some(&json!("{\"raw\":1}"))).unwrap(), "{\"raw\":1}");
        assert_eq!(to_text(Some(&json!(""))).unwrap(), "");
    }

    #[test]
    fn test_missing_and_falsy_become_empty_object() {
        assert_eq!(to_text(None).unwrap(), "{}");
        assert_eq!(to_text(Some(&Value::Null)).unwrap(), "{}");
        assert_eq!(to_text(Some(&json!(false))).unwrap(), "{}");
        assert_eq!(to_text(Some(&json!(0))).unwrap(), "{}");
    }

    #[test]
    fn test_truthy_scalars() {
        assert_eq!(to_text(Some(&json!(5))).unwrap(), "5");
        assert_eq!(to_text(Some(&json!(true))).unwrap(), "true");
    }

    #[test]
    fn test_whole_number_floats_drop_fraction() {
        let text = to_text(Some(&json!({"a": 1.0, "b": [2.5, -3.0]}))).unwrap();
        assert_eq!(text, r#"{"a":1,"b":[2.5,-3]}"#);
        assert_eq!(to_text(Some(&json!(0.0))).unwrap(), "{}");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(to_text(Some(&json!([]))).unwrap(), "[]");
        assert_eq!(to_text(Some(&json!([1, 2]))).unwrap(), "[1,2]");
    }
}
