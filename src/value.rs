//! Classification of dynamically-typed values.
//!
//! Map validators and array validators must reject each other's inputs, so
//! "object" here means a key-value map only: arrays, null and scalars are not
//! objects.

use serde_json::Value;

/// Returns true if `value` is a plain key-value map.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns true if `value` is an array.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Name of the JSON type of `value`, as used in expectation messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
