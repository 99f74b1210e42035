// Turns a backend reply body into the text shown under the form
use serde_json::Value;

/// Precedence: plain string, then a truthy `message` field, then the whole
/// reply as compact JSON. Bodies that are not JSON count as plain strings.
pub fn response_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => from_value(value),
        Err(_) => body.to_string(),
    }
}

pub fn from_value(value: Value) -> String {
    if let Value::String(s) = value {
        return s;
    }
    if let Some(message) = value.get("message").filter(|m| is_truthy(m)) {
        return match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    }
    value.to_string()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
