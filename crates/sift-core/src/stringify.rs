//! Rendering of received values for default messages

use serde_json::{Number, Value};

/// Render a value for the `received` part of an issue
///
/// Strings are quoted, scalars are printed as-is, and collections are named
/// by their type rather than dumped, so the text stays short for large inputs.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(Value::Number(n)) => render_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(_)) => "Array".to_string(),
        Some(Value::Object(_)) => "Object".to_string(),
    }
}

/// Integral floats print without a fractional part, so `5.0` reads `5`
fn render_number(number: &Number) -> String {
    match number.as_f64() {
        Some(f) if number.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f),
        _ => number.to_string(),
    }
}
