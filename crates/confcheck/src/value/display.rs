//! Display rendering for [`Value`].
//!
//! The format matches what diagnostics embed after `got: <type>`: strings
//! are printed raw, arrays are comma-joined without brackets and objects
//! collapse to `[object Object]`.

use super::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    // null and undefined elements render empty
                    if !matches!(item, Value::Null | Value::Undefined) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Regex(re) => write!(f, "/{}/", re.as_str()),
            Value::Function(_) => f.write_str("[function]"),
        }
    }
}

// Integral floats print without a fraction, `-0` prints as `0`.
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    match n.as_f64() {
        Some(x) if n.is_f64() && x == 0.0 => f.write_str("0"),
        Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => write!(f, "{x}"),
        _ => write!(f, "{n}"),
    }
}
