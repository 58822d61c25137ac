//! ONE_OF combinator - literal enumeration

use crate::foundation::validator::Kind;
use crate::foundation::{Outcome, Validator};
use crate::value::Value;

/// Accepts a value strictly equal to one of `literals`.
///
/// The failure's expected type lists the literals as JSON, e.g.
/// `either of values ["fast","safe"]`.
///
/// ```rust,ignore
/// let mode = one_of(["fast", "safe"]);
/// assert!(mode.validate(&mut Value::from("fast")).is_ok());
/// ```
#[must_use]
pub fn one_of<I, T>(literals: I) -> Validator
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let literals: Vec<Value> = literals.into_iter().map(Into::into).collect();
    let json: Vec<serde_json::Value> = literals.iter().map(Value::to_json).collect();
    let listed = serde_json::to_string(&json).unwrap_or_default();
    Validator::new(format!("either of values {listed}"), Kind::OneOf(literals))
}

pub(crate) fn check(literals: &[Value], human: &str, value: &Value) -> Outcome {
    if literals.iter().any(|literal| literal.strict_eq(value)) {
        Outcome::passed()
    } else {
        Outcome::type_mismatch(human, value)
    }
}
