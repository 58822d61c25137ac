//! Array element checks.

use crate::combinators::compose;
use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{ItemOutcome, Outcome, Validator};
use crate::validators::primitive::is_type;
use crate::value::{TypeTag, Value};

/// Accepts arrays whose every element passes `element`.
///
/// Produces one item outcome per index, in order. Arrays have no named
/// slots, so no defaults are ever injected here.
///
/// ```rust,ignore
/// let ports = array(int());
/// assert!(ports.validate(&mut Value::from(json!([80, 443]))).is_ok());
/// ```
#[must_use]
pub fn array(element: Validator) -> Validator {
    compose(
        is_type(TypeTag::Array),
        Validator::new(TypeTag::Array.name(), Kind::ArrayOf(element)),
    )
}

pub(crate) fn check(element: &Validator, value: &mut Value, walk: Walk<'_>) -> Outcome {
    if walk.exceeds_limit() {
        return super::depth_exceeded(value, walk);
    }
    let items = match value {
        Value::Array(items) => items,
        other => return Outcome::type_mismatch(TypeTag::Array.name(), other),
    };

    let inner = walk.descend();
    let results = items
        .iter_mut()
        .enumerate()
        .map(|(index, item)| ItemOutcome::new(index, element.run(item, inner)))
        .collect();
    Outcome::collection(results)
}
