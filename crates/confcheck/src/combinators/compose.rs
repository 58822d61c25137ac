//! COMPOSE combinator - sequential conjunction of validators

use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{Outcome, Validator};
use crate::value::Value;

/// Runs `first`, then `second` only if `first` passed.
///
/// A failing `first` outcome is returned unchanged and `second` never runs.
/// The composed validator is named after `first` and exposes the schema
/// metadata of `second`, which is how collection checks sit on top of a
/// base type check.
///
/// ```rust,ignore
/// let even_int = compose(int(), Validator::from_fn("even", is_even));
/// ```
#[must_use]
pub fn compose(first: Validator, second: Validator) -> Validator {
    let human = first.human().to_owned();
    Validator::new(human, Kind::Compose { first, second })
}

pub(crate) fn check(
    first: &Validator,
    second: &Validator,
    value: &mut Value,
    walk: Walk<'_>,
) -> Outcome {
    let outcome = first.run(value, walk);
    if !outcome.is_ok() {
        return outcome;
    }
    second.run(value, walk)
}
