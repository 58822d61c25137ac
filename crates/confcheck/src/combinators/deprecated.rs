//! DEPRECATED combinator - advisory notice on top of another validator

use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{Outcome, Validator};
use crate::value::Value;

/// Delegates to `inner` and always appends a deprecation warning.
///
/// The verdict of `inner` is kept as is; the notice is `deprecated` or
/// `deprecated: <message>`, joined to any existing warning with `"; "`.
/// The result carries `inner`'s name but neither its default nor its
/// schema metadata.
#[must_use]
pub fn deprecated(inner: Validator, message: Option<&str>) -> Validator {
    let notice = match message {
        Some(message) if !message.is_empty() => format!("deprecated: {message}"),
        _ => "deprecated".to_owned(),
    };
    let human = inner.human().to_owned();
    Validator::new(human, Kind::Deprecated { inner, notice })
}

pub(crate) fn check(inner: &Validator, notice: &str, value: &mut Value, walk: Walk<'_>) -> Outcome {
    let mut outcome = inner.run(value, walk);
    outcome.append_warning(notice);
    outcome
}
