//! Primitive type checks.

use crate::foundation::validator::Kind;
use crate::foundation::{Outcome, Validator};
use crate::value::{TypeTag, Value};

/// Builds a validator accepting exactly the values classified as `tag`.
///
/// On failure the expected type is the tag name; the actual type and value
/// come from the input.
#[must_use]
pub fn is_type(tag: TypeTag) -> Validator {
    Validator::new(tag.name(), Kind::Primitive(tag))
}

#[must_use]
pub fn string() -> Validator {
    is_type(TypeTag::String)
}

#[must_use]
pub fn bool() -> Validator {
    is_type(TypeTag::Boolean)
}

#[must_use]
pub fn number() -> Validator {
    is_type(TypeTag::Number)
}

/// A number check that reports itself as `int`.
#[must_use]
pub fn int() -> Validator {
    Validator::new("int", Kind::Primitive(TypeTag::Number))
}

#[must_use]
pub fn function() -> Validator {
    is_type(TypeTag::Function)
}

#[must_use]
pub fn regexp() -> Validator {
    is_type(TypeTag::Regexp)
}

/// Accepts any value.
///
/// Named `any`, which is how it appears inside the name of an enclosing
/// [`either`](crate::combinators::either).
#[must_use]
pub fn noop() -> Validator {
    Validator::new("any", Kind::Noop)
}

pub(crate) fn check(tag: TypeTag, human: &str, value: &Value) -> Outcome {
    if value.type_tag() == tag {
        Outcome::passed()
    } else {
        Outcome::type_mismatch(human, value)
    }
}
