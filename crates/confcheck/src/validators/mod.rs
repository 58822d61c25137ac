//! Built-in validators
//!
//! - **Primitive**: [`string`], [`bool`], [`int`], [`number`], [`function`],
//!   [`regexp`], [`noop`], and [`is_type`] for any [`TypeTag`](crate::value::TypeTag)
//! - **Collection**: [`array`], [`object`], [`object_with`], [`objects`]
//! - **Matchers**: [`anymatch`]

pub mod collection;
pub mod primitive;

pub use collection::{ObjectSchema, ObjectsProps, array, object, object_with, objects};
pub use primitive::{bool, function, int, is_type, noop, number, regexp, string};

use crate::combinators::either;
use crate::foundation::Validator;

/// A single path matcher: a string, a regular expression or a function.
#[must_use]
pub fn anymatch_single() -> Validator {
    either(vec![string(), regexp(), function()])
}

/// One path matcher or an array of them.
///
/// ```rust,ignore
/// let ignore = anymatch();
/// assert!(ignore.validate(&mut Value::from(json!(["*.log", "tmp/"]))).is_ok());
/// ```
#[must_use]
pub fn anymatch() -> Validator {
    either(vec![anymatch_single(), array(anymatch_single())])
}
