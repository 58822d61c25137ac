//! Validators over compound values.
//!
//! - [`array`] checks every element of an array.
//! - [`object`] / [`object_with`] check declared keys and inject defaults.
//! - [`objects`] checks maps whose keys are not declared one by one.

pub mod array;
pub mod object;
pub mod objects;

pub use array::array;
pub use object::{ObjectSchema, object, object_with};
pub use objects::{ObjectsProps, objects};

use crate::foundation::Outcome;
use crate::foundation::limits::Walk;
use crate::value::Value;

/// Failure for a compound value nested past the configured depth.
pub(crate) fn depth_exceeded(value: &Value, walk: Walk<'_>) -> Outcome {
    tracing::warn!(
        depth = walk.depth(),
        max_depth = walk.max_depth(),
        "validation depth limit reached"
    );
    Outcome::type_mismatch(
        format!("nesting depth of at most {}", walk.max_depth()),
        value,
    )
}
