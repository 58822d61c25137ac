//! Structural merge of fixed-schema object validators.
//!
//! Merging happens while schemas are authored, never on data. It is how a
//! base configuration schema is extended by a plugin or an environment
//! overlay.

use crate::foundation::{Schema, SchemaError, Validator};
use crate::validators::collection::{ObjectSchema, object};
use serde::{Deserialize, Serialize};

/// Options for [`merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Strip defaults from keys that only the first schema declares.
    pub ignore_first_defaults: bool,
}

impl MergeOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_ignore_first_defaults(mut self, ignore: bool) -> Self {
        self.ignore_first_defaults = ignore;
        self
    }
}

/// Combines two `object` validators into one over the union of their keys.
///
/// Keys declared by only one side keep that side's validator. For keys
/// declared by both, nested object schemas are merged recursively; other
/// validators of the same name resolve to `b`'s, and validators of
/// different names are a [`SchemaError::Conflict`]. A shared key's merged
/// validator takes `b`'s default if it has one, else `a`'s.
///
/// # Errors
///
/// [`SchemaError::Unmergeable`] if either side is not a fixed-schema object
/// validator, [`SchemaError::Conflict`] for incompatible shared keys.
///
/// # Examples
///
/// ```rust,ignore
/// let base = object(schema! { "a" => int() });
/// let extra = object(schema! { "b" => string() });
/// let merged = merge(&base, &extra, &MergeOptions::default())?;
/// ```
pub fn merge(a: &Validator, b: &Validator, options: &MergeOptions) -> Result<Validator, SchemaError> {
    let (Some(left), Some(right)) = (mergeable(a), mergeable(b)) else {
        return Err(SchemaError::Unmergeable {
            left: a.human().to_owned(),
            right: b.human().to_owned(),
        });
    };

    let mut merged = Schema::with_capacity(left.fields().len() + right.fields().len());
    for (key, first) in left.fields() {
        let validator = match right.fields().get(key) {
            Some(second) => merge_shared(key, first, second, options)?,
            None if options.ignore_first_defaults => first.undefault(),
            None => first.clone(),
        };
        tracing::trace!(key = %key, validator = %validator.human(), "merged schema key");
        merged.insert(key.clone(), validator);
    }
    for (key, second) in right.fields() {
        if !merged.contains_key(key) {
            tracing::trace!(key = %key, validator = %second.human(), "merged schema key");
            merged.insert(key.clone(), second.clone());
        }
    }

    Ok(object(merged))
}

fn mergeable(validator: &Validator) -> Option<&ObjectSchema> {
    if validator.human() == "object" {
        validator.object_schema()
    } else {
        None
    }
}

fn merge_shared(
    key: &str,
    first: &Validator,
    second: &Validator,
    options: &MergeOptions,
) -> Result<Validator, SchemaError> {
    let merged = match merge(first, second, options) {
        Ok(merged) => merged,
        Err(SchemaError::Unmergeable { .. }) if first.human() == second.human() => second.clone(),
        Err(SchemaError::Unmergeable { .. }) => {
            return Err(SchemaError::Conflict {
                key: key.to_owned(),
                left: first.human().to_owned(),
                right: second.human().to_owned(),
            });
        }
        Err(conflict) => return Err(conflict),
    };

    Ok(match (second.default_value(), first.default_value()) {
        (Some(default), _) | (None, Some(default)) => merged.default(default.clone()),
        (None, None) => merged,
    })
}
