//! Fixed-schema object checks with default injection.

use crate::combinators::compose;
use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{ItemOutcome, Outcome, Schema, Validator};
use crate::suggest::{best_suggestions, perhaps_you_meant};
use crate::validators::primitive::is_type;
use crate::value::{TypeTag, Value};

/// Metadata of a fixed-schema object validator.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    fields: Schema,
    suggest: bool,
}

impl ObjectSchema {
    /// Declared keys and their validators, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &Schema {
        &self.fields
    }

    /// Whether unknown keys get "did you mean" warnings.
    #[must_use]
    pub fn suggest(&self) -> bool {
        self.suggest
    }

    fn unknown_key(&self, key: &str) -> Outcome {
        let mut outcome = Outcome::passed();
        if self.suggest {
            let suggestions = best_suggestions(key, self.fields.keys().map(String::as_str));
            if let Some(warning) = perhaps_you_meant(&suggestions) {
                outcome.append_warning(&warning);
            }
        }
        outcome
    }
}

/// Object validator over `schema`, with suggestions for unknown keys.
///
/// See [`object_with`].
#[must_use]
pub fn object(schema: Schema) -> Validator {
    object_with(schema, true)
}

/// Object validator over `schema`.
///
/// Keys present in the input are checked against their declared validator;
/// unknown keys pass, optionally with a suggestion warning. Afterwards every
/// declared key that is missing from the input and whose validator carries a
/// default receives a deep copy of that default, written into the input
/// object itself.
#[must_use]
pub fn object_with(schema: Schema, suggest: bool) -> Validator {
    compose(
        is_type(TypeTag::Object),
        Validator::new(
            TypeTag::Object.name(),
            Kind::FixedObject(ObjectSchema {
                fields: schema,
                suggest,
            }),
        ),
    )
}

pub(crate) fn check(schema: &ObjectSchema, value: &mut Value, walk: Walk<'_>) -> Outcome {
    if walk.exceeds_limit() {
        return super::depth_exceeded(value, walk);
    }
    let map = match value {
        Value::Object(map) => map,
        other => return Outcome::type_mismatch(TypeTag::Object.name(), other),
    };

    let inner = walk.descend();
    let mut items = Vec::with_capacity(map.len());
    for (key, item) in map.iter_mut() {
        let outcome = match schema.fields.get(key) {
            Some(validator) => validator.run(item, inner),
            None => schema.unknown_key(key),
        };
        items.push(ItemOutcome::new(key.as_str(), outcome));
    }

    for (key, validator) in &schema.fields {
        if map.contains_key(key) {
            continue;
        }
        let Some(default) = validator.default_value() else {
            continue;
        };
        tracing::debug!(key = %key, validator = %validator.human(), "injecting default");
        let slot = map.entry(key.clone()).or_insert(default.deep_clone());
        // Only fills defaults nested inside the injected value; not reported.
        let _ = validator.run(slot, inner);
    }

    Outcome::collection(items)
}
