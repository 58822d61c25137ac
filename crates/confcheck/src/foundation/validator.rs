//! The validator record.
//!
//! A [`Validator`] is an immutable value: a display name, an optional
//! default and a shared, tagged description of what it checks. Builders such
//! as [`Validator::default`] return a new record and never touch the
//! receiver, so one validator can be reused across any number of calls and
//! embedded in any number of schemas.

use crate::foundation::limits::{ValidationLimits, Walk};
use crate::foundation::outcome::Outcome;
use crate::validators::collection::{ObjectSchema, ObjectsProps};
use crate::value::{TypeTag, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type CheckFn = dyn Fn(&mut Value, &ValidationLimits) -> Outcome + Send + Sync;

// ============================================================================
// KIND
// ============================================================================

/// What a validator checks. Dispatch happens on this discriminant.
pub(crate) enum Kind {
    /// Accepts everything.
    Noop,
    /// Accepts values classified as the given tag.
    Primitive(TypeTag),
    /// Runs `first`, then `second` only if `first` passed.
    Compose { first: Validator, second: Validator },
    /// Checks every element of an array.
    ArrayOf(Validator),
    /// Checks an object against declared keys.
    FixedObject(ObjectSchema),
    /// Checks an object whose keys are not individually declared.
    DynamicObject {
        props: ObjectsProps,
        element: Validator,
    },
    /// Accepts the value if any alternative does.
    Either(Vec<Validator>),
    /// Accepts one of a fixed set of literals.
    OneOf(Vec<Value>),
    /// Delegates to `inner` and always attaches a deprecation notice.
    Deprecated { inner: Validator, notice: String },
    /// User-supplied check.
    Custom(Arc<CheckFn>),
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("Noop"),
            Self::Primitive(tag) => f.debug_tuple("Primitive").field(tag).finish(),
            Self::Compose { first, second } => f
                .debug_struct("Compose")
                .field("first", first)
                .field("second", second)
                .finish(),
            Self::ArrayOf(element) => f.debug_tuple("ArrayOf").field(element).finish(),
            Self::FixedObject(schema) => f.debug_tuple("FixedObject").field(schema).finish(),
            Self::DynamicObject { props, element } => f
                .debug_struct("DynamicObject")
                .field("props", props)
                .field("element", element)
                .finish(),
            Self::Either(alternatives) => f.debug_tuple("Either").field(alternatives).finish(),
            Self::OneOf(literals) => f.debug_tuple("OneOf").field(literals).finish(),
            Self::Deprecated { inner, notice } => f
                .debug_struct("Deprecated")
                .field("inner", inner)
                .field("notice", notice)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(<function>)"),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A reusable check for a configuration value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_confcheck::prelude::*;
/// use serde_json::json;
///
/// let port = int().default(8080);
/// let server = object(schema! { "host" => string(), "port" => port });
///
/// let mut config = Value::from(json!({"host": "localhost"}));
/// assert!(server.validate(&mut config).is_ok());
/// assert_eq!(config.get("port"), Some(&Value::from(8080)));
/// ```
#[derive(Clone)]
pub struct Validator {
    human: Cow<'static, str>,
    default: Option<Value>,
    kind: Arc<Kind>,
}

impl Validator {
    pub(crate) fn new(human: impl Into<Cow<'static, str>>, kind: Kind) -> Self {
        Self {
            human: human.into(),
            default: None,
            kind: Arc::new(kind),
        }
    }

    /// Builds a validator from a check function.
    ///
    /// The function receives the value mutably so it can take part in
    /// default injection like the built-in collection checkers do.
    ///
    /// The function does not see the caller's [`ValidationLimits`]. A check
    /// that runs other validators on nested data should use
    /// [`Validator::from_fn_with_limits`] so the depth cap carries over.
    pub fn from_fn<F>(human: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&mut Value) -> Outcome + Send + Sync + 'static,
    {
        Self::from_fn_with_limits(human, move |value, _| check(value))
    }

    /// Builds a validator from a check function that also receives the
    /// limits left at its position in the walk.
    ///
    /// ```rust,ignore
    /// let wrapped = Validator::from_fn_with_limits("wrapped", |value, limits| {
    ///     array(int()).validate_with(value, limits)
    /// });
    /// ```
    pub fn from_fn_with_limits<F>(human: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&mut Value, &ValidationLimits) -> Outcome + Send + Sync + 'static,
    {
        Self::new(human, Kind::Custom(Arc::new(check)))
    }

    /// Display name of the type this validator checks.
    #[must_use]
    pub fn human(&self) -> &str {
        &self.human
    }

    /// The stored default, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns a validator with the same check and `value` as its default.
    #[must_use]
    pub fn default(&self, value: impl Into<Value>) -> Self {
        Self {
            human: self.human.clone(),
            default: Some(value.into()),
            kind: Arc::clone(&self.kind),
        }
    }

    /// Returns a validator with the same check and no default.
    #[must_use]
    pub fn undefault(&self) -> Self {
        Self {
            human: self.human.clone(),
            default: None,
            kind: Arc::clone(&self.kind),
        }
    }

    /// Fixed-schema metadata, for `object` validators.
    ///
    /// A composed validator exposes the metadata of its second stage.
    #[must_use]
    pub fn object_schema(&self) -> Option<&ObjectSchema> {
        match &*self.kind {
            Kind::FixedObject(schema) => Some(schema),
            Kind::Compose { second, .. } => second.object_schema(),
            _ => None,
        }
    }

    /// Dynamic-key metadata, for `objects` validators.
    #[must_use]
    pub fn objects_props(&self) -> Option<&ObjectsProps> {
        match &*self.kind {
            Kind::DynamicObject { props, .. } => Some(props),
            Kind::Compose { second, .. } => second.objects_props(),
            _ => None,
        }
    }

    /// Validates `value` with default limits.
    ///
    /// Missing keys whose validators carry a default are filled in on
    /// `value` itself; this is the only mutation a validation performs.
    pub fn validate(&self, value: &mut Value) -> Outcome {
        self.validate_with(value, &ValidationLimits::default())
    }

    /// Validates `value` under explicit `limits`.
    pub fn validate_with(&self, value: &mut Value, limits: &ValidationLimits) -> Outcome {
        self.run(value, Walk::root(limits))
    }

    pub(crate) fn run(&self, value: &mut Value, walk: Walk<'_>) -> Outcome {
        use crate::combinators;
        use crate::validators::{collection, primitive};

        match &*self.kind {
            Kind::Noop => Outcome::passed(),
            Kind::Primitive(tag) => primitive::check(*tag, &self.human, value),
            Kind::Compose { first, second } => combinators::compose::check(first, second, value, walk),
            Kind::ArrayOf(element) => collection::array::check(element, value, walk),
            Kind::FixedObject(schema) => collection::object::check(schema, value, walk),
            Kind::DynamicObject { props, element } => {
                collection::objects::check(props, element, value, walk)
            }
            Kind::Either(alternatives) => {
                combinators::either::check(alternatives, &self.human, value, walk)
            }
            Kind::OneOf(literals) => combinators::one_of::check(literals, &self.human, value),
            Kind::Deprecated { inner, notice } => {
                combinators::deprecated::check(inner, notice, value, walk)
            }
            Kind::Custom(check) => check(value, &walk.remaining()),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("human", &self.human)
            .field("default", &self.default)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{int, string};

    #[test]
    fn default_returns_new_record() {
        let base = int();
        let defaulted = base.default(5);
        assert!(!base.has_default());
        assert_eq!(defaulted.default_value(), Some(&Value::from(5)));
        assert_eq!(defaulted.human(), base.human());
    }

    #[test]
    fn undefault_clears_only_the_copy() {
        let defaulted = string().default("x");
        let cleared = defaulted.undefault();
        assert!(cleared.default_value().is_none());
        assert_eq!(defaulted.default_value(), Some(&Value::from("x")));
    }

    #[test]
    fn defaulting_keeps_check_behaviour() {
        let defaulted = int().default(1);
        assert!(defaulted.validate(&mut Value::from(3)).is_ok());
        assert!(!defaulted.validate(&mut Value::from("3")).is_ok());
    }

    #[test]
    fn custom_validator_runs_closure() {
        let even = Validator::from_fn("even", |value| match value.as_i64() {
            Some(n) if n % 2 == 0 => Outcome::passed(),
            _ => Outcome::type_mismatch("even", value),
        });
        assert_eq!(even.human(), "even");
        assert!(even.validate(&mut Value::from(4)).is_ok());
        assert!(!even.validate(&mut Value::from(3)).is_ok());
    }

    #[test]
    fn custom_check_inherits_remaining_depth() {
        use crate::validators::array;

        let nested = Validator::from_fn_with_limits("nested", |value, limits| {
            array(array(int())).validate_with(value, limits)
        });
        let outer = array(nested);
        let mut input = Value::from(serde_json::json!([[[1]]]));

        let capped = outer.validate_with(&mut input, &ValidationLimits { max_depth: 1 });
        assert!(!capped.is_ok());
        assert!(outer.validate_with(&mut input, &ValidationLimits::unlimited()).is_ok());
    }

    #[test]
    fn plain_custom_check_ignores_limits() {
        let seen = Validator::from_fn("seen", |_| Outcome::passed());
        let mut input = Value::from(1);
        assert!(seen.validate_with(&mut input, &ValidationLimits { max_depth: 0 }).is_ok());
    }
}
