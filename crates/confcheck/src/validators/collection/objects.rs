//! Dynamic-key object checks.
//!
//! For maps such as `{"<plugin name>": {...}}` where keys are open-ended
//! but the values share a shape. A key whitelist only produces warnings;
//! an unlisted key is never an error.

use crate::combinators::compose;
use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{ItemOutcome, Outcome, Schema, Validator};
use crate::suggest::{best_suggestions, perhaps_you_meant};
use crate::validators::primitive::is_type;
use crate::value::{TypeTag, Value};
use std::fmt;
use std::sync::Arc;

type WarnerFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Options of an [`objects`] validator.
///
/// ```rust,ignore
/// let props = ObjectsProps::new()
///     .with_keys(["dev", "prod"])
///     .with_specific("prod", object(schema! { "replicas" => int().default(3) }));
/// ```
#[derive(Clone, Default)]
pub struct ObjectsProps {
    keys: Option<Vec<String>>,
    specifics: Schema,
    warner: Option<Arc<WarnerFn>>,
}

impl ObjectsProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognized keys. Keys outside this list get a warning.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the element validator for `key`.
    ///
    /// Defaults of specific validators are injected when `key` is missing.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_specific(mut self, key: impl Into<String>, validator: Validator) -> Self {
        self.specifics.insert(key.into(), validator);
        self
    }

    /// Replaces all per-key overrides.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_specifics(mut self, specifics: Schema) -> Self {
        self.specifics = specifics;
        self
    }

    /// Custom warning text for unrecognized keys.
    ///
    /// Returning `None` (or an empty string) falls back to the built-in text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_warner<F>(mut self, warner: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.warner = Some(Arc::new(warner));
        self
    }

    #[must_use]
    pub fn keys(&self) -> Option<&[String]> {
        self.keys.as_deref()
    }

    #[must_use]
    pub fn specifics(&self) -> &Schema {
        &self.specifics
    }

    #[must_use]
    pub fn has_warner(&self) -> bool {
        self.warner.is_some()
    }

    fn unrecognized(&self, key: &str) -> Option<String> {
        let keys = self.keys.as_ref()?;
        if keys.iter().any(|known| known == key) {
            return None;
        }
        let custom = self
            .warner
            .as_ref()
            .and_then(|warner| warner(key))
            .filter(|text| !text.is_empty());
        if custom.is_some() {
            return custom;
        }

        let mut warning = format!(
            "unrecognized key: {key}; expected either of {}",
            keys.join(", ")
        );
        let suggestions = best_suggestions(key, keys.iter().map(String::as_str));
        if let Some(hint) = perhaps_you_meant(&suggestions) {
            warning.push_str("; ");
            warning.push_str(&hint);
        }
        Some(warning)
    }
}

impl fmt::Debug for ObjectsProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectsProps")
            .field("keys", &self.keys)
            .field("specifics", &self.specifics)
            .field("warner", &self.warner.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// Object validator whose values are checked by `element`, or by the
/// matching entry of `props.specifics`.
#[must_use]
pub fn objects(props: ObjectsProps, element: Validator) -> Validator {
    compose(
        is_type(TypeTag::Object),
        Validator::new(
            TypeTag::Object.name(),
            Kind::DynamicObject { props, element },
        ),
    )
}

pub(crate) fn check(
    props: &ObjectsProps,
    element: &Validator,
    value: &mut Value,
    walk: Walk<'_>,
) -> Outcome {
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
        let validator = props.specifics.get(key).unwrap_or(element);
        let mut outcome = validator.run(item, inner);
        if let Some(warning) = props.unrecognized(key) {
            outcome.append_warning(&warning);
        }
        items.push(ItemOutcome::new(key.as_str(), outcome));
    }

    for (key, validator) in &props.specifics {
        if map.contains_key(key) {
            continue;
        }
        let Some(default) = validator.default_value() else {
            continue;
        };
        tracing::debug!(key = %key, validator = %validator.human(), "injecting default");
        let slot = map.entry(key.clone()).or_insert(default.deep_clone());
        let _ = validator.run(slot, inner);
    }

    Outcome::collection(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::PathSegment;
    use crate::schema;
    use crate::validators::{int, object, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn warning_at<'a>(outcome: &'a Outcome, key: &str) -> Option<&'a str> {
        outcome.item(&PathSegment::from(key)).and_then(Outcome::warning)
    }

    #[test]
    fn every_value_checked_by_element() {
        let v = objects(ObjectsProps::new(), int());
        assert!(v.validate(&mut Value::from(json!({"a": 1, "b": 2}))).is_ok());
        let outcome = v.validate(&mut Value::from(json!({"a": 1, "b": "x"})));
        assert!(!outcome.is_ok());
        assert!(outcome.item(&PathSegment::from("a")).is_some_and(Outcome::is_ok));
    }

    #[test]
    fn specifics_override_element() {
        let props = ObjectsProps::new().with_specific("name", string());
        let v = objects(props, int());
        assert!(v.validate(&mut Value::from(json!({"name": "x", "n": 1}))).is_ok());
        assert!(!v.validate(&mut Value::from(json!({"name": 1}))).is_ok());
    }

    #[test]
    fn unrecognized_key_warns_but_passes() {
        let props = ObjectsProps::new().with_keys(["value", "number"]);
        let outcome = objects(props, int()).validate(&mut Value::from(json!({"vlue": 1})));
        assert!(outcome.is_ok());
        assert_eq!(
            warning_at(&outcome, "vlue"),
            Some("unrecognized key: vlue; expected either of value, number; perhaps you meant value")
        );
    }

    #[test]
    fn unrecognized_key_without_close_match() {
        let props = ObjectsProps::new().with_keys(["a"]);
        let outcome = objects(props, int()).validate(&mut Value::from(json!({"zzzzzzzz": 1})));
        assert_eq!(
            warning_at(&outcome, "zzzzzzzz"),
            Some("unrecognized key: zzzzzzzz; expected either of a")
        );
    }

    #[test]
    fn recognized_key_has_no_warning() {
        let props = ObjectsProps::new().with_keys(["a"]);
        let outcome = objects(props, int()).validate(&mut Value::from(json!({"a": 1})));
        assert_eq!(warning_at(&outcome, "a"), None);
    }

    #[test]
    fn custom_warner_replaces_builtin_text() {
        let props = ObjectsProps::new()
            .with_keys(["a"])
            .with_warner(|key| (key != "silenced").then(|| format!("{key} is not a known profile")));
        let outcome =
            objects(props, int()).validate(&mut Value::from(json!({"x": 1, "silenced": 2})));
        assert_eq!(warning_at(&outcome, "x"), Some("x is not a known profile"));
        assert_eq!(
            warning_at(&outcome, "silenced"),
            Some("unrecognized key: silenced; expected either of a")
        );
    }

    #[test]
    fn warning_appends_to_item_failure() {
        let props = ObjectsProps::new().with_keys(["a"]);
        let outcome = objects(props, int()).validate(&mut Value::from(json!({"b": "x"})));
        assert!(!outcome.is_ok());
        let item = outcome.item(&PathSegment::from("b")).expect("item");
        assert!(item.mismatch().is_some());
        assert_eq!(
            item.warning(),
            Some("unrecognized key: b; expected either of a; perhaps you meant a")
        );
    }

    #[test]
    fn injects_defaults_of_specifics_only() {
        let props = ObjectsProps::new()
            .with_specific("prod", object(schema! { "replicas" => int().default(3) }).default(Value::from(json!({}))));
        let v = objects(props, int().default(7));
        let mut input = Value::from(json!({}));
        assert!(v.validate(&mut input).is_ok());
        assert_eq!(input.to_json(), json!({"prod": {"replicas": 3}}));
    }

    #[test]
    fn props_are_inspectable() {
        let v = objects(ObjectsProps::new().with_keys(["a", "b"]), int());
        let props = v.objects_props().expect("props");
        assert_eq!(props.keys(), Some(&["a".to_owned(), "b".to_owned()][..]));
        assert!(props.specifics().is_empty());
        assert!(!props.has_warner());
        assert!(v.object_schema().is_none());
    }
}
