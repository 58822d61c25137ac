//! Semantic type classification for [`Value`].

use super::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a configuration value.
///
/// Arrays, regular expressions, `null` and plain objects are distinct tags
/// even though several of them would share a runtime category in a dynamic
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Function,
    Undefined,
    Null,
    Array,
    Regexp,
    Object,
}

impl TypeTag {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Array => "array",
            Self::Regexp => "regexp",
            Self::Object => "object",
        }
    }

    /// Every tag, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::String,
            Self::Number,
            Self::Boolean,
            Self::Function,
            Self::Undefined,
            Self::Null,
            Self::Array,
            Self::Regexp,
            Self::Object,
        ]
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a value to its semantic type tag.
#[must_use]
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
        Value::Regex(_) => TypeTag::Regexp,
        Value::Function(_) => TypeTag::Function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Callable;
    use regex::Regex;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::from("x"), TypeTag::String)]
    #[case(Value::from(3), TypeTag::Number)]
    #[case(Value::from(true), TypeTag::Boolean)]
    #[case(Value::Null, TypeTag::Null)]
    #[case(Value::Undefined, TypeTag::Undefined)]
    #[case(Value::from(json!([1, 2])), TypeTag::Array)]
    #[case(Value::from(json!({"a": 1})), TypeTag::Object)]
    #[case(Value::Regex(Regex::new("a.c").unwrap()), TypeTag::Regexp)]
    #[case(Value::Function(Callable::new(|_| Value::Null)), TypeTag::Function)]
    fn classifies_each_variant(#[case] value: Value, #[case] expected: TypeTag) {
        assert_eq!(classify(&value), expected);
    }

    #[test]
    fn names_are_lowercase_and_unique() {
        let names: Vec<&str> = TypeTag::all().iter().map(|t| t.name()).collect();
        for name in &names {
            assert_eq!(*name, name.to_lowercase());
        }
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&TypeTag::Regexp).unwrap(), "\"regexp\"");
    }
}
