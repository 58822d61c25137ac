//! In-memory configuration values.
//!
//! [`Value`] is the already-deserialized shape every validator inspects. It
//! mirrors JSON with three additions that configuration files in the wild
//! carry around: an explicit `Undefined`, compiled regular expressions and
//! callables.
//!
//! ```rust,ignore
//! use nebula_confcheck::value::{TypeTag, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"port": 8080}));
//! assert_eq!(value.type_tag(), TypeTag::Object);
//! ```

mod convert;
mod display;
mod kind;

pub use kind::{TypeTag, classify};

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Ordered key/value storage backing [`Value::Object`].
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A configuration value.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value.
    Undefined,
    /// Explicit `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any numeric value.
    Number(serde_json::Number),
    /// UTF-8 text.
    String(String),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Key/value mapping in insertion order.
    Object(Map),
    /// Compiled regular expression.
    Regex(Regex),
    /// Callable hook.
    Function(Callable),
}

impl Value {
    /// Returns the semantic type tag of this value.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        classify(self)
    }

    /// Returns `true` for [`Value::Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for [`Value::Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Produces a copy that shares no mutable substructure with `self`.
    ///
    /// Containers are copied element by element and callables are rebound to
    /// a fresh identity that forwards to the same behaviour. A compiled
    /// [`Regex`] is immutable, so its clone keeps the pattern together with
    /// every builder flag.
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        match self {
            Self::Array(items) => Self::Array(items.iter().map(Value::deep_clone).collect()),
            Self::Object(map) => Self::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.deep_clone()))
                    .collect(),
            ),
            Self::Regex(re) => Self::Regex(re.clone()),
            Self::Function(callable) => Self::Function(callable.rebind()),
            other => other.clone(),
        }
    }

    /// Strict equality as used by literal matching.
    ///
    /// Scalars compare by value (numbers numerically); containers, regexes
    /// and callables only match themselves by identity, which never holds
    /// between a literal and an input.
    #[must_use]
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => numbers_equal(a, b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.same(b),
            _ => false,
        }
    }
}

fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    match (a.as_i64(), b.as_i64()) {
        (Some(x), Some(y)) => x == y,
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => self.strict_eq(other),
        }
    }
}

// ============================================================================
// CALLABLE
// ============================================================================

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared callable stored inside a configuration value.
///
/// Equality is identity: two handles are equal only when they point at the
/// same closure.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns a handle with a new identity that forwards to this one.
    #[must_use]
    pub fn rebind(&self) -> Self {
        let inner = Arc::clone(&self.0);
        Self(Arc::new(move |args: &[Value]| inner(args)))
    }

    /// Returns `true` if both handles share one closure.
    #[must_use]
    pub fn same(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(<function>)")
    }
}
