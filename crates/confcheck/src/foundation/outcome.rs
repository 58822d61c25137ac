//! Validation outcomes.
//!
//! Every validator call produces an [`Outcome`]: either a simple pass/fail
//! verdict for a single value, or a collection of per-item outcomes for a
//! compound value. Both shapes may carry an advisory warning.

use crate::value::{TypeTag, Value};
use std::fmt;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step into a compound value: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ============================================================================
// MISMATCH
// ============================================================================

/// Why a simple validation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Human description of what was expected.
    pub expected: String,
    /// Type tag of the offending value.
    pub actual: TypeTag,
    /// Snapshot of the offending value.
    pub value: Value,
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Shape of an [`Outcome`].
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeKind {
    /// Simple success.
    Passed,
    /// Simple failure.
    Failed(Mismatch),
    /// Aggregate over the items of a compound value.
    Collection(Vec<ItemOutcome>),
}

/// The outcome of validating a single item of a compound value.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub path: PathSegment,
    pub outcome: Outcome,
}

impl ItemOutcome {
    pub fn new(path: impl Into<PathSegment>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// The result of running a validator against a value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_confcheck::foundation::Outcome;
/// use nebula_confcheck::value::Value;
///
/// let failed = Outcome::type_mismatch("int", &Value::from("x"));
/// assert!(!failed.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    kind: OutcomeKind,
    warning: Option<String>,
}

impl Outcome {
    /// A simple success.
    #[must_use]
    pub fn passed() -> Self {
        Self {
            kind: OutcomeKind::Passed,
            warning: None,
        }
    }

    /// A simple failure describing `value` against `expected`.
    pub fn type_mismatch(expected: impl Into<String>, value: &Value) -> Self {
        Self {
            kind: OutcomeKind::Failed(Mismatch {
                expected: expected.into(),
                actual: value.type_tag(),
                value: value.clone(),
            }),
            warning: None,
        }
    }

    /// An aggregate over item outcomes, in traversal order.
    #[must_use]
    pub fn collection(items: Vec<ItemOutcome>) -> Self {
        Self {
            kind: OutcomeKind::Collection(items),
            warning: None,
        }
    }

    /// Sets the warning, replacing any previous one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Appends `warning`, joining with `"; "` if one is already present.
    pub fn append_warning(&mut self, warning: &str) {
        self.warning = Some(match self.warning.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}; {warning}"),
            _ => warning.to_owned(),
        });
    }

    /// `true` for a simple pass, or for a collection whose items all pass.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        match &self.kind {
            OutcomeKind::Passed => true,
            OutcomeKind::Failed(_) => false,
            OutcomeKind::Collection(items) => items.iter().all(|item| item.outcome.is_ok()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &OutcomeKind {
        &self.kind
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// The failure details of a simple failure.
    #[must_use]
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match &self.kind {
            OutcomeKind::Failed(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Item outcomes of a collection; empty for simple outcomes.
    #[must_use]
    pub fn items(&self) -> &[ItemOutcome] {
        match &self.kind {
            OutcomeKind::Collection(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, OutcomeKind::Collection(_))
    }

    /// Finds the item outcome recorded under `path`.
    #[must_use]
    pub fn item(&self, path: &PathSegment) -> Option<&Outcome> {
        self.items()
            .iter()
            .find(|item| &item.path == path)
            .map(|item| &item.outcome)
    }
}
