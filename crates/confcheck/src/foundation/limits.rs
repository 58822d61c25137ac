//! Traversal limits for validation calls.
//!
//! Validators recurse as deep as the input is nested. `ValidationLimits`
//! caps that depth so adversarial input cannot grow the stack without bound;
//! a compound value found below the cap fails validation instead of being
//! walked.

use serde::{Deserialize, Serialize};

/// Configurable limits applied to a single validation call.
///
/// # Example
///
/// ```rust,ignore
/// use nebula_confcheck::foundation::ValidationLimits;
///
/// let limits: ValidationLimits = serde_json::from_str(r#"{"max_depth": 16}"#)?;
/// assert_eq!(limits.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum number of nested compound levels below the root.
    pub max_depth: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

impl ValidationLimits {
    /// Limits for untrusted input.
    #[must_use]
    pub const fn strict() -> Self {
        Self { max_depth: 50 }
    }

    /// Limits for trusted, machine-generated configuration.
    #[must_use]
    pub const fn permissive() -> Self {
        Self { max_depth: 200 }
    }

    /// No limits (use with caution!)
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

// ============================================================================
// WALK STATE
// ============================================================================

/// Per-call traversal state threaded through validators.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walk<'a> {
    limits: &'a ValidationLimits,
    depth: usize,
}

impl<'a> Walk<'a> {
    pub(crate) fn root(limits: &'a ValidationLimits) -> Self {
        Self { limits, depth: 0 }
    }

    /// State for the children of the current compound value.
    pub(crate) fn descend(self) -> Self {
        Self {
            limits: self.limits,
            depth: self.depth.saturating_add(1),
        }
    }

    pub(crate) fn exceeds_limit(self) -> bool {
        self.depth > self.limits.max_depth
    }

    pub(crate) fn max_depth(self) -> usize {
        self.limits.max_depth
    }

    pub(crate) fn depth(self) -> usize {
        self.depth
    }

    /// Limits left for a validator started fresh at the current position.
    pub(crate) fn remaining(self) -> ValidationLimits {
        ValidationLimits {
            max_depth: self.limits.max_depth.saturating_sub(self.depth),
        }
    }
}
