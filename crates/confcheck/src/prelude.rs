//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_confcheck::prelude::*;` import that brings
//! in the validator constructors, combinators, outcome types and the
//! diagnostics pipeline.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_confcheck::prelude::*;
//!
//! let plugins = objects(ObjectsProps::new().with_keys(["lint", "fmt"]), object(schema! {}));
//! let legacy = deprecated(bool(), Some("use `plugins`"));
//! ```

// ============================================================================
// FOUNDATION: Validator record, outcomes, limits, errors
// ============================================================================

pub use crate::foundation::{
    ItemOutcome, Mismatch, Outcome, OutcomeKind, PathSegment, Schema, SchemaError,
    ValidationLimits, Validator,
};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{Callable, Map, TypeTag, Value};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::combinators::{compose, deprecated, either, one_of};
pub use crate::validators::{
    ObjectSchema, ObjectsProps, anymatch, array, bool, function, int, is_type, noop, number,
    object, object_with, objects, regexp, string,
};

// ============================================================================
// MERGE AND DIAGNOSTICS
// ============================================================================

pub use crate::diagnostics::{
    Diagnostic, ErrorEntry, Report, WarningEntry, flatten, format, format_report,
};
pub use crate::merge::{MergeOptions, merge};
pub use crate::schema;
