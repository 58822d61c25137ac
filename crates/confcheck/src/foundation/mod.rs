//! Core validation types
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Validator**: [`Validator`], the immutable, composable check record
//! - **Outcomes**: [`Outcome`], [`ItemOutcome`], [`Mismatch`], [`PathSegment`]
//! - **Limits**: [`ValidationLimits`]
//! - **Errors**: [`SchemaError`] for schema-authoring mistakes
//!
//! # Architecture
//!
//! ## 1. Outcomes, not errors
//!
//! Malformed data is reported through [`Outcome`] values that carry the
//! expected type, the actual type and the offending value. Rust errors are
//! reserved for mistakes in the schema itself.
//!
//! ## 2. Composition
//!
//! Validators are built from small pieces:
//!
//! ```rust,ignore
//! let watch = either(vec![string(), regexp(), array(string())]);
//! let config = object(schema! { "watch" => watch, "port" => int().default(80) });
//! ```
//!
//! ## 3. Immutability
//!
//! Attaching or clearing a default returns a new validator sharing the same
//! check. The receiver is never modified.

pub mod error;
pub mod limits;
pub mod outcome;
pub mod validator;

pub use error::SchemaError;
pub use limits::ValidationLimits;
pub use outcome::{ItemOutcome, Mismatch, Outcome, OutcomeKind, PathSegment};
pub use validator::Validator;

/// Ordered mapping from key to validator, as declared.
pub type Schema = indexmap::IndexMap<String, Validator>;
