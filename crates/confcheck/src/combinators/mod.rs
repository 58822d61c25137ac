//! Combinators that build validators from other validators.
//!
//! - [`compose`] runs two validators in sequence (logical AND)
//! - [`either`] accepts a value if any alternative does (logical OR)
//! - [`one_of`] accepts one of a fixed set of literals
//! - [`deprecated`] flags a key as deprecated without changing its verdict
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_confcheck::prelude::*;
//!
//! let mode = one_of(["fast", "safe"]);
//! let watch = either(vec![string(), array(string())]);
//! let legacy = deprecated(bool(), Some("use `mode` instead"));
//! ```

pub mod compose;
pub mod deprecated;
pub mod either;
pub mod one_of;

pub use compose::compose;
pub use deprecated::deprecated;
pub use either::either;
pub use one_of::one_of;
