//! # nebula-confcheck
//!
//! Composable validation for nested configuration data, with default
//! injection, schema merging and path-qualified diagnostics.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_confcheck::prelude::*;
//! use serde_json::json;
//!
//! let config = object(schema! {
//!     "watch" => anymatch(),
//!     "port" => int().default(8080),
//!     "mode" => one_of(["fast", "safe"]).default("safe"),
//! });
//!
//! let mut value = Value::from(json!({"watch": ["src/"], "prot": 80}));
//! let outcome = config.validate(&mut value);
//!
//! // "prot" is unknown but close to "port"; the default port was injected.
//! let report = Report::collect(&outcome, "");
//! assert_eq!(report.warnings[0].warning, "perhaps you meant port");
//! assert_eq!(value.get("port"), Some(&Value::from(8080)));
//! ```
//!
//! ## Validators
//!
//! - **Primitive**: [`string`](validators::string), [`bool`](validators::bool),
//!   [`int`](validators::int), [`number`](validators::number),
//!   [`function`](validators::function), [`regexp`](validators::regexp),
//!   [`noop`](validators::noop)
//! - **Collection**: [`array`](validators::array), [`object`](validators::object),
//!   [`objects`](validators::objects)
//! - **Combinators**: [`compose`](combinators::compose),
//!   [`either`](combinators::either), [`one_of`](combinators::one_of),
//!   [`deprecated`](combinators::deprecated)
//!
//! Validation never returns a Rust error for bad data. It returns an
//! [`Outcome`](foundation::Outcome) tree that [`diagnostics`] turns into
//! messages. Mistakes in the schema itself, such as merging two
//! incompatible schemas, are reported as [`SchemaError`](foundation::SchemaError).

pub mod combinators;
pub mod diagnostics;
pub mod foundation;
mod macros;
pub mod merge;
pub mod prelude;
pub mod suggest;
pub mod validators;
pub mod value;
