//! Macros for declaring schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`schema!`]: build an ordered key to validator mapping
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_confcheck::prelude::*;
//!
//! let server = object(schema! {
//!     "host" => string().default("localhost"),
//!     "port" => int().default(8080),
//! });
//! ```

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`Schema`](crate::foundation::Schema) from `key => validator`
/// pairs. Keys keep the order they are written in.
///
/// A repeated key keeps its first position and takes the last validator.
///
/// ```rust,ignore
/// let fields = schema! {
///     "name" => string(),
///     "tags" => array(string()).default(Value::from(json!([]))),
/// };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::foundation::Schema::new()
    };
    ($($key:expr => $validator:expr),+ $(,)?) => {{
        let mut fields = $crate::foundation::Schema::new();
        $(
            fields.insert(::std::string::String::from($key), $validator);
        )+
        fields
    }};
}

// ============================================================================
// TESTS
// ============================================================================
