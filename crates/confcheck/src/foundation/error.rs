//! Schema-authoring errors.
//!
//! Malformed *data* never produces a Rust error; it produces a failing
//! [`Outcome`](crate::foundation::Outcome). The errors here are reserved for
//! mistakes made while building validators.

/// An error raised while combining validator definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// At least one side is not a fixed-schema object validator.
    #[error("can't merge {left} and {right}")]
    Unmergeable { left: String, right: String },

    /// Both schemas declare `key` with incompatible validators.
    #[error("can't merge schemas for key '{key}' ({left} and {right})")]
    Conflict {
        key: String,
        left: String,
        right: String,
    },
}

impl SchemaError {
    /// The schema key the error is about, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Conflict { key, .. } => Some(key),
            Self::Unmergeable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_key_and_types() {
        let err = SchemaError::Conflict {
            key: "a".into(),
            left: "int".into(),
            right: "string".into(),
        };
        assert_eq!(err.to_string(), "can't merge schemas for key 'a' (int and string)");
        assert_eq!(err.key(), Some("a"));
    }

    #[test]
    fn unmergeable_has_no_key() {
        let err = SchemaError::Unmergeable {
            left: "object".into(),
            right: "string".into(),
        };
        assert_eq!(err.to_string(), "can't merge object and string");
        assert_eq!(err.key(), None);
    }
}
