use thiserror::Error;

/// Errors produced by type and value operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid type encoding: {0}")]
    InvalidTypeJson(String),

    #[error("attribute `{name}` is not declared by the object type")]
    UnexpectedAttribute { name: String },

    #[error("attribute `{name}` expects {expected}, got {actual}")]
    AttributeMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("value does not match type {expected}: got {actual}")]
    ValueMismatch { expected: String, actual: String },
}
