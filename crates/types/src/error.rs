//! Validation errors raised when constructing model values from raw data.

use thiserror::Error;

/// Error type for model construction and field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input must be a JSON object")]
    NotAnObject,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("field '{field}' must be a {expected}")]
    WrongType { field: String, expected: &'static str },

    #[error("field '{0}' cannot be empty or whitespace")]
    BlankField(String),

    #[error("field '{field}' must contain at least one non-blank entry")]
    EmptyList { field: String },

    #[error("field '{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("unknown question category: '{0}'")]
    UnknownCategory(String),
}
