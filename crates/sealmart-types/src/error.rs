use thiserror::Error;

/// Errors produced by type construction and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("required field is empty: {field}")]
    MissingField { field: &'static str },

    #[error("extension id cannot be empty")]
    EmptyId,

    #[error("extension id is reserved: {0}")]
    ReservedId(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),
}
