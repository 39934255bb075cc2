//! Error types for Verdict Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Field not found: {fact_type}.{field}")]
    FieldNotFound { fact_type: String, field: String },

    #[error("Invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },
}

impl CoreError {
    /// Shorthand for a missing field on a fact shape
    pub fn field_not_found(fact_type: impl Into<String>, field: impl Into<String>) -> Self {
        CoreError::FieldNotFound {
            fact_type: fact_type.into(),
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
