//! Error types for the field schema

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building a schema or checking records against it
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldsError {
    /// Record key that the schema does not declare
    #[error("unknown field: {key}")]
    UnknownField { key: String },

    /// A field's business rule rejected the submitted value
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: String, reason: String },

    /// New entry is missing a field the schema declares
    #[error("missing required field: {key}")]
    MissingField { key: String },

    /// Two fields registered under the same key
    #[error("duplicate field key: {key}")]
    DuplicateField { key: String },

    /// Choice field declared without any choices
    #[error("choice field '{key}' has no choices")]
    NoChoices { key: String },
}

impl FieldsError {
    /// Create an unknown field error
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }

    /// Create a validation failure
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// The field key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownField { key }
            | Self::Invalid { key, .. }
            | Self::MissingField { key }
            | Self::DuplicateField { key }
            | Self::NoChoices { key } => key,
        }
    }
}
