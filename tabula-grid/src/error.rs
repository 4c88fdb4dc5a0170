//! Error types for the table controller

use thiserror::Error;

use crate::types::RowId;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while driving the table
#[derive(Debug, Error)]
pub enum GridError {
    /// Schema lookup, validation or sort failure
    #[error(transparent)]
    Fields(#[from] tabula_fields::FieldsError),

    /// Row not present on the render surface
    #[error("row not found: {id}")]
    RowNotFound { id: RowId },

    /// Commit or cancel without a cell being edited
    #[error("no cell is being edited")]
    NoActiveEdit,

    /// A second edit was started before the first finished
    #[error("cell '{key}' of row {row} is already being edited")]
    EditInProgress { row: RowId, key: String },

    /// Configuration could not be loaded
    #[error("configuration error: {message}")]
    Config { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for GridError {
    fn from(err: figment::Error) -> Self {
        Self::config(err.to_string())
    }
}
