//! # Mesh Errors
//!
//! Error types for screw generation and export.

use thiserror::Error;

/// Errors that can occur during mesh generation or export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A geometric parameter is out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Too many vertices for 32-bit face indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// The export destination could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

impl From<tempfile::PersistError> for MeshError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}
