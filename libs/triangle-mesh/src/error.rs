//! # Mesh Errors
//!
//! Error types for triangular mesh generation.

use thiserror::Error;

/// Errors that can occur while building or generating a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Subdivision level outside the accepted domain (negative)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Zero subdivisions requested while the zero case is rejected
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: u64, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: u64, max: usize },

    /// Generator settings could not be read
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Creates an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
