//! Error types for tessellation.

use thiserror::Error;

/// Errors that can occur while building a subdivided point set.
#[derive(Error, Debug)]
pub enum TessellateError {
    /// The class pattern does not describe a usable subdivision lattice.
    #[error("invalid class pattern: {0}")]
    InvalidClassPattern(String),

    /// The base geometry produced a zero-length edge or zero vector.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] geodome_math::MathError),
}

/// Result type for tessellation operations.
pub type Result<T> = std::result::Result<T, TessellateError>;
