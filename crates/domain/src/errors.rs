//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Distortion score outside its valid range
    #[error("Invalid distortion score: {0}")]
    InvalidDistortionScore(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
