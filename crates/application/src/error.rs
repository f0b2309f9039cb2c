//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Missing or malformed request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Speech recognition failed or produced no usable text; fatal to the
    /// whole analysis
    #[error("Transcription failed: {0}")]
    Transcription(String),

    /// Acoustic analysis failed; the service degrades this to a neutral
    /// score instead of propagating it out of the pipeline
    #[error("Acoustic analysis failed: {0}")]
    AcousticAnalysis(String),

    /// Grapheme/phonetic mapping failed
    #[error("Phonetic mapping failed: {0}")]
    PhoneticMapping(String),

    /// Orthographic segmentation failed
    #[error("Segmentation failed: {0}")]
    Segmentation(String),

    /// Audio transcoding failed
    #[error("Transcoding failed: {0}")]
    Transcoding(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_) | Self::AcousticAnalysis(_) | Self::Transcoding(_)
        )
    }

    /// Check if this error was caused by bad caller input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription_error_message() {
        let err = ApplicationError::Transcription("speech unintelligible".to_string());
        assert_eq!(err.to_string(), "Transcription failed: speech unintelligible");
    }

    #[test]
    fn invalid_input_error_message() {
        let err = ApplicationError::InvalidInput("missing target word".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing target word");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError =
            DomainError::ValidationError("bad score".to_string()).into();
        assert_eq!(err.to_string(), "Validation failed: bad score");
    }

    #[test]
    fn retryable_classification() {
        assert!(ApplicationError::ExternalService("timeout".into()).is_retryable());
        assert!(ApplicationError::AcousticAnalysis("no frames".into()).is_retryable());
        assert!(!ApplicationError::Transcription("unintelligible".into()).is_retryable());
        assert!(!ApplicationError::InvalidInput("empty".into()).is_retryable());
    }

    #[test]
    fn input_error_classification() {
        assert!(ApplicationError::InvalidInput("empty".into()).is_input_error());
        assert!(!ApplicationError::Internal("bug".into()).is_input_error());
    }
}
