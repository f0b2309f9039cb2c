//! Distortion score value object

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar acoustic-quality metric from the external acoustic analyzer
///
/// Non-negative and finite; higher means more acoustically distorted. The
/// neutral score (0.0) is what a failed or skipped acoustic analysis
/// degrades to, and it never exceeds the distortion threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DistortionScore(f64);

impl DistortionScore {
    /// The neutral "not distorted" score
    pub const NEUTRAL: Self = Self(0.0);

    /// Create a score, rejecting negative or non-finite values
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidDistortionScore(format!(
                "{value} is not finite"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::InvalidDistortionScore(format!(
                "{value} is negative"
            )));
        }
        Ok(Self(value))
    }

    /// The raw score value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Strict threshold comparison used by the classifier
    #[must_use]
    pub fn exceeds(self, threshold: f64) -> bool {
        self.0 > threshold
    }

    /// Whether this is the neutral default
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for DistortionScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for DistortionScore {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DistortionScore> for f64 {
    fn from(score: DistortionScore) -> Self {
        score.0
    }
}

impl fmt::Display for DistortionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
