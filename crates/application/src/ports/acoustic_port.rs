//! Acoustic analysis port - Interface for the external acoustic analyzer

use async_trait::async_trait;
use domain::value_objects::{AcousticSummary, DistortionScore};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Distortion verdict from the acoustic analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionMeasurement {
    /// The analyzer's own distorted/not-distorted flag
    pub distorted: bool,
    /// The scalar distortion score; higher means more distorted
    pub score: DistortionScore,
}

impl DistortionMeasurement {
    /// The "not distorted" measurement a failed analysis degrades to
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            distorted: false,
            score: DistortionScore::NEUTRAL,
        }
    }
}

impl Default for DistortionMeasurement {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Port for acoustic feature extraction
///
/// Both operations may fail; the pipeline degrades either failure to a
/// neutral value with a warning instead of aborting, since the acoustic
/// signal only shifts one threshold comparison.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AcousticAnalysisPort: Send + Sync {
    /// Compute the distortion score for a waveform
    async fn distortion(&self, audio: &[u8]) -> Result<DistortionMeasurement, ApplicationError>;

    /// Summarize pitch, intensity, and duration; informational only
    async fn summary(&self, audio: &[u8]) -> Result<AcousticSummary, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_measurement_is_not_distorted() {
        let neutral = DistortionMeasurement::neutral();
        assert!(!neutral.distorted);
        assert!(neutral.score.is_neutral());
        assert_eq!(DistortionMeasurement::default(), neutral);
    }

    #[tokio::test]
    async fn mock_acoustic_port_distortion() {
        let mut mock = MockAcousticAnalysisPort::new();
        mock.expect_distortion().returning(|_| {
            Ok(DistortionMeasurement {
                distorted: true,
                score: DistortionScore::new(93.4).unwrap(),
            })
        });

        let measurement = mock.distortion(&[1, 2, 3]).await.unwrap();
        assert!(measurement.distorted);
        assert!(measurement.score.exceeds(80.0));
    }

    #[tokio::test]
    async fn mock_acoustic_port_summary() {
        let mut mock = MockAcousticAnalysisPort::new();
        mock.expect_summary().returning(|_| {
            Ok(AcousticSummary {
                mean_pitch_hz: 190.0,
                mean_intensity_db: 58.5,
                duration_seconds: 1.2,
            })
        });

        let summary = mock.summary(&[1, 2, 3]).await.unwrap();
        assert!((summary.duration_seconds - 1.2).abs() < f64::EPSILON);
    }
}
