//! Acoustic summary value object

use serde::{Deserialize, Serialize};

/// Summary statistics from the external acoustic analyzer
///
/// Informational only — included in diagnostic output but never consulted
/// by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticSummary {
    /// Mean fundamental frequency over voiced frames, in Hz
    pub mean_pitch_hz: f64,
    /// Mean intensity, in dB
    pub mean_intensity_db: f64,
    /// Total recording duration, in seconds
    pub duration_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let summary = AcousticSummary {
            mean_pitch_hz: 212.4,
            mean_intensity_db: 61.0,
            duration_seconds: 1.38,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: AcousticSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
