//! Transcription port - Interface for speech-to-text

use async_trait::async_trait;
use domain::value_objects::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Transcribed text in the target script
    pub text: String,
    /// Confidence score (0.0 - 1.0), when the recognizer reports one
    pub confidence: Option<f32>,
}

/// Port for the external speech recognizer
///
/// A failure here is fatal to the whole analysis — the pipeline cannot
/// classify without a spoken-side sequence and never substitutes a
/// placeholder. Retrying, if desired, is the recognizer's own concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe a waveform into written text
    ///
    /// # Arguments
    /// * `audio` - Canonical waveform bytes
    /// * `format` - Format of the audio
    /// * `language_hint` - Optional language hint (e.g., "kn")
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
        language_hint: Option<String>,
    ) -> Result<Transcription, ApplicationError>;

    /// Check if the recognizer is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_transcription_port_transcribe() {
        let mut mock = MockTranscriptionPort::new();
        mock.expect_transcribe().returning(|_, _, _| {
            Ok(Transcription {
                text: "ಕಮಲ".to_string(),
                confidence: Some(0.91),
            })
        });

        let result = mock
            .transcribe(vec![1, 2, 3], AudioFormat::Wav, Some("kn".to_string()))
            .await
            .unwrap();
        assert_eq!(result.text, "ಕಮಲ");
        assert_eq!(result.confidence, Some(0.91));
    }

    #[tokio::test]
    async fn mock_transcription_port_is_available() {
        let mut mock = MockTranscriptionPort::new();
        mock.expect_is_available().returning(|| false);

        assert!(!mock.is_available().await);
    }
}
