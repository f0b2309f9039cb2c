//! Audio transcoder port - Interface for waveform normalization

use async_trait::async_trait;
use domain::value_objects::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for transcoding uploaded audio into the canonical waveform format
///
/// A pass-through codec call: the pipeline hands over whatever the client
/// uploaded and gets WAV bytes back.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AudioTranscoderPort: Send + Sync {
    /// Transcode audio bytes into canonical WAV
    async fn to_wav(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<Vec<u8>, ApplicationError>;
}
