//! Audio format value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of uploaded audio data
///
/// Everything is transcoded to WAV before transcription and acoustic
/// analysis; the other variants exist for browser and messenger uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// Canonical waveform format consumed by the analysis pipeline
    Wav,
    /// OGG container (typical voice-note format)
    Ogg,
    /// MP3 format
    Mp3,
    /// WebM container (browser MediaRecorder default)
    Webm,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::Mp3 => "mp3",
            Self::Webm => "webm",
        }
    }

    /// Parse from MIME type
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base = mime.split(';').next().unwrap_or(mime).trim();
        match base {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/ogg" => Some(Self::Ogg),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Whether this is already the canonical analysis format
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Wav)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_are_correct() {
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Ogg.mime_type(), "audio/ogg");
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::Webm.mime_type(), "audio/webm");
    }

    #[test]
    fn from_mime_type_parses_correctly() {
        assert_eq!(
            AudioFormat::from_mime_type("audio/wav"),
            Some(AudioFormat::Wav)
        );
        assert_eq!(
            AudioFormat::from_mime_type("audio/x-wav"),
            Some(AudioFormat::Wav)
        );
        assert_eq!(
            AudioFormat::from_mime_type("audio/webm; codecs=opus"),
            Some(AudioFormat::Webm)
        );
        assert_eq!(AudioFormat::from_mime_type("audio/unknown"), None);
    }

    #[test]
    fn only_wav_is_canonical() {
        assert!(AudioFormat::Wav.is_canonical());
        assert!(!AudioFormat::Ogg.is_canonical());
        assert!(!AudioFormat::Mp3.is_canonical());
        assert!(!AudioFormat::Webm.is_canonical());
    }

    #[test]
    fn display_uses_extension() {
        assert_eq!(format!("{}", AudioFormat::Webm), "webm");
        assert_eq!(format!("{}", AudioFormat::Wav), "wav");
    }
}
