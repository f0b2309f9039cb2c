//! Port definitions for application layer
//!
//! Ports are interfaces that define how the assessment pipeline reaches its
//! external collaborators. Adapters in the infrastructure layer implement
//! these ports; tests substitute mocks.

mod acoustic_port;
mod phonetic_port;
mod segmenter_port;
mod transcoder_port;
mod transcription_port;

pub use acoustic_port::{AcousticAnalysisPort, DistortionMeasurement};
#[cfg(test)]
pub use acoustic_port::MockAcousticAnalysisPort;
pub use phonetic_port::PhoneticMappingPort;
#[cfg(test)]
pub use phonetic_port::MockPhoneticMappingPort;
pub use segmenter_port::SegmenterPort;
#[cfg(test)]
pub use segmenter_port::MockSegmenterPort;
pub use transcoder_port::AudioTranscoderPort;
#[cfg(test)]
pub use transcoder_port::MockAudioTranscoderPort;
pub use transcription_port::{Transcription, TranscriptionPort};
#[cfg(test)]
pub use transcription_port::MockTranscriptionPort;
