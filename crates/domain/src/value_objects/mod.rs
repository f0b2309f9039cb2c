//! Value objects for the assessment domain

mod acoustic_summary;
mod audio_format;
mod distortion_score;
mod error_category;
mod syllable;

pub use acoustic_summary::AcousticSummary;
pub use audio_format::AudioFormat;
pub use distortion_score::DistortionScore;
pub use error_category::ErrorCategory;
pub use syllable::Syllable;
pub(crate) use syllable::serde_empty;
