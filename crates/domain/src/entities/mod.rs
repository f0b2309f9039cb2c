//! Domain entities

mod assessment;

pub use assessment::PronunciationAssessment;
