//! Pronunciation assessment entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::Classification;
use crate::locators::ErrorSyllables;
use crate::value_objects::{DistortionScore, ErrorCategory, Syllable};

/// The output record of one analysis call
///
/// Built fresh per call and filled in two steps: [`new`](Self::new) sets
/// the lexical fields, [`apply`](Self::apply) merges the classifier's
/// decision exactly once. The serialized field names match the original
/// JSON reports, including the legacy duplicates (`target_word` mirrors
/// `word`, and the spoken syllables go out under `spoken_phonemes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationAssessment {
    /// Unique identifier of this analysis
    pub id: Uuid,
    /// When the analysis ran
    pub created_at: DateTime<Utc>,
    /// The written target word
    pub word: String,
    /// Phonetic syllable sequence of the target word
    #[serde(rename = "target_syllable")]
    pub target_syllables: Vec<Syllable>,
    /// Flattened phonetic string of the target
    pub ipa_target: String,
    /// Flattened phonetic string of what was spoken
    pub ipa_spoken: String,
    /// Legacy duplicate of `word`
    pub target_word: String,
    /// Phonetic syllable sequence of the spoken rendering; legacy wire name
    #[serde(rename = "spoken_phonemes")]
    pub spoken_syllables: Vec<Syllable>,
    /// The single assigned category; empty string on the wire until classified
    pub error_type: ErrorCategory,
    /// Recorded distortion score, 0.0 unless the equal-length branch ran
    pub distortion_score: DistortionScore,
    /// Syllables responsible for the error, shaped per category
    pub error_syllables: ErrorSyllables,
}

impl PronunciationAssessment {
    /// Create an unclassified assessment for one target/spoken pair
    ///
    /// The flattened phonetic strings are the concatenation of the
    /// respective syllable sequences.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        target_syllables: Vec<Syllable>,
        spoken_syllables: Vec<Syllable>,
    ) -> Self {
        let word = word.into();
        let ipa_target = concat_syllables(&target_syllables);
        let ipa_spoken = concat_syllables(&spoken_syllables);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            target_word: word.clone(),
            word,
            target_syllables,
            ipa_target,
            ipa_spoken,
            spoken_syllables,
            error_type: ErrorCategory::None,
            distortion_score: DistortionScore::NEUTRAL,
            error_syllables: ErrorSyllables::none(),
        }
    }

    /// Merge the classifier's decision into the record
    ///
    /// The single mutation point: category, score, and error syllables are
    /// committed together, so the record is never observable half-filled.
    pub fn apply(&mut self, classification: Classification) {
        self.error_type = classification.category;
        self.distortion_score = classification.distortion_score;
        self.error_syllables = classification.error_syllables;
    }

    /// Whether the classifier has run on this record
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.error_type.is_classified()
    }
}

fn concat_syllables(syllables: &[Syllable]) -> String {
    syllables.iter().map(Syllable::as_str).collect()
}
