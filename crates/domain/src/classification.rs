//! Error classifier
//!
//! The central decision procedure: given the target and spoken syllable
//! sequences plus the externally supplied distortion score, pick exactly
//! one SODA category and locate the responsible syllables. The decision is
//! computed as a single immutable [`Classification`] value and merged into
//! the result record once, so no partially-populated intermediate state
//! ever escapes.

use crate::alignment::{Alignment, align};
use crate::locators::{
    ErrorSyllables, added_syllables, distorted_syllables, omitted_syllables, substituted_syllables,
};
use crate::value_objects::{DistortionScore, ErrorCategory, Syllable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Distortion score above which an equal-length mismatch is classified as
/// Distortion rather than Substitution
pub const DISTORTION_THRESHOLD: f64 = 80.0;

/// The classifier's complete, immutable decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The single category that best explains the divergence
    pub category: ErrorCategory,
    /// Syllables responsible, shaped per category
    pub error_syllables: ErrorSyllables,
    /// Recorded score; stays neutral on the length-mismatch branches
    pub distortion_score: DistortionScore,
    /// Diagnostic list-mode alignment, produced on the equal-length branch
    /// only; informational, never decisive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Alignment>,
}

/// Classify the divergence between target and spoken syllable sequences
///
/// Strict precedence, first match wins:
///
/// 1. More target syllables than spoken → Omission (membership locator);
///    the distortion score is not consulted and stays neutral.
/// 2. Fewer target syllables than spoken → Addition (membership locator);
///    likewise neutral.
/// 3. Equal lengths → run the list-variant aligner as a diagnostic pass,
///    then decide on the acoustic signal alone: a score above `threshold`
///    means Distortion, otherwise Substitution. Both use the shared
///    positional locator, and the supplied score is recorded either way.
///
/// Fully identical sequences still take branch 3: lexical correctness and
/// acoustic quality are orthogonal, so a perfectly matched word can be
/// flagged Distortion by the acoustic signal alone (with an empty pair
/// list). The three-way length comparison is exhaustive, so a category is
/// always assigned.
#[must_use]
pub fn classify(
    target: &[Syllable],
    spoken: &[Syllable],
    distortion: DistortionScore,
    threshold: f64,
) -> Classification {
    match target.len().cmp(&spoken.len()) {
        Ordering::Greater => Classification {
            category: ErrorCategory::Omission,
            error_syllables: ErrorSyllables::Syllables(omitted_syllables(target, spoken)),
            distortion_score: DistortionScore::NEUTRAL,
            diagnostic: None,
        },
        Ordering::Less => Classification {
            category: ErrorCategory::Addition,
            error_syllables: ErrorSyllables::Syllables(added_syllables(target, spoken)),
            distortion_score: DistortionScore::NEUTRAL,
            diagnostic: None,
        },
        Ordering::Equal => {
            let diagnostic = align(target, spoken);

            let (category, pairs) = if distortion.exceeds(threshold) {
                (ErrorCategory::Distortion, distorted_syllables(target, spoken))
            } else {
                (
                    ErrorCategory::Substitution,
                    substituted_syllables(target, spoken),
                )
            };

            Classification {
                category,
                error_syllables: ErrorSyllables::Pairs(pairs),
                distortion_score: distortion,
                diagnostic: Some(diagnostic),
            }
        }
    }
}
