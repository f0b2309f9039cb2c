//! Segmenter port - Interface for orthographic syllable segmentation

use domain::value_objects::Syllable;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for splitting a written word into minimal pronounceable units
///
/// Implementations walk the input left to right: a syllable starts with one
/// base letter, absorbs repeatable cluster-marker-plus-consonant pairs,
/// then at most one vowel-modifier mark, then any trailing diacritics.
/// Output is deterministic and order-preserving; the pipeline relies on
/// that when it feeds the syllables to the aligner and classifier.
#[cfg_attr(test, automock)]
pub trait SegmenterPort: Send + Sync {
    /// Split a written word into its ordered orthographic syllables
    fn segment(&self, word: &str) -> Result<Vec<Syllable>, ApplicationError>;
}
