//! Kannada orthographic segmenter
//!
//! Splits written Kannada into aksharas, the minimal pronounceable units
//! the rest of the pipeline works with. A cursor walks the word left to
//! right: an akshara always begins with one base letter, absorbs a virama
//! followed by another consonant (repeatable, for clusters like ಸ್ತ), then
//! at most one vowel sign, then any trailing anusvara/visarga marks.
//!
//! The walk is total: characters outside the Kannada block simply start
//! their own single-character akshara. Anything that segments wrongly here
//! is a defect in the range tables below, not something downstream code
//! compensates for.

use application::{ApplicationError, SegmenterPort};
use domain::value_objects::Syllable;
use tracing::{debug, instrument};

/// The cluster marker (halant) joining consonants
const VIRAMA: char = '\u{0CCD}';

/// Consonant range ಕ..ಹ
fn is_consonant(ch: char) -> bool {
    ('\u{0C95}'..='\u{0CB9}').contains(&ch)
}

/// Dependent vowel signs ಾ..ೌ plus the length marks ೕ ೖ
fn is_vowel_sign(ch: char) -> bool {
    ('\u{0CBE}'..='\u{0CCC}').contains(&ch) || matches!(ch, '\u{0CD5}' | '\u{0CD6}')
}

/// Anusvara ಂ and visarga ಃ
fn is_diacritic(ch: char) -> bool {
    matches!(ch, '\u{0C82}' | '\u{0C83}')
}

/// Rule-based segmenter for the Kannada script
#[derive(Debug, Clone, Copy, Default)]
pub struct KannadaSegmenter;

impl KannadaSegmenter {
    /// Create a segmenter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn split(word: &str) -> Vec<Syllable> {
        let chars: Vec<char> = word.chars().collect();
        let mut aksharas = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let mut akshara = String::new();
            akshara.push(chars[i]);
            i += 1;

            // Consonant clusters: virama + consonant, repeatable
            while i + 1 < chars.len() && chars[i] == VIRAMA && is_consonant(chars[i + 1]) {
                akshara.push(chars[i]);
                akshara.push(chars[i + 1]);
                i += 2;
            }

            // At most one vowel sign
            if i < chars.len() && is_vowel_sign(chars[i]) {
                akshara.push(chars[i]);
                i += 1;
            }

            // Trailing anusvara/visarga
            while i < chars.len() && is_diacritic(chars[i]) {
                akshara.push(chars[i]);
                i += 1;
            }

            aksharas.push(Syllable::from(akshara));
        }

        aksharas
    }
}

impl SegmenterPort for KannadaSegmenter {
    #[instrument(skip(self))]
    fn segment(&self, word: &str) -> Result<Vec<Syllable>, ApplicationError> {
        let aksharas = Self::split(word);
        debug!(word, count = aksharas.len(), "Segmented word");
        Ok(aksharas)
    }
}
