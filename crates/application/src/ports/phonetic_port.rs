//! Phonetic mapping port - Interface for grapheme/phonetic conversion

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the external grapheme↔phonetic mapping table
///
/// Normalization of symbols, if any, happens here — the core compares the
/// returned tokens verbatim.
#[cfg_attr(test, automock)]
pub trait PhoneticMappingPort: Send + Sync {
    /// Convert written text to its flattened phonetic transcription
    fn to_phonetic(&self, word: &str) -> Result<String, ApplicationError>;

    /// Convert a phonetic symbol back to its orthographic form
    fn to_orthographic(&self, symbol: &str) -> Result<String, ApplicationError>;
}
