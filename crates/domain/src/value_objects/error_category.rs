//! SODA error category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four canonical pronunciation-error categories, plus "not yet classified"
///
/// Exactly one category is assigned per analysis — it is never a set. `None`
/// only exists on a freshly built assessment that has not run through the
/// classifier yet; it serializes as the empty string for compatibility with
/// the original report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// No classification has been applied
    #[default]
    #[serde(rename = "")]
    None,
    /// A syllable was replaced by a different one at the same position
    Substitution,
    /// The spoken word is missing syllables the target has
    Omission,
    /// Positional mismatch with an acoustic cause
    Distortion,
    /// The spoken word contains syllables the target lacks
    Addition,
}

impl ErrorCategory {
    /// Stable string label, matching the wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Substitution => "Substitution",
            Self::Omission => "Omission",
            Self::Distortion => "Distortion",
            Self::Addition => "Addition",
        }
    }

    /// Whether this category is triggered by a syllable-count mismatch
    #[must_use]
    pub const fn is_length_error(&self) -> bool {
        matches!(self, Self::Omission | Self::Addition)
    }

    /// Whether an actual classification has been made
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unclassified() {
        assert_eq!(ErrorCategory::default(), ErrorCategory::None);
        assert!(!ErrorCategory::None.is_classified());
    }

    #[test]
    fn none_serializes_as_empty_string() {
        let json = serde_json::to_string(&ErrorCategory::None).unwrap();
        assert_eq!(json, "\"\"");

        let back: ErrorCategory = serde_json::from_str("\"\"").unwrap();
        assert_eq!(back, ErrorCategory::None);
    }

    #[test]
    fn categories_serialize_with_capitalized_labels() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Omission).unwrap(),
            "\"Omission\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Substitution).unwrap(),
            "\"Substitution\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Distortion).unwrap(),
            "\"Distortion\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Addition).unwrap(),
            "\"Addition\""
        );
    }

    #[test]
    fn length_errors_are_omission_and_addition() {
        assert!(ErrorCategory::Omission.is_length_error());
        assert!(ErrorCategory::Addition.is_length_error());
        assert!(!ErrorCategory::Substitution.is_length_error());
        assert!(!ErrorCategory::Distortion.is_length_error());
        assert!(!ErrorCategory::None.is_length_error());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ErrorCategory::Distortion), "Distortion");
        assert_eq!(format!("{}", ErrorCategory::None), "");
    }
}
