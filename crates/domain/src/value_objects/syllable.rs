//! Syllable value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic phonetic or syllabic unit
///
/// Opaque string token compared by value. No normalization happens here —
/// the upstream phonetic mapping is responsible for producing canonical
/// symbols. The same type covers both granularities the aligner works at:
/// whole orthographic/phonetic syllables and single phonetic characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Syllable(String);

impl Syllable {
    /// Create a syllable from a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the token is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Syllable {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl From<String> for Syllable {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<char> for Syllable {
    fn from(ch: char) -> Self {
        Self(ch.to_string())
    }
}

impl AsRef<str> for Syllable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Serde helper mapping `Option<Syllable>` to the empty string on the wire
///
/// The original report format represents a missing side of an alignment
/// pair as `""` rather than `null`.
pub(crate) mod serde_empty {
    use super::Syllable;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Syllable>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(syllable) => serializer.serialize_str(syllable.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Syllable>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Syllable::new(raw)))
        }
    }
}
