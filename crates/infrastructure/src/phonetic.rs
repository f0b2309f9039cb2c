//! Table-driven phonetic mapping
//!
//! Adapter over an external grapheme↔phonetic lookup table. The table is
//! ordinary data (TOML or in-code pairs); conversion is greedy
//! longest-prefix replacement in both directions. Symbols not covered by
//! the table pass through verbatim — the mapping is total over its input,
//! and gaps are fixed by extending the table, not by downstream handling.

use std::collections::BTreeMap;

use application::{ApplicationError, PhoneticMappingPort};
use serde::Deserialize;
use tracing::debug;

/// Phonetic mapping backed by a substitution table
#[derive(Debug, Clone)]
pub struct TablePhoneticMapping {
    /// Orthographic → phonetic entries, longest key first
    to_phonetic: Vec<(String, String)>,
    /// Phonetic → orthographic entries, longest key first
    to_orthographic: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct MappingFile {
    mappings: BTreeMap<String, String>,
}

impl TablePhoneticMapping {
    /// Build a mapping from (orthographic, phonetic) pairs
    ///
    /// The reverse direction is derived from the same pairs; when several
    /// orthographic keys share a phonetic value, the first pair wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut to_phonetic: Vec<(String, String)> = Vec::new();
        let mut to_orthographic: Vec<(String, String)> = Vec::new();

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            // Empty keys would match everywhere and stall the scan
            if key.is_empty() || value.is_empty() {
                continue;
            }
            if !to_orthographic.iter().any(|(k, _)| *k == value) {
                to_orthographic.push((value.clone(), key.clone()));
            }
            to_phonetic.push((key, value));
        }

        // Longest key first so greedy matching prefers clusters
        to_phonetic.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        to_orthographic.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self {
            to_phonetic,
            to_orthographic,
        }
    }

    /// Parse a mapping table from TOML
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [mappings]
    /// "ಕ" = "ka"
    /// "ಮ" = "ma"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, ApplicationError> {
        let file: MappingFile = toml::from_str(raw)
            .map_err(|e| ApplicationError::PhoneticMapping(format!("invalid mapping table: {e}")))?;
        debug!(entries = file.mappings.len(), "Loaded phonetic mapping table");
        Ok(Self::from_pairs(file.mappings))
    }

    fn apply(table: &[(String, String)], input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        'outer: while !rest.is_empty() {
            for (key, value) in table {
                if let Some(remainder) = rest.strip_prefix(key.as_str()) {
                    output.push_str(value);
                    rest = remainder;
                    continue 'outer;
                }
            }
            // No table entry covers this position: pass one char through
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                output.push(ch);
            }
            rest = chars.as_str();
        }

        output
    }
}

impl PhoneticMappingPort for TablePhoneticMapping {
    fn to_phonetic(&self, word: &str) -> Result<String, ApplicationError> {
        Ok(Self::apply(&self.to_phonetic, word))
    }

    fn to_orthographic(&self, symbol: &str) -> Result<String, ApplicationError> {
        Ok(Self::apply(&self.to_orthographic, symbol))
    }
}
