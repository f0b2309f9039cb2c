//! Error-syllable locators
//!
//! One function per SODA category, each extracting the specific syllables
//! responsible for an already-classified error. Omission and Addition use
//! membership ("is this sound present anywhere"), not position — position
//! is meaningless once the sequences differ in length. Substitution and
//! Distortion share a single positional locator; only the triggering
//! acoustic signal differs between those two categories.

use crate::value_objects::{Syllable, serde_empty};
use serde::{Deserialize, Serialize};

/// A positional target/spoken mismatch
///
/// An absent side serializes as `""`; it only occurs on the defensive
/// branches of the positional locator, which the classifier's precedence
/// rules normally make unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionPair {
    /// Expected syllable at this position
    #[serde(with = "serde_empty")]
    pub target: Option<Syllable>,
    /// Syllable actually spoken at this position
    #[serde(with = "serde_empty")]
    pub spoken: Option<Syllable>,
}

impl SubstitutionPair {
    /// Both sides present and different
    #[must_use]
    pub fn mismatch(target: Syllable, spoken: Syllable) -> Self {
        Self {
            target: Some(target),
            spoken: Some(spoken),
        }
    }

    /// Index covered only by the target sequence
    #[must_use]
    pub fn target_only(target: Syllable) -> Self {
        Self {
            target: Some(target),
            spoken: None,
        }
    }

    /// Index covered only by the spoken sequence
    #[must_use]
    pub fn spoken_only(spoken: Syllable) -> Self {
        Self {
            target: None,
            spoken: Some(spoken),
        }
    }
}

/// The syllables responsible for a classified error
///
/// Shape depends on category: a flat syllable list for Omission/Addition,
/// target/spoken pairs for Substitution/Distortion. Serializes untagged so
/// the wire shape is a plain JSON array either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorSyllables {
    /// Flat list of missing or extra syllables
    Syllables(Vec<Syllable>),
    /// Positional target/spoken mismatches
    Pairs(Vec<SubstitutionPair>),
}

impl ErrorSyllables {
    /// The empty list a fresh assessment starts with
    #[must_use]
    pub const fn none() -> Self {
        Self::Syllables(Vec::new())
    }

    /// Number of located error syllables
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Syllables(list) => list.len(),
            Self::Pairs(pairs) => pairs.len(),
        }
    }

    /// Whether no error syllables were located
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ErrorSyllables {
    fn default() -> Self {
        Self::none()
    }
}

/// Omission locator: target syllables with no occurrence anywhere in spoken
///
/// Membership test, not positional — a syllable appearing elsewhere in the
/// spoken sequence still counts as present.
#[must_use]
pub fn omitted_syllables(target: &[Syllable], spoken: &[Syllable]) -> Vec<Syllable> {
    target
        .iter()
        .filter(|syllable| !spoken.contains(syllable))
        .cloned()
        .collect()
}

/// Addition locator: spoken syllables absent from the target sequence
#[must_use]
pub fn added_syllables(target: &[Syllable], spoken: &[Syllable]) -> Vec<Syllable> {
    spoken
        .iter()
        .filter(|syllable| !target.contains(syllable))
        .cloned()
        .collect()
}

/// Substitution locator: positional comparison over the longer sequence
///
/// Indices covered by both sequences contribute a pair only when the
/// syllables differ. One-sided indices cannot occur when the classifier's
/// precedence held (lengths are equal on this branch), but the locator
/// defends against them with a half-empty pair.
#[must_use]
pub fn substituted_syllables(target: &[Syllable], spoken: &[Syllable]) -> Vec<SubstitutionPair> {
    let max_len = target.len().max(spoken.len());
    (0..max_len)
        .filter_map(|i| match (target.get(i), spoken.get(i)) {
            (Some(t), Some(s)) if t != s => {
                Some(SubstitutionPair::mismatch(t.clone(), s.clone()))
            }
            (Some(_), Some(_)) => None,
            (Some(t), None) => Some(SubstitutionPair::target_only(t.clone())),
            (None, Some(s)) => Some(SubstitutionPair::spoken_only(s.clone())),
            (None, None) => None,
        })
        .collect()
}

/// Distortion locator: delegates to the substitution locator unchanged
///
/// Distortion is positional mismatch with an acoustic cause, not a
/// structurally different comparison, so both categories share one locator.
#[must_use]
pub fn distorted_syllables(target: &[Syllable], spoken: &[Syllable]) -> Vec<SubstitutionPair> {
    substituted_syllables(target, spoken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(tokens: &[&str]) -> Vec<Syllable> {
        tokens.iter().copied().map(Syllable::from).collect()
    }

    mod omission {
        use super::*;

        #[test]
        fn finds_target_syllables_missing_from_spoken() {
            let target = syllables(&["ka", "le", "lu"]);
            let spoken = syllables(&["ka", "le"]);
            assert_eq!(omitted_syllables(&target, &spoken), syllables(&["lu"]));
        }

        #[test]
        fn membership_beats_position() {
            // "lu" moved to the front still counts as present
            let target = syllables(&["ka", "le", "lu"]);
            let spoken = syllables(&["lu", "ka"]);
            assert_eq!(omitted_syllables(&target, &spoken), syllables(&["le"]));
        }

        #[test]
        fn empty_spoken_reports_every_target_syllable() {
            let target = syllables(&["ka", "le"]);
            assert_eq!(omitted_syllables(&target, &[]), target);
        }
    }

    mod addition {
        use super::*;

        #[test]
        fn finds_spoken_syllables_missing_from_target() {
            let target = syllables(&["ka", "le"]);
            let spoken = syllables(&["ka", "le", "lu"]);
            assert_eq!(added_syllables(&target, &spoken), syllables(&["lu"]));
        }

        #[test]
        fn is_symmetric_to_omission() {
            let a = syllables(&["ka", "le", "lu"]);
            let b = syllables(&["ka", "le"]);
            assert_eq!(omitted_syllables(&a, &b), added_syllables(&b, &a));
        }
    }

    mod substitution {
        use super::*;

        #[test]
        fn reports_only_differing_positions() {
            let target = syllables(&["ka", "le", "lu"]);
            let spoken = syllables(&["ka", "ji", "lu"]);
            let pairs = substituted_syllables(&target, &spoken);

            assert_eq!(
                pairs,
                vec![SubstitutionPair::mismatch(
                    Syllable::from("le"),
                    Syllable::from("ji")
                )]
            );
        }

        #[test]
        fn identical_sequences_produce_no_pairs() {
            let target = syllables(&["ka", "le"]);
            assert!(substituted_syllables(&target, &target).is_empty());
        }

        #[test]
        fn defends_against_target_overhang() {
            let target = syllables(&["ka", "le", "lu"]);
            let spoken = syllables(&["ka", "le"]);
            let pairs = substituted_syllables(&target, &spoken);

            assert_eq!(pairs, vec![SubstitutionPair::target_only(Syllable::from("lu"))]);
        }

        #[test]
        fn defends_against_spoken_overhang() {
            let target = syllables(&["ka"]);
            let spoken = syllables(&["ka", "le"]);
            let pairs = substituted_syllables(&target, &spoken);

            assert_eq!(pairs, vec![SubstitutionPair::spoken_only(Syllable::from("le"))]);
        }

        #[test]
        fn pair_serializes_absent_side_as_empty_string() {
            let pair = SubstitutionPair::target_only(Syllable::from("lu"));
            let json = serde_json::to_value(&pair).unwrap();
            assert_eq!(json["target"], "lu");
            assert_eq!(json["spoken"], "");
        }
    }

    mod distortion {
        use super::*;

        #[test]
        fn matches_the_substitution_locator_exactly() {
            let target = syllables(&["ka", "le", "lu"]);
            let spoken = syllables(&["ga", "le", "nu"]);
            assert_eq!(
                distorted_syllables(&target, &spoken),
                substituted_syllables(&target, &spoken)
            );
        }
    }

    mod error_syllables {
        use super::*;

        #[test]
        fn default_is_empty_flat_list() {
            let none = ErrorSyllables::default();
            assert!(none.is_empty());
            assert_eq!(serde_json::to_string(&none).unwrap(), "[]");
        }

        #[test]
        fn flat_list_serializes_as_string_array() {
            let list = ErrorSyllables::Syllables(syllables(&["lu"]));
            assert_eq!(serde_json::to_string(&list).unwrap(), "[\"lu\"]");
        }

        #[test]
        fn pairs_serialize_as_object_array() {
            let pairs = ErrorSyllables::Pairs(vec![SubstitutionPair::mismatch(
                Syllable::from("le"),
                Syllable::from("ji"),
            )]);
            let json = serde_json::to_value(&pairs).unwrap();
            assert_eq!(json[0]["target"], "le");
            assert_eq!(json[0]["spoken"], "ji");
        }
    }
}
