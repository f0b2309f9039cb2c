//! Sequence aligner
//!
//! Walks the target and spoken sequences with independent cursors and tags
//! every position. This is deliberately NOT a minimum-edit-distance
//! alignment: after a desync it never re-synchronizes, so a single dropped
//! symbol near the start cascades into Substitution tags for every later
//! position. The classifier depends on exactly this behavior — it uses the
//! length-based branches before trusting per-position tags — so the walk
//! must not be "improved" into a real alignment algorithm.

use crate::value_objects::{Syllable, serde_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag assigned to one aligned position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentTag {
    /// Both sides present and equal
    Correct,
    /// Both sides present and different
    Substitution,
    /// Target side only — spoken sequence exhausted
    Omission,
    /// Spoken side only — target sequence exhausted
    Addition,
}

impl fmt::Display for AlignmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "Correct",
            Self::Substitution => "Substitution",
            Self::Omission => "Omission",
            Self::Addition => "Addition",
        };
        f.write_str(label)
    }
}

/// One aligned position: a target symbol, a spoken symbol, and a tag
///
/// At most one side may be absent, never both; the constructors are the
/// only way to build a unit, which keeps that invariant. An absent side
/// serializes as `""` for compatibility with the original report format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentUnit {
    /// Target-side symbol, absent only for Addition units
    #[serde(with = "serde_empty")]
    pub target: Option<Syllable>,
    /// Spoken-side symbol, absent only for Omission units
    #[serde(with = "serde_empty")]
    pub spoken: Option<Syllable>,
    /// Classification of this position
    #[serde(rename = "type")]
    pub tag: AlignmentTag,
}

impl AlignmentUnit {
    /// Both sides present and equal
    #[must_use]
    pub fn correct(target: Syllable, spoken: Syllable) -> Self {
        Self {
            target: Some(target),
            spoken: Some(spoken),
            tag: AlignmentTag::Correct,
        }
    }

    /// Both sides present and different
    #[must_use]
    pub fn substitution(target: Syllable, spoken: Syllable) -> Self {
        Self {
            target: Some(target),
            spoken: Some(spoken),
            tag: AlignmentTag::Substitution,
        }
    }

    /// Leftover target symbol after the spoken sequence ran out
    #[must_use]
    pub fn omission(target: Syllable) -> Self {
        Self {
            target: Some(target),
            spoken: None,
            tag: AlignmentTag::Omission,
        }
    }

    /// Leftover spoken symbol after the target sequence ran out
    #[must_use]
    pub fn addition(spoken: Syllable) -> Self {
        Self {
            target: None,
            spoken: Some(spoken),
            tag: AlignmentTag::Addition,
        }
    }
}

/// Tally of tags over an alignment
///
/// Invariant: the counts sum to the number of emitted units. The
/// `distortions` slot is never produced by the aligner (distortion is an
/// acoustic judgement, not a positional one) but stays on the wire for
/// report compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    /// Positions where both sides matched
    #[serde(rename = "Correct")]
    pub correct: usize,
    /// Positions tagged Substitution
    #[serde(rename = "S")]
    pub substitutions: usize,
    /// Positions tagged Omission
    #[serde(rename = "O")]
    pub omissions: usize,
    /// Always zero; kept for report compatibility
    #[serde(rename = "D")]
    pub distortions: usize,
    /// Positions tagged Addition
    #[serde(rename = "A")]
    pub additions: usize,
}

impl AlignmentSummary {
    /// Record one tag occurrence
    pub fn record(&mut self, tag: AlignmentTag) {
        match tag {
            AlignmentTag::Correct => self.correct += 1,
            AlignmentTag::Substitution => self.substitutions += 1,
            AlignmentTag::Omission => self.omissions += 1,
            AlignmentTag::Addition => self.additions += 1,
        }
    }

    /// Total tagged positions
    #[must_use]
    pub const fn total(&self) -> usize {
        self.correct + self.substitutions + self.omissions + self.distortions + self.additions
    }
}

/// A tagged alignment plus its tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// Aligned positions in sequence order
    #[serde(rename = "alignment")]
    pub units: Vec<AlignmentUnit>,
    /// Tag tally over the units
    pub summary: AlignmentSummary,
}

impl Alignment {
    /// Number of aligned positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether both input sequences were empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether every emitted position matched
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.summary.correct == self.units.len()
    }
}

/// Align two symbol sequences position-by-position
///
/// Equal symbols at the cursors emit Correct, unequal emit Substitution,
/// and both cursors advance together. Once one sequence is exhausted, the
/// leftovers of the other become Omission (target side) or Addition
/// (spoken side). Emits exactly `max(target.len(), spoken.len())` units.
#[must_use]
pub fn align(target: &[Syllable], spoken: &[Syllable]) -> Alignment {
    let mut units = Vec::with_capacity(target.len().max(spoken.len()));
    let mut summary = AlignmentSummary::default();

    let mut i = 0;
    let mut j = 0;
    while i < target.len() && j < spoken.len() {
        let unit = if target[i] == spoken[j] {
            AlignmentUnit::correct(target[i].clone(), spoken[j].clone())
        } else {
            AlignmentUnit::substitution(target[i].clone(), spoken[j].clone())
        };
        summary.record(unit.tag);
        units.push(unit);
        i += 1;
        j += 1;
    }
    while i < target.len() {
        summary.record(AlignmentTag::Omission);
        units.push(AlignmentUnit::omission(target[i].clone()));
        i += 1;
    }
    while j < spoken.len() {
        summary.record(AlignmentTag::Addition);
        units.push(AlignmentUnit::addition(spoken[j].clone()));
        j += 1;
    }

    Alignment { units, summary }
}

/// Flat-string variant of [`align`] working at phonetic-character granularity
///
/// Each `char` of the flattened phonetic strings becomes one symbol; the
/// walk itself is identical.
#[must_use]
pub fn align_phonetic(target: &str, spoken: &str) -> Alignment {
    let target: Vec<Syllable> = target.chars().map(Syllable::from).collect();
    let spoken: Vec<Syllable> = spoken.chars().map(Syllable::from).collect();
    align(&target, &spoken)
}
