//! Domain layer for the Kannada pronunciation assessment engine
//!
//! Contains the core SODA decision logic: the sequence aligner, the error
//! classifier, and the error-syllable locators, plus the value objects and
//! entities they operate on. This layer is pure and synchronous — no I/O,
//! no external-service types.

pub mod alignment;
pub mod classification;
pub mod entities;
pub mod errors;
pub mod locators;
pub mod value_objects;

pub use alignment::{Alignment, AlignmentSummary, AlignmentTag, AlignmentUnit, align, align_phonetic};
pub use classification::{Classification, DISTORTION_THRESHOLD, classify};
pub use entities::*;
pub use errors::DomainError;
pub use locators::{
    ErrorSyllables, SubstitutionPair, added_syllables, distorted_syllables, omitted_syllables,
    substituted_syllables,
};
pub use value_objects::*;
