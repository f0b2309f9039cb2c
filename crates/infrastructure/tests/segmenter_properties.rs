//! Property-based tests for the Kannada segmenter

use application::SegmenterPort;
use infrastructure::KannadaSegmenter;
use proptest::prelude::*;

/// Strings over the Kannada block mixed with ASCII noise
fn mixed_script() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('\u{0C80}', '\u{0CFF}'),
            proptest::char::range('a', 'z')
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Segmentation never drops or invents characters
    #[test]
    fn segmentation_is_lossless(word in mixed_script()) {
        let aksharas = KannadaSegmenter::new().segment(&word).unwrap();
        let rejoined: String = aksharas.iter().map(|s| s.as_str()).collect();
        prop_assert_eq!(rejoined, word);
    }

    /// Every akshara is non-empty and their count never exceeds the
    /// character count
    #[test]
    fn aksharas_are_nonempty(word in mixed_script()) {
        let aksharas = KannadaSegmenter::new().segment(&word).unwrap();
        prop_assert!(aksharas.iter().all(|s| !s.is_empty()));
        prop_assert!(aksharas.len() <= word.chars().count());
    }

    /// Segmenting twice gives the same answer
    #[test]
    fn segmentation_is_deterministic(word in mixed_script()) {
        let segmenter = KannadaSegmenter::new();
        prop_assert_eq!(
            segmenter.segment(&word).unwrap(),
            segmenter.segment(&word).unwrap()
        );
    }
}
