//! Property tests for UTF-8 repair.

use proptest::prelude::*;

use csvsan_transform::sanitize_field;

proptest! {
    #[test]
    fn repair_never_panics_and_is_a_fixpoint(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        let repaired = sanitize_field(&raw);
        // Repaired output is already valid, so a second pass changes nothing.
        prop_assert_eq!(sanitize_field(repaired.as_bytes()), repaired);
    }

    #[test]
    fn valid_text_round_trips_unchanged(text in ".*") {
        prop_assert_eq!(sanitize_field(text.as_bytes()), text);
    }

    #[test]
    fn repair_preserves_nonempty_input(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        // Every input byte maps to output text: valid bytes survive and each
        // invalid span becomes a replacement character, never the empty string.
        let repaired = sanitize_field(&raw);
        prop_assert!(raw.is_empty() == repaired.is_empty());
    }
}
