//! Property tests for classification and segmentation laws

use proptest::prelude::*;
use rtlmark_core::{
    classify, contains_latin, contains_rtl, is_rtl_char, segment_by_direction, wrap_mixed_content,
    Markup, MarkupUnit, MixedContentVerdict,
};

/// Strings biased towards Arabic/Latin boundaries
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,6}",
            "[\u{0621}-\u{064A}]{1,6}",
            "[\u{0660}-\u{0669}0-9]{1,3}",
            "[ .,!?()\\-]{1,2}",
            "[\u{FB50}-\u{FDFF}\u{FE70}-\u{FEFF}]{1,2}",
            "[éçñŁ\u{0180}-\u{024F}]{1,2}",
            ".{1,3}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn segmentation_round_trips(text in mixed_text()) {
        prop_assert_eq!(segment_by_direction(&text).concat(), text);
    }

    #[test]
    fn segmentation_round_trips_any_string(text in any::<String>()) {
        prop_assert_eq!(segment_by_direction(&text).concat(), text);
    }

    #[test]
    fn adjacent_spans_differ(text in mixed_text()) {
        let seq = segment_by_direction(&text);
        for pair in seq.spans().windows(2) {
            prop_assert_ne!(pair[0].direction, pair[1].direction);
        }
    }

    #[test]
    fn spans_are_non_empty_and_uniform(text in mixed_text()) {
        for span in segment_by_direction(&text).iter() {
            prop_assert!(!span.text.is_empty());
            for ch in span.text.chars() {
                prop_assert_eq!(is_rtl_char(ch), span.is_rtl());
            }
        }
    }

    #[test]
    fn mixed_iff_both_scripts(text in mixed_text()) {
        let mixed = classify(&text) == MixedContentVerdict::Mixed;
        prop_assert_eq!(mixed, contains_rtl(&text) && contains_latin(&text));
    }

    #[test]
    fn contains_rtl_matches_ranges(text in any::<String>()) {
        let expected = text.chars().any(|ch| {
            let cp = ch as u32;
            (0x0600..=0x06FF).contains(&cp)
                || (0x0750..=0x077F).contains(&cp)
                || (0x08A0..=0x08FF).contains(&cp)
                || (0xFB50..=0xFDFF).contains(&cp)
                || (0xFE70..=0xFEFF).contains(&cp)
        });
        prop_assert_eq!(contains_rtl(&text), expected);
    }

    #[test]
    fn classify_is_deterministic(text in mixed_text()) {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    #[test]
    fn markup_preserves_text(text in mixed_text()) {
        let markup = wrap_mixed_content(&text);
        prop_assert_eq!(markup.text(), text.clone());
        if let Markup::Mixed(units) = &markup {
            let runs = units.iter().filter(|u| matches!(u, MarkupUnit::Run(_))).count();
            prop_assert_eq!(markup.boundary_count() + 1, runs);
        }
    }
}
