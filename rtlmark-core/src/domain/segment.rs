//! Direction segmentation
//!
//! Splits text into maximal runs sharing the binary strong-RTL signal. The
//! scan consults only [`ScriptClassifier::is_rtl`]: neutral characters
//! (spaces, digits, punctuation) fall on the not-RTL side and therefore
//! extend a LTR run or break a RTL one. No UAX #9 weak or neutral
//! resolution is performed.

use serde::{Deserialize, Serialize};

use super::script::{ArabicLatinClassifier, ScriptClassifier};
use super::Direction;

/// A maximal substring sharing one direction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSpan {
    /// Span content, never empty
    pub text: String,
    /// Direction of every character in the span
    pub direction: Direction,
}

impl DirectionSpan {
    /// Create a span
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }

    /// Returns true when the span is RTL
    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}

/// Ordered spans whose concatenation is the segmented input
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentSequence {
    spans: Vec<DirectionSpan>,
}

impl SegmentSequence {
    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True for the segmentation of empty text
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Borrow the spans
    pub fn spans(&self) -> &[DirectionSpan] {
        &self.spans
    }

    /// Iterate over the spans in order
    pub fn iter(&self) -> std::slice::Iter<'_, DirectionSpan> {
        self.spans.iter()
    }

    /// Rebuild the original text
    pub fn concat(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Take ownership of the spans
    pub fn into_inner(self) -> Vec<DirectionSpan> {
        self.spans
    }
}

impl IntoIterator for SegmentSequence {
    type Item = DirectionSpan;
    type IntoIter = std::vec::IntoIter<DirectionSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a> IntoIterator for &'a SegmentSequence {
    type Item = &'a DirectionSpan;
    type IntoIter = std::slice::Iter<'a, DirectionSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Segment `text` using the given classifier
pub fn segment_with<C: ScriptClassifier + ?Sized>(classifier: &C, text: &str) -> SegmentSequence {
    let mut spans = Vec::new();
    let mut run_start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let char_is_rtl = classifier.is_rtl(ch);
        match current {
            None => current = Some(char_is_rtl),
            Some(run_is_rtl) if run_is_rtl == char_is_rtl => {}
            Some(run_is_rtl) => {
                spans.push(DirectionSpan::new(
                    &text[run_start..idx],
                    Direction::from_rtl(run_is_rtl),
                ));
                run_start = idx;
                current = Some(char_is_rtl);
            }
        }
    }

    if let Some(run_is_rtl) = current {
        spans.push(DirectionSpan::new(
            &text[run_start..],
            Direction::from_rtl(run_is_rtl),
        ));
    }

    SegmentSequence { spans }
}

/// Segment `text` into maximal same-direction runs
pub fn segment_by_direction(text: &str) -> SegmentSequence {
    segment_with(&ArabicLatinClassifier, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(seq: &SegmentSequence) -> Vec<(&str, bool)> {
        seq.iter().map(|s| (s.text.as_str(), s.is_rtl())).collect()
    }

    #[test]
    fn test_empty_text() {
        let seq = segment_by_direction("");
        assert!(seq.is_empty());
        assert_eq!(seq.concat(), "");
    }

    #[test]
    fn test_pure_arabic_single_span() {
        let seq = segment_by_direction("مرحبا");
        assert_eq!(pairs(&seq), vec![("مرحبا", true)]);
    }

    #[test]
    fn test_pure_latin_single_span() {
        let seq = segment_by_direction("Hello");
        assert_eq!(pairs(&seq), vec![("Hello", false)]);
    }

    #[test]
    fn test_space_falls_on_not_rtl_side() {
        let seq = segment_by_direction("مرحبا Hello");
        assert_eq!(pairs(&seq), vec![("مرحبا", true), (" Hello", false)]);

        let seq = segment_by_direction("Hello مرحبا");
        assert_eq!(pairs(&seq), vec![("Hello ", false), ("مرحبا", true)]);
    }

    #[test]
    fn test_spaces_between_arabic_words_split_runs() {
        let seq = segment_by_direction("مرحبا بالعالم");
        assert_eq!(
            pairs(&seq),
            vec![("مرحبا", true), (" ", false), ("بالعالم", true)]
        );
    }

    #[test]
    fn test_arabic_indic_digits_are_rtl() {
        let seq = segment_by_direction("رقم ٤٥٦ and 789");
        assert_eq!(
            pairs(&seq),
            vec![
                ("رقم", true),
                (" ", false),
                ("٤٥٦", true),
                (" and 789", false)
            ]
        );
    }

    #[test]
    fn test_tight_alternation_yields_single_char_spans() {
        let seq = segment_by_direction("aبcد");
        assert_eq!(seq.len(), 4);
        assert!(seq.iter().all(|s| s.text.chars().count() == 1));
    }

    #[test]
    fn test_multibyte_non_rtl_characters() {
        let text = "👋 سلام 🌍";
        let seq = segment_by_direction(text);
        assert_eq!(seq.concat(), text);
        assert_eq!(pairs(&seq), vec![("👋 ", false), ("سلام", true), (" 🌍", false)]);
    }

    #[test]
    fn test_into_iter_owned() {
        let spans: Vec<DirectionSpan> = segment_by_direction("abc").into_iter().collect();
        assert_eq!(spans, vec![DirectionSpan::new("abc", Direction::Ltr)]);
    }
}
