//! Output types for unified API

use serde::Serialize;
use std::time::Duration;

use crate::domain::{
    code_point_class, CodepointClass, Direction, Markup, MixedContentVerdict, SegmentSequence,
};

/// Direction analysis of one piece of text
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Whole-string verdict
    pub verdict: MixedContentVerdict,
    /// Whole-string direction
    pub direction: Direction,
    /// Maximal same-direction runs
    pub spans: SegmentSequence,
    /// Structured isolation of the text
    pub markup: Markup,
    /// `markup` serialized with the configured style
    pub html: String,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Character statistics
    pub stats: ProcessingStats,
}

/// Character statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Arabic characters
    pub rtl_chars: usize,
    /// Latin letters
    pub latin_chars: usize,
    /// Everything else
    pub neutral_chars: usize,
    /// Number of direction spans
    pub span_count: usize,
    /// Number of boundary units in the markup
    pub boundary_count: usize,
}

impl ProcessingStats {
    pub(crate) fn collect(text: &str, spans: &SegmentSequence, markup: &Markup) -> Self {
        let mut stats = ProcessingStats {
            bytes_processed: text.len(),
            span_count: spans.len(),
            boundary_count: markup.boundary_count(),
            ..Default::default()
        };

        for ch in text.chars() {
            stats.chars_processed += 1;
            match code_point_class(ch) {
                CodepointClass::Rtl => stats.rtl_chars += 1,
                CodepointClass::Latin => stats.latin_chars += 1,
                CodepointClass::Neutral => stats.neutral_chars += 1,
            }
        }

        stats
    }
}

impl Output {
    /// Concatenated span text; equals the analysed input
    pub fn text(&self) -> String {
        self.spans.concat()
    }

    /// Whether the analysed text mixes both scripts
    pub fn is_mixed(&self) -> bool {
        self.verdict.is_mixed()
    }
}
