//! Domain layer: pure, stateless direction logic
//!
//! Every function here is total over `&str`, performs no I/O and touches no
//! shared state, so it can be called concurrently without synchronization.

pub mod direction;
pub mod isolate;
pub mod numerals;
pub mod script;
pub mod segment;

pub use direction::Direction;
pub use isolate::{
    escape_html, isolate_segments, wrap_mixed, wrap_mixed_content, wrap_single_direction, Markup,
    MarkupStyle, MarkupUnit,
};
pub use numerals::format_number;
pub use script::{
    classify, code_point_class, contains_latin, contains_rtl, is_latin_char, is_mixed_content,
    is_rtl_char, ArabicLatinClassifier, CodepointClass, MixedContentVerdict, ScriptClassifier,
};
pub use segment::{segment_by_direction, segment_with, DirectionSpan, SegmentSequence};
