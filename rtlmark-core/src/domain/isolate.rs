//! Direction isolation and markup serialization
//!
//! A [`Markup`] carries every run with its direction and script hook, plus
//! explicit [`MarkupUnit::Boundary`] units at each script change. It can be
//! consumed structurally or serialized to HTML spans with [`Markup::to_html`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::script::{classify, contains_rtl};
use super::segment::{segment_by_direction, DirectionSpan, SegmentSequence};
use super::Direction;

/// Default class-name hooks
pub mod defaults {
    /// Outer wrapper of a mixed-script string
    pub const CONTAINER_CLASS: &str = "mixed-script-container";
    /// Arabic run inside a mixed string
    pub const RTL_CLASS: &str = "arabic-segment";
    /// Non-Arabic run inside a mixed string
    pub const LATIN_CLASS: &str = "latin-segment";
    /// Zero-width delimiter between runs
    pub const BOUNDARY_CLASS: &str = "script-boundary";
}

/// Serialization options for [`Markup::to_html`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupStyle {
    /// Escape `<`, `>`, `&`, `"` and `'` in run text
    pub escape_html: bool,
    /// Emit the boundary unit between consecutive runs
    pub boundary_markers: bool,
    /// Class of the mixed-string wrapper
    pub container_class: String,
    /// Class of RTL runs
    pub rtl_class: String,
    /// Class of LTR runs
    pub latin_class: String,
    /// Class of the boundary unit
    pub boundary_class: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            escape_html: true,
            boundary_markers: true,
            container_class: defaults::CONTAINER_CLASS.to_string(),
            rtl_class: defaults::RTL_CLASS.to_string(),
            latin_class: defaults::LATIN_CLASS.to_string(),
            boundary_class: defaults::BOUNDARY_CLASS.to_string(),
        }
    }
}

impl MarkupStyle {
    /// Class hook for a run of the given direction
    pub fn run_class(&self, direction: Direction) -> &str {
        match direction {
            Direction::Rtl => &self.rtl_class,
            Direction::Ltr => &self.latin_class,
        }
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// One unit of a mixed-string isolation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkupUnit {
    /// An isolated run
    Run(DirectionSpan),
    /// Structural delimiter between two runs; carries no text
    Boundary,
}

/// Presentation-ready representation of a string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "units", rename_all = "lowercase")]
pub enum Markup {
    /// Empty input
    #[default]
    Empty,
    /// Whole string in one direction
    Single(DirectionSpan),
    /// Isolated runs separated by boundary units
    Mixed(Vec<MarkupUnit>),
}

impl Markup {
    /// Isolated runs, in order, without boundaries
    pub fn runs(&self) -> Vec<&DirectionSpan> {
        match self {
            Markup::Empty => Vec::new(),
            Markup::Single(span) => vec![span],
            Markup::Mixed(units) => units
                .iter()
                .filter_map(|unit| match unit {
                    MarkupUnit::Run(span) => Some(span),
                    MarkupUnit::Boundary => None,
                })
                .collect(),
        }
    }

    /// Number of boundary units
    pub fn boundary_count(&self) -> usize {
        match self {
            Markup::Mixed(units) => units
                .iter()
                .filter(|unit| matches!(unit, MarkupUnit::Boundary))
                .count(),
            _ => 0,
        }
    }

    /// Text content without any markup
    pub fn text(&self) -> String {
        self.runs().into_iter().map(|span| span.text.as_str()).collect()
    }

    /// Serialize to HTML spans
    pub fn to_html(&self, style: &MarkupStyle) -> String {
        match self {
            Markup::Empty => String::new(),
            Markup::Single(span) => format!(
                "<span dir=\"{}\">{}</span>",
                span.direction,
                style.text(&span.text)
            ),
            Markup::Mixed(units) => {
                let mut html = format!("<span class=\"{}\">", style.container_class);
                for unit in units {
                    match unit {
                        MarkupUnit::Run(span) => {
                            html.push_str(&format!(
                                "<span class=\"{}\" dir=\"{}\">{}</span>",
                                style.run_class(span.direction),
                                span.direction,
                                style.text(&span.text)
                            ));
                        }
                        MarkupUnit::Boundary if style.boundary_markers => {
                            html.push_str(&format!(
                                "<span class=\"{}\"></span>",
                                style.boundary_class
                            ));
                        }
                        MarkupUnit::Boundary => {}
                    }
                }
                html.push_str("</span>");
                html
            }
        }
    }
}

/// Interleave runs with boundary units
pub fn isolate_segments(segments: &SegmentSequence) -> Vec<MarkupUnit> {
    let mut units = Vec::with_capacity(segments.len().saturating_mul(2));
    for (i, span) in segments.iter().enumerate() {
        if i > 0 {
            units.push(MarkupUnit::Boundary);
        }
        units.push(MarkupUnit::Run(span.clone()));
    }
    units
}

/// Wrap the whole string as one run, RTL iff it contains any Arabic
pub fn wrap_single_direction(text: &str) -> Markup {
    if text.is_empty() {
        return Markup::Empty;
    }
    Markup::Single(DirectionSpan::new(
        text,
        Direction::from_rtl(contains_rtl(text)),
    ))
}

/// Segment the string and isolate every run
pub fn wrap_mixed(text: &str) -> Markup {
    let segments = segment_by_direction(text);
    if segments.is_empty() {
        return Markup::Empty;
    }
    log::debug!(
        "isolated mixed text into {} runs ({} bytes)",
        segments.len(),
        text.len()
    );
    Markup::Mixed(isolate_segments(&segments))
}

/// Isolate mixed text, wrap everything else as a single run
pub fn wrap_mixed_content(text: &str) -> Markup {
    if classify(text).is_mixed() {
        wrap_mixed(text)
    } else {
        wrap_single_direction(text)
    }
}

/// Escape the HTML-significant characters of `text`.
///
/// `<`, `>`, `&` and `"` are replaced, which makes the result safe both as
/// element content and inside a double-quoted attribute.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    pulldown_cmark_escape::escape_html(&mut escaped, text)
        .expect("writing to a String cannot fail");
    Cow::Owned(escaped)
}
