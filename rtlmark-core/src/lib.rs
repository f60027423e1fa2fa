//! Direction classification and isolation for mixed Arabic/Latin text
//!
//! This crate decides whether text is right-to-left, left-to-right or a mix
//! of both, splits mixed text into maximal same-direction runs, and produces
//! presentation-ready markup that carries an explicit direction per run and
//! a boundary unit at every script change.
//!
//! # Architecture
//!
//! - **Domain layer**: pure script classification, segmentation, isolation
//!   and numeral formatting
//! - **Application layer**: per-document direction state with observers,
//!   and direction-aware markdown rendering
//! - **API layer**: a single [`DirectionProcessor`] facade over any input
//!
//! # Example
//!
//! ```rust
//! use rtlmark_core::{classify, segment_by_direction, wrap_mixed_content};
//! use rtlmark_core::{MarkupStyle, MixedContentVerdict};
//!
//! let text = "مرحبا Hello";
//! assert_eq!(classify(text), MixedContentVerdict::Mixed);
//!
//! let spans = segment_by_direction(text);
//! assert_eq!(spans.concat(), text);
//!
//! let html = wrap_mixed_content(text).to_html(&MarkupStyle::default());
//! assert!(html.contains("script-boundary"));
//! ```

pub mod api;
pub mod application;
pub mod domain;

pub use api::{
    Config, ConfigBuilder, DirectionProcessor, Error as ApiError, Input, Output,
    ProcessingMetadata, ProcessingStats,
};
pub use application::{
    render_markdown, DirectionChange, DirectionNotifier, RenderStyle, Subscription,
};
pub use domain::*;
