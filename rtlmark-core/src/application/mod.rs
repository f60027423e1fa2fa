//! Application layer
//!
//! Stateful and document-level services built on the pure domain functions:
//! per-document direction tracking with observers, and markdown rendering
//! through uniform node-type handlers.

pub mod notifier;
pub mod render;

pub use notifier::{DirectionChange, DirectionNotifier, Subscription};
pub use render::{render_markdown, RenderStyle};
