//! Unified API for rtlmark-core
//!
//! This module provides one entry point for analysing, isolating and
//! rendering text from any source, shared by the CLI and library users.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::DirectionProcessor;
