//! Output formatting module

use anyhow::Result;
use rtlmark_core::Output;

use crate::error::CliError;

/// One analysed piece of input
#[derive(Debug, Clone, Copy)]
pub struct AnalyzedUnit<'a> {
    /// File name, or `<text>` for inline input
    pub source: &'a str,
    /// 1-based line number when analysing line by line
    pub line: Option<usize>,
    /// Analysis result
    pub output: &'a Output,
}

impl AnalyzedUnit<'_> {
    /// `source:line` or `source`
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.source, line),
            None => self.source.to_string(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single analysed unit
    fn format_unit(&mut self, unit: &AnalyzedUnit<'_>) -> Result<()>;

    /// Format and output a rendered markdown document
    fn format_document(&mut self, source: &str, _html: &str) -> Result<()> {
        Err(CliError::UnsupportedOutput(format!(
            "{source}: rendered markdown needs the html or json format"
        ))
        .into())
    }

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
