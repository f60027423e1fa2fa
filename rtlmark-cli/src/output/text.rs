//! Plain text output formatter

use super::{AnalyzedUnit, OutputFormatter};
use anyhow::Result;
use rtlmark_core::MixedContentVerdict;
use std::io::Write;

/// Plain text formatter - one header line per unit, one line per span
pub struct TextFormatter<W: Write> {
    writer: W,
    pure_rtl: usize,
    pure_ltr: usize,
    mixed: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pure_rtl: 0,
            pure_ltr: 0,
            mixed: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_unit(&mut self, unit: &AnalyzedUnit<'_>) -> Result<()> {
        let output = unit.output;
        match output.verdict {
            MixedContentVerdict::PureRtl => self.pure_rtl += 1,
            MixedContentVerdict::PureLtr => self.pure_ltr += 1,
            MixedContentVerdict::Mixed => self.mixed += 1,
        }

        writeln!(
            self.writer,
            "{} {} {}",
            unit.location(),
            output.verdict,
            output.direction
        )?;
        for span in output.spans.iter() {
            writeln!(self.writer, "  {} \"{}\"", span.direction, quote(&span.text))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let total = self.pure_rtl + self.pure_ltr + self.mixed;
        if total > 0 {
            writeln!(self.writer, "---")?;
            writeln!(
                self.writer,
                "{} units: {} pure_rtl, {} pure_ltr, {} mixed",
                total, self.pure_rtl, self.pure_ltr, self.mixed
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape quotes and line breaks; leaves Arabic marks untouched
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
