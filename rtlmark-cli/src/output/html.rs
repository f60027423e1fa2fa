//! HTML output formatter

use super::{AnalyzedUnit, OutputFormatter};
use anyhow::Result;
use rtlmark_core::escape_html;
use std::io::Write;

/// HTML formatter - one direction-tagged block per unit or document
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_unit(&mut self, unit: &AnalyzedUnit<'_>) -> Result<()> {
        write!(
            self.writer,
            "<div dir=\"{}\" data-source=\"{}\"",
            unit.output.direction,
            escape_html(unit.source)
        )?;
        if let Some(line) = unit.line {
            write!(self.writer, " data-line=\"{line}\"")?;
        }
        writeln!(self.writer, ">{}</div>", unit.output.html)?;
        Ok(())
    }

    fn format_document(&mut self, source: &str, html: &str) -> Result<()> {
        writeln!(
            self.writer,
            "<article data-source=\"{}\">\n{}</article>",
            escape_html(source),
            html
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtlmark_core::DirectionProcessor;

    #[test]
    fn test_unit_block() {
        let output = DirectionProcessor::new().analyze("مرحبا");
        let mut buffer = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut buffer);
            formatter
                .format_unit(&AnalyzedUnit {
                    source: "a&b.txt",
                    line: Some(1),
                    output: &output,
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<div dir=\"rtl\" data-source=\"a&amp;b.txt\" data-line=\"1\"><span dir=\"rtl\">مرحبا</span></div>\n"
        );
    }

    #[test]
    fn test_document_block() {
        let mut buffer = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut buffer);
            formatter.format_document("doc.md", "<p dir=\"ltr\">x</p>\n").unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<article data-source=\"doc.md\">\n<p dir=\"ltr\">x</p>\n</article>\n"
        );
    }
}
