//! JSON output formatter

use super::{AnalyzedUnit, OutputFormatter};
use anyhow::Result;
use rtlmark_core::{Direction, MixedContentVerdict, ProcessingStats, SegmentSequence};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs units and documents as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<Entry>,
}

/// Data structure for an analysed unit
#[derive(Debug, Serialize)]
pub struct UnitData {
    /// Input the unit came from
    pub source: String,
    /// 1-based line number, absent for whole documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Unit text
    pub text: String,
    /// Whole-unit verdict
    pub verdict: MixedContentVerdict,
    /// Whole-unit direction
    pub direction: Direction,
    /// Same-direction runs
    pub spans: SegmentSequence,
    /// Isolation markup
    pub html: String,
    /// Character statistics
    pub stats: ProcessingStats,
}

/// Data structure for a rendered markdown document
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Input the document came from
    pub source: String,
    /// Rendered HTML
    pub html: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Entry {
    Unit(UnitData),
    Document(DocumentData),
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_unit(&mut self, unit: &AnalyzedUnit<'_>) -> Result<()> {
        let output = unit.output;
        self.entries.push(Entry::Unit(UnitData {
            source: unit.source.to_string(),
            line: unit.line,
            text: output.text(),
            verdict: output.verdict,
            direction: output.direction,
            spans: output.spans.clone(),
            html: output.html.clone(),
            stats: output.metadata.stats.clone(),
        }));
        Ok(())
    }

    fn format_document(&mut self, source: &str, html: &str) -> Result<()> {
        self.entries.push(Entry::Document(DocumentData {
            source: source.to_string(),
            html: html.to_string(),
        }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtlmark_core::DirectionProcessor;

    #[test]
    fn test_json_units() {
        let output = DirectionProcessor::new().analyze("Hi سلام");
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_unit(&AnalyzedUnit {
                    source: "<text>",
                    line: None,
                    output: &output,
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let unit = &value[0];
        assert_eq!(unit["source"], "<text>");
        assert!(unit.get("line").is_none());
        assert_eq!(unit["verdict"], "mixed");
        assert_eq!(unit["direction"], "rtl");
        assert_eq!(unit["spans"].as_array().unwrap().len(), 2);
        assert_eq!(unit["stats"]["rtl_chars"], 4);
    }

    #[test]
    fn test_json_documents() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.format_document("a.md", "<p dir=\"ltr\">a</p>\n").unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["source"], "a.md");
        assert_eq!(value[0]["html"], "<p dir=\"ltr\">a</p>\n");
    }
}
