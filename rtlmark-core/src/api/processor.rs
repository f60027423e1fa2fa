//! Main direction processor implementation

use std::io::Read;
use std::time::Instant;

use crate::api::output::{ProcessingMetadata, ProcessingStats};
use crate::api::{Config, Error, Input, Output};
use crate::application::render_markdown;
use crate::domain::{classify, segment_by_direction, wrap_mixed_content};

/// Unified direction processor with clean API
#[derive(Debug, Clone, Default)]
pub struct DirectionProcessor {
    config: Config,
}

impl DirectionProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyse a string: verdict, spans and isolation markup
    pub fn analyze(&self, text: &str) -> Output {
        let start = Instant::now();

        let verdict = classify(text);
        let spans = segment_by_direction(text);
        let markup = wrap_mixed_content(text);
        let html = markup.to_html(self.config.markup_style());
        let stats = ProcessingStats::collect(text, &spans, &markup);

        Output {
            verdict,
            direction: verdict.direction(),
            spans,
            markup,
            html,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                stats,
            },
        }
    }

    /// Process input as a single piece of text
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        log::debug!("processing {}", input.describe());
        let text = input.into_text()?;
        Ok(self.analyze(&text))
    }

    /// Process every line of the input separately
    pub fn process_lines(&self, input: Input) -> Result<Vec<Output>, Error> {
        log::debug!("processing {} line by line", input.describe());
        let text = input.into_text()?;
        let outputs: Vec<Output> = text.lines().map(|line| self.analyze(line)).collect();
        log::debug!("analysed {} lines", outputs.len());
        Ok(outputs)
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Render markdown input to direction-aware HTML
    pub fn render_markdown(&self, input: Input) -> Result<String, Error> {
        let text = input.into_text()?;
        Ok(render_markdown(&text, self.config.render_style()))
    }

    /// Isolation markup of `text` as HTML
    pub fn wrap(&self, text: &str) -> String {
        wrap_mixed_content(text).to_html(self.config.markup_style())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
