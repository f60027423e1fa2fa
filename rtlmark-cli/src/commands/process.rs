//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use rtlmark_core::{DirectionProcessor, Input, Output};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{AnalysisUnit, CliConfig, OutputFormat};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{AnalyzedUnit, HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

const INLINE_SOURCE: &str = "<text>";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyse this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Analysis unit [default: from config, else line]
    #[arg(short, long, value_enum)]
    pub unit: Option<AnalysisUnit>,

    /// Render each input as markdown to direction-aware HTML
    #[arg(short, long)]
    pub markdown: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads, 0 for one per core [default: from config]
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One input to analyse
#[derive(Debug)]
enum Source {
    Inline(String),
    File(PathBuf),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Source::Inline(_) => INLINE_SOURCE.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::File(path) => {
                if let Ok(size) = FileReader::file_size(path) {
                    log::debug!("reading {} ({} bytes)", path.display(), size);
                }
                FileReader::read_text(path)
            }
        }
    }
}

/// Analysis of one source, ready to be written in input order
#[derive(Debug)]
enum Analysis {
    Units {
        source: String,
        units: Vec<(Option<usize>, Output)>,
    },
    Document {
        source: String,
        html: String,
    },
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting direction analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let processor = DirectionProcessor::with_config(config.core_config()?)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let unit = self.unit.unwrap_or(config.output.default_unit);
        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        if self.markdown && format == OutputFormat::Text {
            return Err(CliError::UnsupportedOutput(
                "--markdown needs the html or json format".to_string(),
            )
            .into());
        }

        let sources = self.sources()?;
        log::info!(
            "Processing {} input(s) on {} worker thread(s)",
            sources.len(),
            threads
        );

        let mut progress = ProgressReporter::new(self.quiet || self.text.is_some());
        progress.init_files(sources.len() as u64);

        let analyses = run_parallel(threads, || {
            sources
                .par_iter()
                .map(|source| {
                    let analysis = self.analyze_source(&processor, source, unit);
                    progress.file_completed(&source.name());
                    analysis
                })
                .collect::<Vec<Result<Analysis>>>()
        })?;
        progress.finish();

        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        for analysis in analyses {
            match analysis? {
                Analysis::Units { source, units } => {
                    for (line, output) in &units {
                        formatter.format_unit(&AnalyzedUnit {
                            source: &source,
                            line: *line,
                            output,
                        })?;
                    }
                }
                Analysis::Document { source, html } => {
                    formatter.format_document(&source, &html)?;
                }
            }
        }
        formatter.finish()?;

        log::info!("Direction analysis complete");
        Ok(())
    }

    fn sources(&self) -> Result<Vec<Source>> {
        if let Some(text) = &self.text {
            return Ok(vec![Source::Inline(text.clone())]);
        }
        let files = resolve_patterns(&self.input)?;
        Ok(files.into_iter().map(Source::File).collect())
    }

    fn analyze_source(
        &self,
        processor: &DirectionProcessor,
        source: &Source,
        unit: AnalysisUnit,
    ) -> Result<Analysis> {
        let name = source.name();
        let text = source.read()?;

        if self.markdown {
            let html = processor
                .render_markdown(Input::from_text(text))
                .map_err(CliError::from)
                .with_context(|| format!("Failed to render {name}"))?;
            return Ok(Analysis::Document { source: name, html });
        }

        let units = match unit {
            AnalysisUnit::Line => text
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(index, line)| (Some(index + 1), processor.analyze(line)))
                .collect(),
            AnalysisUnit::Document => {
                let body = text.trim_end_matches(['\n', '\r']);
                vec![(None, processor.analyze(body))]
            }
        };
        log::debug!("{}: {} unit(s)", name, units.len());

        Ok(Analysis::Units {
            source: name,
            units,
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Run `job` on a dedicated pool of `threads` workers
fn run_parallel<T, F>(threads: usize, job: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build worker pool")?;
    Ok(pool.install(job))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> ProcessArgs {
        ProcessArgs {
            input: Vec::new(),
            text: None,
            output: None,
            format: None,
            unit: None,
            markdown: false,
            config: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_line_mode_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, "مرحبا\n\n   \nHello مرحبا\n").unwrap();

        let analysis = args()
            .analyze_source(
                &DirectionProcessor::new(),
                &Source::File(path),
                AnalysisUnit::Line,
            )
            .unwrap();

        match analysis {
            Analysis::Units { units, .. } => {
                let lines: Vec<_> = units.iter().map(|(line, _)| *line).collect();
                assert_eq!(lines, vec![Some(1), Some(4)]);
                assert!(units[1].1.is_mixed());
            }
            Analysis::Document { .. } => panic!("expected units"),
        }
    }

    #[test]
    fn test_document_mode_is_one_unit() {
        let analysis = args()
            .analyze_source(
                &DirectionProcessor::new(),
                &Source::Inline("سطر\nline\n".to_string()),
                AnalysisUnit::Document,
            )
            .unwrap();

        match analysis {
            Analysis::Units { source, units } => {
                assert_eq!(source, INLINE_SOURCE);
                assert_eq!(units.len(), 1);
                assert_eq!(units[0].0, None);
                assert_eq!(units[0].1.text(), "سطر\nline");
            }
            Analysis::Document { .. } => panic!("expected units"),
        }
    }

    #[test]
    fn test_markdown_source() {
        let mut process = args();
        process.markdown = true;
        let analysis = process
            .analyze_source(
                &DirectionProcessor::new(),
                &Source::Inline("# عنوان".to_string()),
                AnalysisUnit::Line,
            )
            .unwrap();

        match analysis {
            Analysis::Document { html, .. } => {
                assert_eq!(
                    html,
                    "<div dir=\"rtl\">\n<h1 class=\"rtl-paragraph\" dir=\"rtl\">عنوان</h1>\n</div>\n"
                );
            }
            Analysis::Units { .. } => panic!("expected a document"),
        }
    }

    #[test]
    fn test_markdown_rejects_text_format() {
        let mut process = args();
        process.text = Some("x".to_string());
        process.markdown = true;
        process.format = Some(OutputFormat::Text);
        let err = process.execute().unwrap_err();
        assert!(err.to_string().starts_with("Unsupported output:"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");

        let mut process = args();
        process.text = Some("مرحبا Hello".to_string());
        process.format = Some(OutputFormat::Json);
        process.output = Some(out.clone());
        process.threads = Some(2);
        process.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value[0]["verdict"], "mixed");
        assert_eq!(value[0]["line"], 1);
    }

    #[test]
    fn test_missing_input_fails() {
        let mut process = args();
        process.input = vec!["/nonexistent/*.txt".to_string()];
        assert!(process.execute().is_err());
    }

    #[test]
    fn test_run_parallel_with_pool() {
        let sum = run_parallel(2, || (1..=4).into_par_iter().sum::<i32>()).unwrap();
        assert_eq!(sum, 10);
    }
}
