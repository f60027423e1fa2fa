//! Configuration module

use anyhow::{Context, Result};
use clap::ValueEnum;
use rtlmark_core::application::render::defaults as block_defaults;
use rtlmark_core::domain::isolate::defaults as run_defaults;
use rtlmark_core::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Markup configuration
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.core_config()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the validated core configuration
    pub fn core_config(&self) -> Result<Config, CliError> {
        let m = &self.markup;
        Config::builder()
            .escape_html(m.escape_html)
            .boundary_markers(m.boundary_markers)
            .container_class(&m.container_class)
            .rtl_class(&m.rtl_class)
            .latin_class(&m.latin_class)
            .boundary_class(&m.boundary_class)
            .mixed_block_class(&m.mixed_block_class)
            .rtl_block_class(&m.rtl_block_class)
            .rtl_list_class(&m.rtl_list_class)
            .wrap_document(m.wrap_document)
            .mixed_document_class(&m.mixed_document_class)
            .build()
            .map_err(CliError::from)
    }
}

/// Markup-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MarkupConfig {
    /// Escape HTML-significant characters in text
    pub escape_html: bool,
    /// Emit a boundary span between runs of different direction
    pub boundary_markers: bool,
    /// Wrapper class of mixed strings
    pub container_class: String,
    /// Class of Arabic runs
    pub rtl_class: String,
    /// Class of non-Arabic runs
    pub latin_class: String,
    /// Class of boundary spans
    pub boundary_class: String,
    /// Class of mixed markdown blocks
    pub mixed_block_class: String,
    /// Class of pure-Arabic markdown blocks
    pub rtl_block_class: String,
    /// Class of markdown lists containing Arabic
    pub rtl_list_class: String,
    /// Wrap rendered markdown in a direction-carrying `<div>`
    pub wrap_document: bool,
    /// Class of the wrapper of a mixed markdown document
    pub mixed_document_class: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            boundary_markers: true,
            container_class: run_defaults::CONTAINER_CLASS.to_string(),
            rtl_class: run_defaults::RTL_CLASS.to_string(),
            latin_class: run_defaults::LATIN_CLASS.to_string(),
            boundary_class: run_defaults::BOUNDARY_CLASS.to_string(),
            mixed_block_class: block_defaults::MIXED_BLOCK_CLASS.to_string(),
            rtl_block_class: block_defaults::RTL_BLOCK_CLASS.to_string(),
            rtl_list_class: block_defaults::RTL_LIST_CLASS.to_string(),
            wrap_document: true,
            mixed_document_class: block_defaults::MIXED_DOCUMENT_CLASS.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Default analysis unit
    pub default_unit: AnalysisUnit,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            default_unit: AnalysisUnit::Line,
            pretty_json: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One header line per unit followed by its direction runs
    Text,
    /// JSON array of units with spans, markup and statistics
    Json,
    /// Direction-tagged HTML blocks
    Html,
}

/// How input text is split before analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisUnit {
    /// Every non-blank line on its own
    Line,
    /// Each input as a whole
    Document,
}

/// Performance-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}
