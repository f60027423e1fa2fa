//! Configuration API for direction processing

use serde::{Deserialize, Serialize};

use crate::api::Error;
use crate::application::RenderStyle;
use crate::domain::MarkupStyle;

/// Processing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) style: RenderStyle,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Markup options for isolated runs
    pub fn markup_style(&self) -> &MarkupStyle {
        &self.style.markup
    }

    /// Block-level class hooks for markdown rendering
    pub fn render_style(&self) -> &RenderStyle {
        &self.style
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let classes = [
            ("container_class", &self.style.markup.container_class),
            ("rtl_class", &self.style.markup.rtl_class),
            ("latin_class", &self.style.markup.latin_class),
            ("boundary_class", &self.style.markup.boundary_class),
            ("mixed_block_class", &self.style.mixed_block_class),
            ("rtl_block_class", &self.style.rtl_block_class),
            ("rtl_list_class", &self.style.rtl_list_class),
            ("mixed_document_class", &self.style.mixed_document_class),
        ];

        for (name, value) in classes {
            if value.is_empty() {
                return Err(Error::Configuration(format!("{name} must not be empty")));
            }
            if let Some(bad) = value
                .chars()
                .find(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
            {
                return Err(Error::Configuration(format!(
                    "{name} contains invalid character {bad:?}: {value:?}"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    escape_html: Option<bool>,
    boundary_markers: Option<bool>,
    container_class: Option<String>,
    rtl_class: Option<String>,
    latin_class: Option<String>,
    boundary_class: Option<String>,
    mixed_block_class: Option<String>,
    rtl_block_class: Option<String>,
    rtl_list_class: Option<String>,
    wrap_document: Option<bool>,
    mixed_document_class: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape HTML-significant characters in run text
    pub fn escape_html(mut self, enabled: bool) -> Self {
        self.escape_html = Some(enabled);
        self
    }

    /// Emit boundary units between isolated runs
    pub fn boundary_markers(mut self, enabled: bool) -> Self {
        self.boundary_markers = Some(enabled);
        self
    }

    /// Set the class of the mixed-string wrapper
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    /// Set the class of RTL runs
    pub fn rtl_class(mut self, class: impl Into<String>) -> Self {
        self.rtl_class = Some(class.into());
        self
    }

    /// Set the class of LTR runs
    pub fn latin_class(mut self, class: impl Into<String>) -> Self {
        self.latin_class = Some(class.into());
        self
    }

    /// Set the class of boundary units
    pub fn boundary_class(mut self, class: impl Into<String>) -> Self {
        self.boundary_class = Some(class.into());
        self
    }

    /// Set the class of mixed markdown blocks
    pub fn mixed_block_class(mut self, class: impl Into<String>) -> Self {
        self.mixed_block_class = Some(class.into());
        self
    }

    /// Set the class of pure-RTL markdown blocks
    pub fn rtl_block_class(mut self, class: impl Into<String>) -> Self {
        self.rtl_block_class = Some(class.into());
        self
    }

    /// Set the class of markdown lists containing Arabic
    pub fn rtl_list_class(mut self, class: impl Into<String>) -> Self {
        self.rtl_list_class = Some(class.into());
        self
    }

    /// Wrap rendered markdown in a direction-carrying `<div>`
    pub fn wrap_document(mut self, enabled: bool) -> Self {
        self.wrap_document = Some(enabled);
        self
    }

    /// Set the class of the wrapper of a mixed markdown document
    pub fn mixed_document_class(mut self, class: impl Into<String>) -> Self {
        self.mixed_document_class = Some(class.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();
        let style = &mut config.style;

        if let Some(enabled) = self.escape_html {
            style.markup.escape_html = enabled;
        }
        if let Some(enabled) = self.boundary_markers {
            style.markup.boundary_markers = enabled;
        }
        if let Some(class) = self.container_class {
            style.markup.container_class = class;
        }
        if let Some(class) = self.rtl_class {
            style.markup.rtl_class = class;
        }
        if let Some(class) = self.latin_class {
            style.markup.latin_class = class;
        }
        if let Some(class) = self.boundary_class {
            style.markup.boundary_class = class;
        }
        if let Some(class) = self.mixed_block_class {
            style.mixed_block_class = class;
        }
        if let Some(class) = self.rtl_block_class {
            style.rtl_block_class = class;
        }
        if let Some(class) = self.rtl_list_class {
            style.rtl_list_class = class;
        }
        if let Some(enabled) = self.wrap_document {
            style.wrap_document = enabled;
        }
        if let Some(class) = self.mixed_document_class {
            style.mixed_document_class = class;
        }

        config.validate()?;
        Ok(config)
    }
}

impl From<RenderStyle> for ConfigBuilder {
    fn from(style: RenderStyle) -> Self {
        Self {
            escape_html: Some(style.markup.escape_html),
            boundary_markers: Some(style.markup.boundary_markers),
            container_class: Some(style.markup.container_class),
            rtl_class: Some(style.markup.rtl_class),
            latin_class: Some(style.markup.latin_class),
            boundary_class: Some(style.markup.boundary_class),
            mixed_block_class: Some(style.mixed_block_class),
            rtl_block_class: Some(style.rtl_block_class),
            rtl_list_class: Some(style.rtl_list_class),
            wrap_document: Some(style.wrap_document),
            mixed_document_class: Some(style.mixed_document_class),
        }
    }
}
