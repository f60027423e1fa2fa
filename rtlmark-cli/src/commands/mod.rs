//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::config::MarkupConfig;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify, segment and isolate mixed Arabic/Latin text
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the default markup class hooks
    Classes,
}

impl ListCommands {
    fn render(&self) -> String {
        match self {
            ListCommands::Formats => "Available output formats:\n\
                 \x20 text  - One header line per unit followed by its direction runs\n\
                 \x20 json  - JSON array of units with spans, markup and statistics\n\
                 \x20 html  - Direction-tagged HTML blocks\n"
                .to_string(),
            ListCommands::Classes => {
                let m = MarkupConfig::default();
                [
                    ("container_class", m.container_class),
                    ("rtl_class", m.rtl_class),
                    ("latin_class", m.latin_class),
                    ("boundary_class", m.boundary_class),
                    ("mixed_block_class", m.mixed_block_class),
                    ("rtl_block_class", m.rtl_block_class),
                    ("rtl_list_class", m.rtl_list_class),
                    ("mixed_document_class", m.mixed_document_class),
                ]
                .iter()
                .fold(
                    String::from("Default class hooks:\n"),
                    |mut out, (key, class)| {
                        out.push_str(&format!("  {key:<20} {class}\n"));
                        out
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Classes,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Classes"));
    }

    #[test]
    fn test_list_formats() {
        let text = ListCommands::Formats.render();
        for format in ["text", "json", "html"] {
            assert!(text.contains(&format!("  {format} ")));
        }
    }

    #[test]
    fn test_list_classes() {
        let text = ListCommands::Classes.render();
        assert!(text.contains("mixed-script-container"));
        assert!(text.contains("arabic-segment"));
        assert!(text.contains("latin-segment"));
        assert!(text.contains("script-boundary"));
        assert!(text.contains("mixed-content"));
        assert!(text.contains("rtl-paragraph"));
        assert!(text.contains("rtl-list"));
    }
}
