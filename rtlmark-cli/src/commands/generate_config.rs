//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

const HEADER: &str = "\
# rtlmark configuration
#
# [markup]       class hooks and escaping of the generated HTML
# [output]       default_format = text | json | html, default_unit = line | document
# [performance]  worker_threads = 0 uses every core
#
# Class names must be non-empty and contain no whitespace, quotes, '<', '>' or '&'.
";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the class hooks to match your stylesheet");
        println!("2. Validate your configuration:");
        println!("   rtlmark validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   rtlmark process -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Default configuration as commented TOML
fn generate_template() -> Result<String> {
    let body = toml::to_string_pretty(&CliConfig::default())
        .context("Failed to serialize default configuration")?;
    Ok(format!("{HEADER}\n{body}"))
}
