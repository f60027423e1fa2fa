//! rtlmark command-line entry point

use clap::Parser;
use rtlmark_cli::commands::Commands;

/// Direction analysis and isolation for mixed Arabic/Latin text
#[derive(Debug, Parser)]
#[command(name = "rtlmark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::try_parse_from(["rtlmark", "process", "-t", "مرحبا", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Process(_)));
    }
}
