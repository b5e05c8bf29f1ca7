//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use langsift_core::Preset;

pub mod count;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count plausible words and sentences in text files
    Count(count::CountArgs),

    /// Validate a profile file
    Validate(validate::ValidateArgs),

    /// Write a complete profile file for a preset
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List strictness presets
    Presets,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Count(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Presets => Preset::ALL
                .iter()
                .map(|p| format!("{:<10}{}", p.name(), p.description()))
                .collect(),
            ListCommands::Formats => vec![
                format!("{:<10}{}", "text", "Tab-separated source, words, sentences, verdict"),
                format!("{:<10}{}", "json", "JSON array of records"),
                format!("{:<10}{}", "markdown", "Markdown table with totals"),
            ],
        }
    }

    fn execute(&self) {
        for line in self.entries() {
            println!("{line}");
        }
    }
}

/// Parse a preset name for clap
pub(crate) fn parse_preset(name: &str) -> Result<Preset, String> {
    name.parse::<Preset>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_presets() {
        let entries = ListCommands::Presets.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].starts_with("default"));
        assert!(entries[1].starts_with("strict"));
        assert!(entries[2].starts_with("loose"));
    }

    #[test]
    fn test_list_formats() {
        let entries = ListCommands::Formats.entries();
        assert!(entries.iter().any(|e| e.starts_with("markdown")));
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!(parse_preset("STRICT"), Ok(Preset::Strict));
        assert_eq!(parse_preset("balanced"), Ok(Preset::Default));
        assert!(parse_preset("lenient").unwrap_err().contains("lenient"));
    }
}
