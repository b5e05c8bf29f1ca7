//! Generate config command implementation

use super::parse_preset;
use anyhow::{Context, Result};
use clap::Args;
use langsift_core::Preset;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Preset whose thresholds the profile starts from
    #[arg(short, long, value_name = "PRESET", default_value = "default", value_parser = parse_preset)]
    pub preset: Preset,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating profile template...");
        println!("  Preset: {}", self.preset);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the lexicon, abbreviations or thresholds");
        println!("2. Validate your profile:");
        println!("   langsift validate -c {}", self.output.display());
        println!("3. Use it for counting:");
        println!("   langsift count -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Render the preset's full profile as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = self
            .preset
            .profile()
            .to_toml_string()
            .context("Failed to render profile")?;

        Ok(format!(
            "# langsift profile ({} preset)\n\
             #\n\
             # [words].vowel_table lists the allowed vowel counts per word length;\n\
             # longer words use the last row. [abbreviations] category names are\n\
             # free-form and matched case-insensitively; case_sensitive entries\n\
             # match verbatim.\n\n{}",
            self.preset, body
        ))
    }
}
