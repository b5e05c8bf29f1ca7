//! Validate command implementation

use anyhow::Result;
use clap::Args;
use langsift_core::config::load_profile_file;
use langsift_core::DetectorConfig;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the profile file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating profile: {}", self.config.display());

        let loaded = load_profile_file(&self.config)
            .and_then(|profile| DetectorConfig::from_profile(&profile).map(|c| (profile, c)));

        match loaded {
            Ok((profile, config)) => {
                println!("✓ Profile is valid!");
                println!("  Name: {}", profile.metadata.name);
                if !profile.metadata.description.is_empty() {
                    println!("  Description: {}", profile.metadata.description);
                }
                println!(
                    "  Word lengths: {}..={}",
                    config.vowel_table.min_len(),
                    config.vowel_table.max_len()
                );
                println!(
                    "  Lexicon: {} stopwords, {} markers, {} abbreviations",
                    config.stopwords.len(),
                    config.markers.len(),
                    config.abbreviations.len()
                );
                println!(
                    "  Sentences: {}+ words, {}+ markers, {}+ stopwords, split above {} into {}",
                    config.min_words_per_sentence,
                    config.min_markers,
                    config.min_stopwords,
                    config.max_words_per_sentence,
                    config.split_sentences_on_n_words
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
