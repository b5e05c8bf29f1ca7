//! Detector configuration
//!
//! [`DetectorConfig`] is the single immutable value every pipeline stage
//! reads from. It is built from a TOML profile (the embedded default or an
//! external file), optionally adjusted by a [`Preset`] and individual
//! overrides through [`ConfigBuilder`].

pub mod loader;
pub mod types;

use crate::error::{Error, Result};
use crate::tables::{AbbreviationSet, CharSet, VowelTable, WordSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

pub use loader::{default_profile, load_profile_file, DEFAULT_PROFILE_NAME};
pub use types::ProfileConfig;

/// Default configuration constants
pub mod defaults {
    /// Sentences need a subject and a predicate
    pub const MIN_WORDS_PER_SENTENCE: usize = 4;

    /// Longer sentences are re-split
    pub const MAX_WORDS_PER_SENTENCE: usize = 100;

    /// Chunk size for re-splitting oversized sentences
    pub const SPLIT_SENTENCES_ON_N_WORDS: usize = 30;

    /// Minimum marker words (prepositions, common verbs) per sentence
    pub const MIN_MARKERS: usize = 1;

    /// Minimum stopwords per sentence
    pub const MIN_STOPWORDS: usize = 1;

    /// Characters whose immediate repeats collapse to one
    pub const DEDUPE_CHARS: &str = " -–—";

    /// Vowels, matched case-insensitively
    pub const VOWELS: &str = "aeiouy";

    /// Sentence-ending characters
    pub const TERMINATORS: &str = ".!?";
}

/// The three thresholds presets adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub min_words_per_sentence: usize,
    pub min_markers: usize,
    pub min_stopwords: usize,
}

/// Named strictness presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Balanced thresholds
    #[default]
    Default,
    /// Fewer false positives, rejects more terse sentences
    Strict,
    /// Admits terse three-word sentences
    Loose,
}

impl Preset {
    /// All presets in display order
    pub const ALL: [Preset; 3] = [Preset::Default, Preset::Strict, Preset::Loose];

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Strict => "strict",
            Preset::Loose => "loose",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Default => "4+ words, 1+ marker word, 1+ stopword per sentence",
            Preset::Strict => "5+ words, 2+ marker words, 2+ stopwords per sentence",
            Preset::Loose => "3+ words, no marker word needed, 1+ stopword per sentence",
        }
    }

    /// Thresholds this preset sets
    pub fn thresholds(&self) -> Thresholds {
        match self {
            Preset::Default => Thresholds {
                min_words_per_sentence: defaults::MIN_WORDS_PER_SENTENCE,
                min_markers: defaults::MIN_MARKERS,
                min_stopwords: defaults::MIN_STOPWORDS,
            },
            Preset::Strict => Thresholds {
                min_words_per_sentence: 5,
                min_markers: 2,
                min_stopwords: 2,
            },
            Preset::Loose => Thresholds {
                min_words_per_sentence: 3,
                min_markers: 0,
                min_stopwords: 1,
            },
        }
    }

    /// Overwrite the thresholds of a runtime configuration
    pub fn apply(&self, config: &mut DetectorConfig) {
        let t = self.thresholds();
        config.min_words_per_sentence = t.min_words_per_sentence;
        config.min_markers = t.min_markers;
        config.min_stopwords = t.min_stopwords;
    }

    /// The embedded default profile with this preset's thresholds
    pub fn profile(&self) -> ProfileConfig {
        let mut profile = default_profile().clone();
        let t = self.thresholds();
        profile.sentences.min_words_per_sentence = t.min_words_per_sentence;
        profile.sentences.min_markers = t.min_markers;
        profile.sentences.min_stopwords = t.min_stopwords;
        if *self != Preset::Default {
            profile.metadata.description =
                format!("{} ({} preset)", profile.metadata.description, self.name());
        }
        profile
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "balanced" => Ok(Preset::Default),
            "strict" => Ok(Preset::Strict),
            "loose" => Ok(Preset::Loose),
            _ => Err(Error::InvalidPreset(s.to_string())),
        }
    }
}

/// Runtime configuration shared by every pipeline stage
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Shortest acceptable sentence, after the terminator is stripped
    pub min_words_per_sentence: usize,
    /// Accepted sentences longer than this are re-split
    pub max_words_per_sentence: usize,
    /// Chunk size used when re-splitting
    pub split_sentences_on_n_words: usize,
    /// Minimum marker words per sentence
    pub min_markers: usize,
    /// Minimum stopwords per sentence (strictly exceeded by split chunks)
    pub min_stopwords: usize,
    /// Allowed vowel counts per word length
    pub vowel_table: VowelTable,
    /// Characters counted as vowels
    pub vowels: CharSet,
    /// High-frequency function words
    pub stopwords: WordSet,
    /// Prepositions and common verb forms
    pub markers: WordSet,
    /// Tokens that never end a sentence
    pub abbreviations: AbbreviationSet,
    /// Sentence-ending characters
    pub terminators: CharSet,
    /// Symbols not allowed inside a word
    pub forbidden_symbols: CharSet,
    /// Characters whose immediate repeats collapse to one
    pub dedupe_chars: CharSet,
}

static DEFAULT_CONFIG: OnceLock<DetectorConfig> = OnceLock::new();

impl Default for DetectorConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
            .get_or_init(|| {
                Self::from_profile(default_profile())
                    .expect("Failed to build configuration from embedded default profile")
            })
            .clone()
    }
}

impl DetectorConfig {
    /// Build runtime tables from a profile
    pub fn from_profile(profile: &ProfileConfig) -> Result<Self> {
        profile.validate().map_err(Error::Configuration)?;

        let vowel_table = VowelTable::new(
            profile
                .words
                .vowel_table
                .iter()
                .map(|entry| (entry.length, entry.vowels.iter().copied())),
        )
        .map_err(Error::Configuration)?;

        let config = Self {
            min_words_per_sentence: profile.sentences.min_words_per_sentence,
            max_words_per_sentence: profile.sentences.max_words_per_sentence,
            split_sentences_on_n_words: profile.sentences.split_sentences_on_n_words,
            min_markers: profile.sentences.min_markers,
            min_stopwords: profile.sentences.min_stopwords,
            vowel_table,
            vowels: CharSet::new(profile.words.vowels.iter().copied()),
            stopwords: WordSet::new(&profile.lexicon.stopwords),
            markers: WordSet::new(&profile.lexicon.markers),
            abbreviations: AbbreviationSet::new(
                profile.abbreviation_entries(),
                profile.abbreviations.case_sensitive.iter().cloned(),
            ),
            terminators: CharSet::new(profile.sentences.terminators.iter().copied()),
            forbidden_symbols: CharSet::new(profile.words.forbidden_symbols.iter().copied()),
            dedupe_chars: CharSet::new(profile.normalization.dedupe_chars.iter().copied()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load a profile file and build runtime tables from it
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_profile(&load_profile_file(path)?)
    }

    /// Default tables with the given preset's thresholds
    pub fn with_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        preset.apply(&mut config);
        config
    }

    /// Strict preset
    pub fn strict() -> Self {
        Self::with_preset(Preset::Strict)
    }

    /// Loose preset
    pub fn loose() -> Self {
        Self::with_preset(Preset::Loose)
    }

    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Thresholds currently in effect
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_words_per_sentence: self.min_words_per_sentence,
            min_markers: self.min_markers,
            min_stopwords: self.min_stopwords,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.split_sentences_on_n_words == 0 {
            return Err(Error::Configuration(
                "split_sentences_on_n_words must be greater than 0".into(),
            ));
        }

        if self.max_words_per_sentence == 0 {
            return Err(Error::Configuration(
                "max_words_per_sentence must be greater than 0".into(),
            ));
        }

        if self.terminators.is_empty() {
            return Err(Error::Configuration(
                "at least one terminator character is required".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    profile: Option<ProfileConfig>,
    profile_path: Option<PathBuf>,
    preset: Option<Preset>,
    min_words_per_sentence: Option<usize>,
    max_words_per_sentence: Option<usize>,
    split_sentences_on_n_words: Option<usize>,
    min_markers: Option<usize>,
    min_stopwords: Option<usize>,
    abbreviations: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an in-memory profile instead of the embedded default
    pub fn profile(mut self, profile: ProfileConfig) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Start from a profile file instead of the embedded default
    pub fn profile_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    /// Apply a preset's thresholds on top of the profile
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Set the preset by name
    pub fn preset_name(self, name: &str) -> Result<Self> {
        let preset = Preset::from_str(name)?;
        Ok(self.preset(preset))
    }

    /// Override the minimum sentence length
    pub fn min_words_per_sentence(mut self, words: usize) -> Self {
        self.min_words_per_sentence = Some(words);
        self
    }

    /// Override the oversize threshold
    pub fn max_words_per_sentence(mut self, words: usize) -> Self {
        self.max_words_per_sentence = Some(words);
        self
    }

    /// Override the re-split chunk size
    pub fn split_sentences_on_n_words(mut self, words: usize) -> Self {
        self.split_sentences_on_n_words = Some(words);
        self
    }

    /// Override the minimum marker-word count
    pub fn min_markers(mut self, count: usize) -> Self {
        self.min_markers = Some(count);
        self
    }

    /// Override the minimum stopword count
    pub fn min_stopwords(mut self, count: usize) -> Self {
        self.min_stopwords = Some(count);
        self
    }

    /// Add a case-insensitive abbreviation
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviations.push(abbreviation.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DetectorConfig> {
        let mut config = match (self.profile, self.profile_path) {
            (Some(profile), _) => DetectorConfig::from_profile(&profile)?,
            (None, Some(path)) => DetectorConfig::from_file(&path)?,
            (None, None) => DetectorConfig::default(),
        };

        if let Some(preset) = self.preset {
            preset.apply(&mut config);
        }

        if let Some(words) = self.min_words_per_sentence {
            config.min_words_per_sentence = words;
        }
        if let Some(words) = self.max_words_per_sentence {
            config.max_words_per_sentence = words;
        }
        if let Some(words) = self.split_sentences_on_n_words {
            config.split_sentences_on_n_words = words;
        }
        if let Some(count) = self.min_markers {
            config.min_markers = count;
        }
        if let Some(count) = self.min_stopwords {
            config.min_stopwords = count;
        }
        for abbreviation in &self.abbreviations {
            config.abbreviations.insert(abbreviation);
        }

        config.validate()?;
        Ok(config)
    }
}
