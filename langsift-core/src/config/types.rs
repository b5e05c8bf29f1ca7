//! Configuration structures and validation
//!
//! This module defines the TOML schema for detector profiles.

use super::defaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root profile configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub normalization: Normalization,
    pub words: Words,
    #[serde(default)]
    pub sentences: Sentences,
    pub lexicon: Lexicon,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Profile metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Text normalization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    #[serde(default = "default_dedupe_chars")]
    pub dedupe_chars: Vec<char>,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            dedupe_chars: default_dedupe_chars(),
        }
    }
}

/// Word validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Words {
    #[serde(default = "default_vowels")]
    pub vowels: Vec<char>,
    #[serde(default)]
    pub forbidden_symbols: Vec<char>,
    pub vowel_table: Vec<VowelEntry>,
}

/// One row of the vowel table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelEntry {
    pub length: usize,
    pub vowels: Vec<usize>,
}

/// Sentence segmentation and validity settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentences {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    #[serde(default = "default_min_words")]
    pub min_words_per_sentence: usize,
    #[serde(default = "default_max_words")]
    pub max_words_per_sentence: usize,
    #[serde(default = "default_split_words")]
    pub split_sentences_on_n_words: usize,
    #[serde(default = "default_min_markers")]
    pub min_markers: usize,
    #[serde(default = "default_min_stopwords")]
    pub min_stopwords: usize,
}

impl Default for Sentences {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            min_words_per_sentence: defaults::MIN_WORDS_PER_SENTENCE,
            max_words_per_sentence: defaults::MAX_WORDS_PER_SENTENCE,
            split_sentences_on_n_words: defaults::SPLIT_SENTENCES_ON_N_WORDS,
            min_markers: defaults::MIN_MARKERS,
            min_stopwords: defaults::MIN_STOPWORDS,
        }
    }
}

/// Stopword and marker-word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub stopwords: Vec<String>,
    pub markers: Vec<String>,
}

/// Abbreviation configuration
///
/// Category lists are matched case-insensitively; category names are
/// arbitrary. `case_sensitive` entries only match verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub case_sensitive: Vec<String>,
    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

fn default_dedupe_chars() -> Vec<char> {
    defaults::DEDUPE_CHARS.chars().collect()
}

fn default_vowels() -> Vec<char> {
    defaults::VOWELS.chars().collect()
}

fn default_terminators() -> Vec<char> {
    defaults::TERMINATORS.chars().collect()
}

fn default_min_words() -> usize {
    defaults::MIN_WORDS_PER_SENTENCE
}

fn default_max_words() -> usize {
    defaults::MAX_WORDS_PER_SENTENCE
}

fn default_split_words() -> usize {
    defaults::SPLIT_SENTENCES_ON_N_WORDS
}

fn default_min_markers() -> usize {
    defaults::MIN_MARKERS
}

fn default_min_stopwords() -> usize {
    defaults::MIN_STOPWORDS
}

impl ProfileConfig {
    /// Parse a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the profile as TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.name.trim().is_empty() {
            return Err("Profile name must not be empty".to_string());
        }

        if self.sentences.terminators.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.sentences.split_sentences_on_n_words == 0 {
            return Err("split_sentences_on_n_words must be greater than 0".to_string());
        }

        if self.sentences.max_words_per_sentence == 0 {
            return Err("max_words_per_sentence must be greater than 0".to_string());
        }

        if self.words.vowel_table.is_empty() {
            return Err("Vowel table must not be empty".to_string());
        }

        Ok(())
    }

    /// All case-insensitive abbreviations across categories
    pub fn abbreviation_entries(&self) -> impl Iterator<Item = &str> {
        self.abbreviations
            .categories
            .values()
            .flatten()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
name = "tiny"

[words]
vowel_table = [
    { length = 2, vowels = [1] },
    { length = 3, vowels = [1, 2] },
]

[lexicon]
stopwords = ["the"]
markers = ["is"]
"#;

    #[test]
    fn test_minimal_profile_uses_defaults() {
        let profile = ProfileConfig::from_toml_str(MINIMAL).unwrap();

        assert_eq!(profile.metadata.name, "tiny");
        assert_eq!(profile.sentences.min_words_per_sentence, 4);
        assert_eq!(profile.sentences.max_words_per_sentence, 100);
        assert_eq!(profile.sentences.split_sentences_on_n_words, 30);
        assert_eq!(profile.sentences.terminators, vec!['.', '!', '?']);
        assert_eq!(profile.normalization.dedupe_chars, vec![' ', '-', '–', '—']);
        assert_eq!(profile.words.vowels.len(), 6);
        assert!(profile.abbreviations.categories.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_abbreviation_categories_flatten() {
        let toml = format!(
            "{MINIMAL}\n[abbreviations]\ntitles = [\"dr.\", \"mr.\"]\ncase_sensitive = [\"VS.\"]\n"
        );
        let profile = ProfileConfig::from_toml_str(&toml).unwrap();

        assert_eq!(profile.abbreviations.case_sensitive, vec!["VS.".to_string()]);
        assert_eq!(profile.abbreviations.categories["titles"].len(), 2);
        let mut all: Vec<&str> = profile.abbreviation_entries().collect();
        all.sort_unstable();
        assert_eq!(all, vec!["dr.", "mr."]);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut profile = ProfileConfig::from_toml_str(MINIMAL).unwrap();
        profile.metadata.name = "  ".to_string();
        assert!(profile.validate().unwrap_err().contains("name"));
    }

    #[test]
    fn test_validate_rejects_zero_split() {
        let mut profile = ProfileConfig::from_toml_str(MINIMAL).unwrap();
        profile.sentences.split_sentences_on_n_words = 0;
        assert!(profile
            .validate()
            .unwrap_err()
            .contains("split_sentences_on_n_words"));
    }

    #[test]
    fn test_validate_rejects_missing_terminators() {
        let mut profile = ProfileConfig::from_toml_str(MINIMAL).unwrap();
        profile.sentences.terminators.clear();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_missing_lexicon_is_parse_error() {
        let toml = r#"
[metadata]
name = "broken"

[words]
vowel_table = []
"#;
        assert!(ProfileConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_schema() {
        let profile = ProfileConfig::from_toml_str(MINIMAL).unwrap();
        let rendered = profile.to_toml_string().unwrap();
        let reparsed = ProfileConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(profile, reparsed);
    }
}
