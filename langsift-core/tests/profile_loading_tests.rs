//! Profile files, presets and configuration building

use langsift_core::config::{default_profile, load_profile_file};
use langsift_core::{Detector, DetectorConfig, Error, Preset, ProfileConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_profile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SMALL_PROFILE: &str = r##"
[metadata]
name = "small"
description = "Tiny lexicon for tests"

[words]
forbidden_symbols = ["!", "#"]
vowel_table = [
    { length = 2, vowels = [1] },
    { length = 3, vowels = [1, 2] },
    { length = 4, vowels = [1, 2] },
    { length = 5, vowels = [1, 2, 3] },
]

[sentences]
min_words_per_sentence = 3

[lexicon]
stopwords = ["the", "a", "is"]
markers = ["sat", "is"]

[abbreviations]
custom = ["mrs."]
"##;

#[test]
fn test_load_external_profile() {
    let file = write_profile(SMALL_PROFILE);
    let profile = load_profile_file(file.path()).unwrap();

    assert_eq!(profile.metadata.name, "small");
    assert_eq!(profile.sentences.min_words_per_sentence, 3);
    assert_eq!(profile.sentences.max_words_per_sentence, 100);
    assert_eq!(profile.abbreviations.categories["custom"], vec!["mrs."]);
}

#[test]
fn test_detector_from_external_profile() {
    let file = write_profile(SMALL_PROFILE);
    let config = DetectorConfig::from_file(file.path()).unwrap();
    let detector = Detector::new(config).unwrap();

    // "the dog sat" passes only with this profile's lexicon and threshold
    assert_eq!(detector.count("the dog sat.").sentences, 1);
    assert_eq!(Detector::default().count("the dog sat.").sentences, 0);

    // lengths above the table clamp to its last row
    assert!(detector.config().vowel_table.allows(9, 2));
    assert!(!detector.config().vowel_table.allows(9, 4));
}

#[test]
fn test_builder_with_profile_file_and_preset() {
    let file = write_profile(SMALL_PROFILE);
    let config = DetectorConfig::builder()
        .profile_file(file.path())
        .preset(Preset::Strict)
        .build()
        .unwrap();

    assert_eq!(config.min_words_per_sentence, 5);
    assert_eq!(config.min_markers, 2);
    assert_eq!(config.stopwords.len(), 3);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_profile("[metadata\nname = ");
    let err = load_profile_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_zero_split_size_rejected() {
    let content = SMALL_PROFILE.replace(
        "min_words_per_sentence = 3",
        "min_words_per_sentence = 3\nsplit_sentences_on_n_words = 0",
    );
    let file = write_profile(&content);
    let err = DetectorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("split_sentences_on_n_words"));
}

#[test]
fn test_gapped_vowel_table_rejected() {
    let content = SMALL_PROFILE.replace("    { length = 3, vowels = [1, 2] },\n", "");
    let file = write_profile(&content);
    assert!(DetectorConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_profile_file() {
    let err = DetectorConfig::from_file(std::path::Path::new("/no/such/profile.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_generated_preset_profile_loads_back() {
    for preset in Preset::ALL {
        let rendered = preset.profile().to_toml_string().unwrap();
        let file = write_profile(&rendered);

        let config = DetectorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.thresholds(), preset.thresholds(), "{preset}");
        assert_eq!(
            config.stopwords.len(),
            DetectorConfig::default().stopwords.len()
        );
    }
}

#[test]
fn test_default_profile_builds_default_config() {
    let from_profile = DetectorConfig::from_profile(default_profile()).unwrap();
    let default = DetectorConfig::default();

    assert_eq!(from_profile.thresholds(), default.thresholds());
    assert_eq!(from_profile.markers.sorted(), default.markers.sorted());
    assert_eq!(
        from_profile.abbreviations.len(),
        default.abbreviations.len()
    );
}

#[test]
fn test_profile_parse_from_string() {
    let profile = ProfileConfig::from_toml_str(SMALL_PROFILE).unwrap();
    let config = DetectorConfig::from_profile(&profile).unwrap();
    assert!(config.abbreviations.contains("Mrs."));
    assert!(config.forbidden_symbols.contains('#'));
    assert!(!config.forbidden_symbols.contains('$'));
}
