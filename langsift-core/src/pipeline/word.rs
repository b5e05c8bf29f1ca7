//! Word validation
//!
//! A token is a plausible word when no forbidden symbol sits inside it and
//! its vowel count falls in the observed band for its length. Bookending
//! punctuation is tolerated: `ok!` and `(fine)` pass, `o!#K` does not.

use crate::config::DetectorConfig;
use crate::tables::CharSet;

/// Whether a token plausibly is an English word
pub fn is_valid_word(token: &str, config: &DetectorConfig) -> bool {
    has_clean_interior(token, &config.forbidden_symbols) && has_plausible_vowels(token, config)
}

/// Forbidden symbols may only appear as the first or last character
///
/// Tokens shorter than three characters have no interior, so every
/// character is checked.
pub fn has_clean_interior(token: &str, forbidden: &CharSet) -> bool {
    let length = token.chars().count();
    if length == 0 {
        return false;
    }

    if length >= 3 {
        !token
            .chars()
            .skip(1)
            .take(length - 2)
            .any(|ch| forbidden.contains(ch))
    } else {
        !token.chars().any(|ch| forbidden.contains(ch))
    }
}

/// Vowel count must be allowed for the token's length
pub fn has_plausible_vowels(token: &str, config: &DetectorConfig) -> bool {
    let mut length = 0;
    let mut vowels = 0;
    for ch in token.chars() {
        length += 1;
        if config.vowels.contains_ignore_ascii_case(ch) {
            vowels += 1;
        }
    }
    config.vowel_table.allows(length, vowels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(token: &str) -> bool {
        is_valid_word(token, &DetectorConfig::default())
    }

    #[test]
    fn test_common_words() {
        for word in ["the", "cat", "sits", "on", "mat.", "Washington.", "hello", "time!"] {
            assert!(valid(word), "{word} should be valid");
        }
    }

    #[test]
    fn test_empty_and_single_characters() {
        assert!(!valid(""));
        assert!(!valid("a"));
        assert!(!valid("I"));
        assert!(!valid("x"));
        assert!(!valid("."));
    }

    #[test]
    fn test_vowel_starved_and_saturated() {
        assert!(!valid("Mr."));
        assert!(!valid("psst"));
        assert!(!valid("xkcdqwrtp"));
        assert!(!valid("aeiou"));
        assert!(!valid("ee"));
    }

    #[test]
    fn test_symbol_only_tokens() {
        assert!(!valid("!!!"));
        assert!(!valid("$$$"));
        assert!(!valid("@#"));
    }

    #[test]
    fn test_interior_symbols_rejected() {
        let config = DetectorConfig::default();
        assert!(!has_clean_interior("f!ne", &config.forbidden_symbols));
        assert!(!has_clean_interior("fraud@crypto", &config.forbidden_symbols));
        assert!(!has_clean_interior("B!!!est", &config.forbidden_symbols));
        assert!(!valid("o!#K"));
    }

    #[test]
    fn test_bookending_symbols_tolerated() {
        let config = DetectorConfig::default();
        assert!(has_clean_interior("ok!", &config.forbidden_symbols));
        assert!(has_clean_interior("*note*", &config.forbidden_symbols));
        assert!(has_clean_interior("(fine)", &config.forbidden_symbols));
        assert!(valid("(fine)"));
    }

    #[test]
    fn test_parentheses_are_not_forbidden() {
        let config = DetectorConfig::default();
        assert!(has_clean_interior("f(n)e", &config.forbidden_symbols));
    }

    #[test]
    fn test_short_tokens_check_every_character() {
        let config = DetectorConfig::default();
        assert!(!has_clean_interior("a!", &config.forbidden_symbols));
        assert!(!has_clean_interior("$", &config.forbidden_symbols));
        assert!(has_clean_interior("an", &config.forbidden_symbols));
    }

    #[test]
    fn test_vowels_case_insensitive_including_y() {
        assert!(valid("rhythm"));
        assert!(valid("MY"));
        assert!(valid("By"));
        assert!(valid("HELLO"));
    }

    #[test]
    fn test_long_words_use_last_rule() {
        // 28 letters, 11 vowels: over the 18-letter band of 6..=8
        assert!(!valid("antidisestablishmentarianism"));
        // 20 letters, 7 vowels
        assert!(valid("characteristicalness"));
    }

    #[test]
    fn test_non_ascii_letters_count_toward_length() {
        assert!(valid("naïve"));
        assert!(!valid("日本語"));
    }
}
