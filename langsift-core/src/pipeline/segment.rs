//! Sentence segmentation over validated tokens
//!
//! Tokens are grouped left to right. A token closes the current group when
//! it ends in a terminator character and is not a known abbreviation; it is
//! then split into its word part and a one-character punctuation token.

use crate::config::DetectorConfig;
use smallvec::SmallVec;

/// Terminator appended to a trailing group that never saw one
pub const SYNTHETIC_TERMINATOR: &str = ".";

/// Inline capacity for sentence token lists
///
/// Sentences in running prose have a median of 19 words and a 75th
/// percentile of 30, so most candidates never spill to the heap.
pub const INLINE_TOKENS: usize = 32;

/// Ordered tokens of one sentence, borrowed from the normalized text
pub type Tokens<'a> = SmallVec<[&'a str; INLINE_TOKENS]>;

/// Whether this token ends a sentence
#[inline]
pub fn ends_sentence(token: &str, config: &DetectorConfig) -> bool {
    token
        .chars()
        .next_back()
        .is_some_and(|ch| config.terminators.contains(ch))
        && !config.abbreviations.contains(token)
}

/// Group tokens into raw, terminator-ended sentence candidates
pub fn segment<'a>(tokens: &[&'a str], config: &DetectorConfig) -> Vec<Tokens<'a>> {
    let mut sentences = Vec::new();
    let mut current = Tokens::new();

    for &token in tokens {
        if ends_sentence(token, config) {
            // ends_sentence guarantees a last character
            let split_at = token.char_indices().next_back().map_or(0, |(i, _)| i);
            let (word_part, punct_part) = token.split_at(split_at);

            if !word_part.is_empty() {
                current.push(word_part);
            }
            current.push(punct_part);
            sentences.push(std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }

    if !current.is_empty() {
        current.push(SYNTHETIC_TERMINATOR);
        sentences.push(current);
    }

    sentences
}
