//! Sentence validity filtering and oversize re-splitting
//!
//! A candidate is accepted when it is long enough and carries enough marker
//! words and stopwords. Accepted candidates over the size limit are cut into
//! fixed-size chunks and every chunk is judged again, with a stricter
//! stopword rule: a chunk must exceed the stopword minimum, not just meet it.

use super::segment::{Tokens, SYNTHETIC_TERMINATOR};
use crate::config::DetectorConfig;

/// Which rule set a token run is judged by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// A whole sentence: stopwords must meet the minimum
    Whole,
    /// A chunk of a re-split sentence: stopwords must exceed the minimum
    Fragment,
}

/// Signal counts for a run of tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceStats {
    pub words: usize,
    pub markers: usize,
    pub stopwords: usize,
}

impl SentenceStats {
    /// Count words, marker words and stopwords
    pub fn measure(tokens: &[&str], config: &DetectorConfig) -> Self {
        let mut stats = Self {
            words: tokens.len(),
            ..Self::default()
        };
        for token in tokens {
            if config.markers.contains_ignore_case(token) {
                stats.markers += 1;
            }
            if config.stopwords.contains_ignore_case(token) {
                stats.stopwords += 1;
            }
        }
        stats
    }

    /// Whether these counts pass the thresholds for the given tier
    pub fn passes(&self, config: &DetectorConfig, tier: Tier) -> bool {
        let enough_stopwords = match tier {
            Tier::Whole => self.stopwords >= config.min_stopwords,
            Tier::Fragment => self.stopwords > config.min_stopwords,
        };

        self.words >= config.min_words_per_sentence
            && self.markers >= config.min_markers
            && enough_stopwords
    }

    /// Share of words that are stopwords
    pub fn stopword_ratio(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.stopwords as f64 / self.words as f64
        }
    }
}

/// A sentence that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSentence<'a> {
    pub tokens: Tokens<'a>,
    pub stats: SentenceStats,
    /// True when this is a chunk of a re-split oversized sentence
    pub from_split: bool,
}

/// Whether a token is a bare terminator
#[inline]
fn is_terminal_token(token: &str, config: &DetectorConfig) -> bool {
    if token == SYNTHETIC_TERMINATOR {
        return true;
    }
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if config.terminators.contains(ch))
}

/// Drop one trailing bare terminator so it is not counted as a word
pub fn strip_terminal<'r, 'a>(tokens: &'r [&'a str], config: &DetectorConfig) -> &'r [&'a str] {
    match tokens.split_last() {
        Some((last, rest)) if is_terminal_token(last, config) => rest,
        _ => tokens,
    }
}

/// Cut an oversized sentence into chunks of `chunk_words` tokens
///
/// The last chunk may be shorter. A zero chunk size leaves the sentence as
/// a single unsplit unit.
pub fn split_oversized<'r, 'a>(tokens: &'r [&'a str], chunk_words: usize) -> Vec<&'r [&'a str]> {
    if chunk_words == 0 {
        log::warn!(
            "Chunk size is 0; keeping oversized sentence of {} words unsplit",
            tokens.len()
        );
        return vec![tokens];
    }
    tokens.chunks(chunk_words).collect()
}

/// Judge one raw candidate, returning zero or more accepted sentences
pub fn validate_and_split<'a>(
    raw_sentence: &[&'a str],
    config: &DetectorConfig,
) -> Vec<AcceptedSentence<'a>> {
    let words = strip_terminal(raw_sentence, config);
    let stats = SentenceStats::measure(words, config);

    if !stats.passes(config, Tier::Whole) {
        log::trace!(
            "Rejected candidate ({} words, {} markers, {} stopwords): {}",
            stats.words,
            stats.markers,
            stats.stopwords,
            words.join(" ")
        );
        return Vec::new();
    }

    if words.len() <= config.max_words_per_sentence {
        return vec![AcceptedSentence {
            tokens: Tokens::from_slice(words),
            stats,
            from_split: false,
        }];
    }

    log::debug!(
        "Splitting {}-word sentence into {}-word chunks",
        words.len(),
        config.split_sentences_on_n_words
    );

    split_oversized(words, config.split_sentences_on_n_words)
        .into_iter()
        .filter_map(|chunk| {
            let chunk_stats = SentenceStats::measure(chunk, config);
            if chunk_stats.passes(config, Tier::Fragment) {
                Some(AcceptedSentence {
                    tokens: Tokens::from_slice(chunk),
                    stats: chunk_stats,
                    from_split: true,
                })
            } else {
                log::trace!(
                    "Dropped chunk ({} words, {} markers, {} stopwords)",
                    chunk_stats.words,
                    chunk_stats.markers,
                    chunk_stats.stopwords
                );
                None
            }
        })
        .collect()
}
