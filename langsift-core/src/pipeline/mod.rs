//! The filtering pipeline
//!
//! Stages run in a fixed order, each reading the shared [`DetectorConfig`]:
//!
//! 1. [`normalize`] and [`tokenize`] raw text
//! 2. keep tokens passing [`is_valid_word`]
//! 3. [`segment`] valid words into sentence candidates
//! 4. [`validate_and_split`] each candidate
//!
//! Every stage is total over its input and never fails.
//!
//! [`DetectorConfig`]: crate::config::DetectorConfig

pub mod normalize;
pub mod segment;
pub mod sentence;
pub mod word;

pub use normalize::{normalize, normalize_and_tokenize, tokenize};
pub use segment::{ends_sentence, segment, Tokens, SYNTHETIC_TERMINATOR};
pub use sentence::{
    split_oversized, strip_terminal, validate_and_split, AcceptedSentence, SentenceStats, Tier,
};
pub use word::{has_clean_interior, has_plausible_vowels, is_valid_word};
