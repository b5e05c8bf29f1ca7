//! The detector facade
//!
//! [`Detector`] runs the whole pipeline over a text and reports how many
//! plausible words and sentences it found. It holds its configuration behind
//! an [`Arc`], so clones are cheap and can be handed to worker threads.

use crate::config::{DetectorConfig, Preset};
use crate::error::Result;
use crate::pipeline::{
    is_valid_word, normalize, segment, tokenize, validate_and_split, AcceptedSentence,
};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::Arc;

/// Word and sentence counts for one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    /// Tokens that passed word validation
    pub words: usize,
    /// Sentences that passed sentence validation
    pub sentences: usize,
}

impl Counts {
    /// Create counts
    pub fn new(words: usize, sentences: usize) -> Self {
        Self { words, sentences }
    }

    /// Whether the input very likely contains natural language
    ///
    /// Word counts alone are not trusted; a single accepted sentence is
    /// required.
    pub fn is_language(&self) -> bool {
        self.sentences > 0
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Counts) -> Counts {
        Counts {
            words: self.words + rhs.words,
            sentences: self.sentences + rhs.sentences,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Counts) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Counts {
        iter.fold(Counts::default(), Add::add)
    }
}

impl From<Counts> for (usize, usize) {
    fn from(counts: Counts) -> Self {
        (counts.words, counts.sentences)
    }
}

/// One accepted sentence with the signals that admitted it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceReport {
    /// Sentence tokens, terminator stripped
    pub tokens: Vec<String>,
    /// Number of words
    pub words: usize,
    /// Marker words found
    pub markers: usize,
    /// Stopwords found
    pub stopwords: usize,
    /// Stopwords divided by words
    pub stopword_ratio: f64,
    /// Whether this is a chunk of a re-split oversized sentence
    pub from_split: bool,
}

impl SentenceReport {
    fn from_accepted(sentence: &AcceptedSentence<'_>) -> Self {
        Self {
            tokens: sentence.tokens.iter().map(|t| (*t).to_string()).collect(),
            words: sentence.stats.words,
            markers: sentence.stats.markers,
            stopwords: sentence.stats.stopwords,
            stopword_ratio: sentence.stats.stopword_ratio(),
            from_split: sentence.from_split,
        }
    }

    /// Tokens joined by single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Detailed pipeline outcome for one input
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    /// Tokens produced by normalization
    pub tokens: usize,
    /// Tokens that passed word validation, in order
    pub valid_words: Vec<String>,
    /// Raw sentence candidates produced by segmentation
    pub candidates: usize,
    /// Candidates that yielded no accepted sentence
    pub rejected_candidates: usize,
    /// Accepted sentences in input order
    pub sentences: Vec<SentenceReport>,
}

impl Analysis {
    /// Counts equal to what [`Detector::count`] returns for the same text
    pub fn counts(&self) -> Counts {
        Counts {
            words: self.valid_words.len(),
            sentences: self.sentences.len(),
        }
    }

    /// Tokens rejected by word validation
    pub fn rejected_words(&self) -> usize {
        self.tokens - self.valid_words.len()
    }
}

/// Intermediate state shared by `count` and `analyze`
struct Pass<'a> {
    tokens: usize,
    valid_words: Vec<&'a str>,
    candidates: usize,
    rejected_candidates: usize,
    accepted: Vec<AcceptedSentence<'a>>,
}

/// Natural-language plausibility detector
#[derive(Debug, Clone)]
pub struct Detector {
    config: Arc<DetectorConfig>,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            config: Arc::new(DetectorConfig::default()),
        }
    }
}

impl Detector {
    /// Create a detector from a validated configuration
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Create a detector using the default tables and a preset's thresholds
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            config: Arc::new(DetectorConfig::with_preset(preset)),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Count plausible words and sentences
    pub fn count(&self, text: &str) -> Counts {
        let normalized = normalize(text, &self.config.dedupe_chars);
        let pass = self.run(&normalized);

        let min_words = self.config.min_words_per_sentence;
        let counts = Counts {
            words: pass.valid_words.len(),
            sentences: pass
                .accepted
                .iter()
                .filter(|s| s.tokens.len() >= min_words)
                .count(),
        };

        log::trace!(
            "Counted {} words and {} sentences in {} bytes",
            counts.words,
            counts.sentences,
            text.len()
        );
        counts
    }

    /// Run the pipeline and report every intermediate signal
    pub fn analyze(&self, text: &str) -> Analysis {
        let normalized = normalize(text, &self.config.dedupe_chars);
        let pass = self.run(&normalized);

        let min_words = self.config.min_words_per_sentence;
        Analysis {
            tokens: pass.tokens,
            valid_words: pass.valid_words.iter().map(|w| (*w).to_string()).collect(),
            candidates: pass.candidates,
            rejected_candidates: pass.rejected_candidates,
            sentences: pass
                .accepted
                .iter()
                .filter(|s| s.tokens.len() >= min_words)
                .map(SentenceReport::from_accepted)
                .collect(),
        }
    }

    fn run<'a>(&self, normalized: &'a str) -> Pass<'a> {
        let config = self.config.as_ref();

        let mut tokens = 0;
        let valid_words: Vec<&str> = tokenize(normalized)
            .inspect(|_| tokens += 1)
            .filter(|token| is_valid_word(token, config))
            .collect();

        let candidates = segment(&valid_words, config);
        let mut rejected_candidates = 0;
        let mut accepted = Vec::with_capacity(candidates.len());

        for candidate in &candidates {
            let sentences = validate_and_split(candidate, config);
            if sentences.is_empty() {
                rejected_candidates += 1;
            }
            accepted.extend(sentences);
        }

        Pass {
            tokens,
            valid_words,
            candidates: candidates.len(),
            rejected_candidates,
            accepted,
        }
    }
}
