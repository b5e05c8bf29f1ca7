//! Output formatting module

use anyhow::Result;
use langsift_core::{Analysis, Counts, SentenceReport};
use serde::Serialize;

/// Counting result for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountRecord {
    /// File path, `file:line`, or `<text>`
    pub source: String,
    pub words: usize,
    pub sentences: usize,
    pub is_language: bool,
    /// Accepted sentences, present with `--details`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<SentenceReport>>,
}

impl CountRecord {
    /// Record from plain counts
    pub fn from_counts(source: impl Into<String>, counts: Counts) -> Self {
        Self {
            source: source.into(),
            words: counts.words,
            sentences: counts.sentences,
            is_language: counts.is_language(),
            details: None,
        }
    }

    /// Record carrying the accepted sentences
    pub fn from_analysis(source: impl Into<String>, analysis: Analysis) -> Self {
        let mut record = Self::from_counts(source, analysis.counts());
        record.details = Some(analysis.sentences);
        record
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single record
    fn format_record(&mut self, record: &CountRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
