//! Rule-based filter that tells natural English prose apart from noise
//!
//! langsift counts how many plausible words and sentences a text contains.
//! A text with zero accepted sentences very likely holds no language at all:
//! keyword spam, symbol soup, code fragments, markup leftovers. The checks
//! are cheap and fully deterministic, meant for screening large batches.
//!
//! # Pipeline
//!
//! - **Normalization**: collapse repeated spaces and dashes, split into tokens
//! - **Word validation**: reject tokens with interior symbols or implausible
//!   vowel density for their length
//! - **Segmentation**: group valid words into sentence candidates, skipping
//!   known abbreviations
//! - **Sentence validation**: require a minimum length, a marker word and a
//!   stopword; re-split and re-check oversized run-ons
//!
//! # Example
//!
//! ```rust
//! use langsift_core::{Detector, Preset};
//!
//! let detector = Detector::default();
//! let counts = detector.count("The cat sits on the mat.");
//! assert_eq!((counts.words, counts.sentences), (6, 1));
//! assert!(counts.is_language());
//!
//! assert!(!detector.count("BUY SPAM BUY SPAM!").is_language());
//!
//! // terse sentences pass only under the loose preset
//! let loose = Detector::with_preset(Preset::Loose);
//! assert!(loose.count("They are here.").is_language());
//! ```

pub mod batch;
pub mod config;
pub mod detector;
pub mod error;
pub mod pipeline;
pub mod tables;

pub use batch::BatchOptions;
pub use config::{ConfigBuilder, DetectorConfig, Preset, ProfileConfig, Thresholds};
pub use detector::{Analysis, Counts, Detector, SentenceReport};
pub use error::{Error, Result};

use std::sync::OnceLock;

static DEFAULT_DETECTOR: OnceLock<Detector> = OnceLock::new();

/// Count plausible words and sentences with the default configuration
///
/// ```rust
/// assert_eq!(langsift_core::count(""), langsift_core::Counts::new(0, 0));
/// ```
pub fn count(text: &str) -> Counts {
    DEFAULT_DETECTOR.get_or_init(Detector::default).count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_uses_default_detector() {
        let text = "This is sentence one. This is sentence two! What about three?";
        assert_eq!(count(text), Detector::default().count(text));
        assert_eq!(count(text), Counts::new(11, 2));
    }
}
