//! Text normalization and tokenization
//!
//! A single pass over the input collapses immediately repeated dedupe
//! characters, turns newlines and tabs into spaces and puts a space after
//! every period so that "end.Next" still splits into two tokens. The cost is
//! that decimals and dotted abbreviations ("3.14", "e.g.") get split too.

use crate::config::DetectorConfig;
use crate::tables::CharSet;

/// Normalize raw text
pub fn normalize(raw: &str, dedupe_chars: &CharSet) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    let mut prev: Option<char> = None;

    for ch in raw.chars() {
        if prev == Some(ch) && dedupe_chars.contains(ch) {
            continue;
        }
        prev = Some(ch);

        match ch {
            '\n' | '\t' => out.push(' '),
            '.' => out.push_str(". "),
            _ => out.push(ch),
        }
    }

    out
}

/// Split normalized text on whitespace runs
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalize and tokenize in one step, returning owned tokens
pub fn normalize_and_tokenize(raw: &str, config: &DetectorConfig) -> Vec<String> {
    let normalized = normalize(raw, &config.dedupe_chars);
    tokenize(&normalized).map(str::to_owned).collect()
}
