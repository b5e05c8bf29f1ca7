//! Character membership with O(1) lookup
//!
//! Optimized for hot-path performance with ASCII fast-path.

use std::collections::HashSet;

/// Fast character lookup table
#[derive(Debug, Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members (dashes, curly quotes)
    non_ascii: HashSet<char>,
}

impl CharSet {
    /// Create from an iterator of member characters
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Create from the characters of a string
    pub fn from_str_chars(chars: &str) -> Self {
        Self::new(chars.chars())
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// ASCII case-insensitive membership
    #[inline]
    pub fn contains_ignore_ascii_case(&self, ch: char) -> bool {
        self.contains(ch.to_ascii_lowercase()) || self.contains(ch.to_ascii_uppercase())
    }

    /// Number of member characters
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&b| b).count() + self.non_ascii.len()
    }

    /// True if the set has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in a stable order (ASCII first, then sorted non-ASCII)
    pub fn to_vec(&self) -> Vec<char> {
        let mut chars: Vec<char> = (0u8..128)
            .filter(|&b| self.ascii_table[b as usize])
            .map(char::from)
            .collect();
        let mut rest: Vec<char> = self.non_ascii.iter().copied().collect();
        rest.sort_unstable();
        chars.extend(rest);
        chars
    }
}
