//! Word membership oracles: stopwords, marker words and abbreviations

use std::collections::HashSet;

/// Case-insensitive set of words
///
/// Entries are stored lowercase. Lookups try the token as-is first, which
/// covers the common all-lowercase case without allocating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build from any iterator of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership - hot path
    #[inline]
    pub fn contains_ignore_case(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        if token.is_ascii() && !token.bytes().any(|b| b.is_ascii_uppercase()) {
            return false;
        }
        self.words.contains(&token.to_lowercase())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in sorted order
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

/// Closed-world abbreviation set
///
/// A token is an abbreviation when its lowercase form is a case-insensitive
/// entry, or when it matches an exact-case entry verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationSet {
    case_insensitive: WordSet,
    case_sensitive: HashSet<String>,
}

impl AbbreviationSet {
    /// Build from case-insensitive and exact-case entries
    pub fn new<I, J, S, T>(case_insensitive: I, case_sensitive: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: Into<String>,
    {
        Self {
            case_insensitive: WordSet::new(case_insensitive),
            case_sensitive: case_sensitive.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the token is a known abbreviation
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.case_insensitive.contains_ignore_case(token) || self.case_sensitive.contains(token)
    }

    /// Add a case-insensitive entry
    pub fn insert(&mut self, abbreviation: &str) {
        self.case_insensitive
            .words
            .insert(abbreviation.to_lowercase());
    }

    /// Case-insensitive entries, sorted
    pub fn case_insensitive(&self) -> Vec<String> {
        self.case_insensitive.sorted()
    }

    /// Exact-case entries, sorted
    pub fn case_sensitive(&self) -> Vec<String> {
        let mut entries: Vec<String> = self.case_sensitive.iter().cloned().collect();
        entries.sort();
        entries
    }

    /// Total number of entries across both kinds
    pub fn len(&self) -> usize {
        self.case_insensitive.len() + self.case_sensitive.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set_case_insensitive() {
        let set = WordSet::new(["the", "On", "was"]);

        assert!(set.contains_ignore_case("the"));
        assert!(set.contains_ignore_case("The"));
        assert!(set.contains_ignore_case("THE"));
        assert!(set.contains_ignore_case("on"));
        assert!(!set.contains_ignore_case("mat"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_word_set_does_not_trim_punctuation() {
        let set = WordSet::new(["and"]);
        assert!(!set.contains_ignore_case("and,"));
    }

    #[test]
    fn test_abbreviations_lowercase_match() {
        let set = AbbreviationSet::new(["mr.", "e.g."], Vec::<String>::new());

        assert!(set.contains("Mr."));
        assert!(set.contains("MR."));
        assert!(set.contains("e.g."));
        assert!(!set.contains("Mr"));
        assert!(!set.contains("Ms."));
    }

    #[test]
    fn test_abbreviations_exact_case() {
        let set = AbbreviationSet::new(Vec::<String>::new(), ["VS."]);

        assert!(set.contains("VS."));
        assert!(!set.contains("vs."));
        assert!(!set.contains("Vs."));
    }

    #[test]
    fn test_abbreviation_insert() {
        let mut set = AbbreviationSet::default();
        assert!(set.is_empty());

        set.insert("Approx.");
        assert!(set.contains("approx."));
        assert_eq!(set.case_insensitive(), vec!["approx.".to_string()]);
    }
}
