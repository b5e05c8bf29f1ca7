//! Length-keyed table of plausible vowel counts
//!
//! Each word length in a contiguous range maps to a bitmask of the vowel
//! counts observed for real words of that length. Lookups never allocate.

use std::collections::BTreeMap;

/// Vowel counts at or above this value can never be allowed
const MASK_BITS: usize = u64::BITS as usize;

/// Allowed vowel counts per word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelTable {
    /// Shortest length with an entry; shorter words always fail
    min_len: usize,
    /// Bitmask of allowed counts, indexed by `length - min_len`
    masks: Vec<u64>,
}

impl VowelTable {
    /// Build from `(length, allowed vowel counts)` entries
    ///
    /// Lengths must form a contiguous range starting at 1 or above, with no
    /// length listed twice.
    pub fn new<I, C>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (usize, C)>,
        C: IntoIterator<Item = usize>,
    {
        let mut by_length: BTreeMap<usize, u64> = BTreeMap::new();

        for (length, counts) in entries {
            if length == 0 {
                return Err("vowel table lengths must be at least 1".to_string());
            }
            let mut mask = 0u64;
            for count in counts {
                if count >= MASK_BITS {
                    return Err(format!(
                        "vowel count {count} for length {length} exceeds {}",
                        MASK_BITS - 1
                    ));
                }
                mask |= 1u64 << count;
            }
            if by_length.insert(length, mask).is_some() {
                return Err(format!("vowel table lists length {length} twice"));
            }
        }

        let (min_len, max_len) = match (by_length.keys().next(), by_length.keys().last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Err("vowel table is empty".to_string()),
        };

        if by_length.len() != max_len - min_len + 1 {
            return Err(format!(
                "vowel table must cover every length from {min_len} to {max_len}"
            ));
        }

        Ok(Self {
            min_len,
            masks: by_length.into_values().collect(),
        })
    }

    /// Shortest covered length
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Longest covered length; longer words use its rule
    pub fn max_len(&self) -> usize {
        self.min_len + self.masks.len() - 1
    }

    /// Whether a word of `length` characters may contain `vowels` vowels
    #[inline]
    pub fn allows(&self, length: usize, vowels: usize) -> bool {
        let length = length.min(self.max_len());
        if length < self.min_len || vowels >= MASK_BITS {
            return false;
        }
        self.masks[length - self.min_len] & (1u64 << vowels) != 0
    }

    /// Allowed counts for a covered length, ascending
    pub fn counts_for(&self, length: usize) -> Vec<usize> {
        if length < self.min_len || length > self.max_len() {
            return Vec::new();
        }
        let mask = self.masks[length - self.min_len];
        (0..MASK_BITS).filter(|&c| mask & (1u64 << c) != 0).collect()
    }

    /// Iterate `(length, allowed counts)` over the covered range
    pub fn entries(&self) -> impl Iterator<Item = (usize, Vec<usize>)> + '_ {
        (self.min_len..=self.max_len()).map(move |len| (len, self.counts_for(len)))
    }
}
