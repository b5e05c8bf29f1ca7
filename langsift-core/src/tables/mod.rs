//! Runtime lookup tables
//!
//! Built once from configuration and only read afterwards. All lookups are
//! allocation-free on the common path.

pub mod charset;
pub mod lexicon;
pub mod vowel;

pub use charset::CharSet;
pub use lexicon::{AbbreviationSet, WordSet};
pub use vowel::VowelTable;
