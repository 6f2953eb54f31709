//! Turkish-alphabet collation for dictionary ordering.
//!
//! Headwords are ordered by the 29-letter Turkish alphabet, not by code
//! point: ç follows c, ğ follows g, ı precedes i, and so on. Characters
//! outside the alphabet (digits, punctuation, foreign letters) rank after
//! every Turkish letter, so mixed headwords still order deterministically.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::CleanEntry;

/// The Turkish alphabet in collation order.
pub const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

/// Rank for characters outside the alphabet; sorts after every letter.
const FOREIGN_RANK: u32 = u32::MAX;

static RANKS: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    TURKISH_ALPHABET.chars().zip(0u32..).collect()
});

/// Collation key for a headword: the per-character rank sequence of its
/// lower-cased form.
///
/// Keys compare lexicographically, so a prefix sorts before its extension.
pub fn collation_key(word: &str) -> Vec<u32> {
    word.to_lowercase()
        .chars()
        .map(|c| RANKS.get(&c).copied().unwrap_or(FOREIGN_RANK))
        .collect()
}

/// Stable-sort entries by Turkish collation of the original headword,
/// homograph index breaking ties.
pub fn sort_entries(entries: &mut [CleanEntry]) {
    entries.sort_by_cached_key(|e| (collation_key(&e.base_madde), e.kac));
}
