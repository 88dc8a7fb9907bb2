//! Acronym classification

/// Minimum number of characters for a word to count as an acronym
pub const MIN_ACRONYM_LEN: usize = 2;

/// Check whether a word is an acronym such as `XML`, `HTTP` or `API`
///
/// Only ASCII `A-Z` qualifies. Non-ASCII all-caps words (`ОЧЕНЬ`) and words
/// containing digits (`HTML5`) are ordinary words and get case-folded.
pub fn is_acronym(word: &str) -> bool {
    // ASCII-only, so the byte length is the character count
    word.len() >= MIN_ACRONYM_LEN && word.bytes().all(|b| b.is_ascii_uppercase())
}
