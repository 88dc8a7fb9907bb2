//! Unicode-aware case transforms
//!
//! All helpers work on `char`s, so multi-byte letters are never split.

/// Lowercase every character
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

/// Uppercase every character
pub fn upper(word: &str) -> String {
    word.to_uppercase()
}

/// Uppercase the first character and lowercase the rest
///
/// A first character with a multi-character uppercase form (`ß` -> `SS`)
/// expands in place.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}
