//! Word segmentation
//!
//! Decomposes an identifier-like string into an ordered sequence of words.
//! The pipeline runs in a fixed order:
//!
//! 1. every separator (`.`, `-`, `/`, `_`, space) becomes the canonical delimiter
//! 2. acronym boundaries are isolated (`parseHTML`, `XMLHttp`)
//! 3. a delimiter goes before every capital that follows a lowercase letter or digit
//! 4. runs of delimiters collapse and the edges are trimmed
//! 5. the result is split into words
//!
//! Stage 2 must run before stage 3 so acronym runs are not split letter by
//! letter. Words keep the case they had in the input.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Internal separator used between segmentation stages
pub const CANONICAL_DELIMITER: char = ' ';

/// Separator characters recognised in the input, besides the canonical delimiter
pub const SEPARATORS: [char; 4] = ['.', '-', '/', '_'];

/// Compiled patterns for the case-boundary stages
struct BoundaryPatterns {
    /// A lowercase letter or digit followed by an uppercase run ending the input
    acronym_tail: Regex,
    /// An uppercase run followed by a capitalised word
    acronym_run: Regex,
    /// Any uppercase letter after a lowercase letter or digit
    capital: Regex,
}

static PATTERNS: OnceLock<BoundaryPatterns> = OnceLock::new();

fn patterns() -> &'static BoundaryPatterns {
    PATTERNS.get_or_init(|| BoundaryPatterns {
        acronym_tail: Regex::new(r"([\p{Ll}0-9])(\p{Lu}{2,})$").expect("valid acronym tail pattern"),
        acronym_run: Regex::new(r"(\p{Lu}{2,})(\p{Lu}\p{Ll})").expect("valid acronym run pattern"),
        capital: Regex::new(r"([\p{Ll}0-9])(\p{Lu})").expect("valid capital pattern"),
    })
}

/// Ordered, case-preserved words extracted from one input
///
/// Never contains an empty word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the input had no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Borrow the words as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Take ownership of the words
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Renders the normalized form: words joined by the canonical delimiter
impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                write!(f, "{CANONICAL_DELIMITER}")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Split `input` into words
///
/// Empty and whitespace-only input yields an empty sequence.
///
/// # Example
///
/// ```rust
/// use recase_core::domain::segment;
///
/// let words = segment("XMLHttpRequest");
/// assert_eq!(words.as_slice(), ["XML", "Http", "Request"]);
///
/// let words = segment("__user123Name__");
/// assert_eq!(words.as_slice(), ["user123", "Name"]);
/// ```
pub fn segment(input: &str) -> WordSequence {
    if input.trim().is_empty() {
        return WordSequence::default();
    }

    let normalized = replace_separators(input);
    let isolated = isolate_acronyms(&normalized);
    let split = split_capitals(&isolated);

    let words: Vec<String> = split
        .split(CANONICAL_DELIMITER)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect();

    log::trace!("segmented {input:?} into {words:?}");
    WordSequence { words }
}

/// Stage 1: map every separator onto the canonical delimiter
fn replace_separators(input: &str) -> Cow<'_, str> {
    if !input.contains(SEPARATORS) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .map(|ch| if SEPARATORS.contains(&ch) { CANONICAL_DELIMITER } else { ch })
            .collect(),
    )
}

/// Stage 2: isolate trailing acronyms and acronyms followed by a capitalised word
fn isolate_acronyms(text: &str) -> String {
    let patterns = patterns();
    let tail = patterns.acronym_tail.replace(text, "${1} ${2}");
    patterns
        .acronym_run
        .replace_all(&tail, "${1} ${2}")
        .into_owned()
}

/// Stage 3: break before each capital preceded by a lowercase letter or digit
fn split_capitals(text: &str) -> Cow<'_, str> {
    patterns().capital.replace_all(text, "${1} ${2}")
}
