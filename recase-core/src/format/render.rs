//! Joiners: render a word sequence in a given format

use std::borrow::Cow;

use super::descriptor::{Casing, FormatDescriptor};
use crate::domain::casing::{capitalize, lower, upper};
use crate::domain::{is_acronym, WordSequence};

/// Case every word per the format's policy and join with its delimiter
///
/// An empty sequence always renders as an empty string.
pub fn render(words: &WordSequence, format: &FormatDescriptor) -> String {
    let mut output = String::new();
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            output.push_str(format.delimiter);
        }
        output.push_str(&case_word(format.casing, index, word));
    }
    output
}

fn case_word(casing: Casing, index: usize, word: &str) -> Cow<'_, str> {
    if casing.preserves_acronyms() && is_acronym(word) {
        return Cow::Borrowed(word);
    }

    let cased = match casing {
        Casing::Lower => lower(word),
        Casing::Upper => upper(word),
        Casing::Capitalize => capitalize(word),
        Casing::LowerFirst if index == 0 => lower(word),
        Casing::LowerFirst => capitalize(word),
        Casing::Sentence if index == 0 => capitalize(word),
        Casing::Sentence => lower(word),
    };
    Cow::Owned(cased)
}
