//! Format identifiers and their static rule records

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Canonical identifier of a naming convention
///
/// Variants are listed in registry declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum FormatId {
    /// `myNameIsBond`
    Camel,
    /// `MyNameIsBond`
    Pascal,
    /// `my_name_is_bond`
    Snake,
    /// `my-name-is-bond`
    Kebab,
    /// `MY_NAME_IS_BOND`
    Macro,
    /// `My-Name-Is-Bond`
    Train,
    /// `my.name.is.bond`
    Dot,
    /// `my name is bond`
    Lower,
    /// `MY NAME IS BOND`
    Upper,
    /// `My Name Is Bond`
    Title,
    /// `my/name/is/bond`
    Path,
    /// `My_Name_Is_Bond`
    Ada,
    /// `MY-NAME-IS-BOND`
    Cobol,
    /// `My name is bond`
    Sentence,
}

impl FormatId {
    /// Every format, in declaration order
    pub const ALL: [FormatId; 14] = [
        FormatId::Camel,
        FormatId::Pascal,
        FormatId::Snake,
        FormatId::Kebab,
        FormatId::Macro,
        FormatId::Train,
        FormatId::Dot,
        FormatId::Lower,
        FormatId::Upper,
        FormatId::Title,
        FormatId::Path,
        FormatId::Ada,
        FormatId::Cobol,
        FormatId::Sentence,
    ];

    /// Canonical lowercase id, e.g. `"snake"`
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatId::Camel => "camel",
            FormatId::Pascal => "pascal",
            FormatId::Snake => "snake",
            FormatId::Kebab => "kebab",
            FormatId::Macro => "macro",
            FormatId::Train => "train",
            FormatId::Dot => "dot",
            FormatId::Lower => "lower",
            FormatId::Upper => "upper",
            FormatId::Title => "title",
            FormatId::Path => "path",
            FormatId::Ada => "ada",
            FormatId::Cobol => "cobol",
            FormatId::Sentence => "sentence",
        }
    }

    /// The static rule record for this format
    pub fn descriptor(self) -> &'static FormatDescriptor {
        super::registry::descriptor(self)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parses canonical ids and aliases, case-insensitively
impl FromStr for FormatId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::registry::resolve(s).map(|descriptor| descriptor.id)
    }
}

impl TryFrom<String> for FormatId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How a format cases each word before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Lowercase every word, acronyms included
    Lower,
    /// Uppercase every word, acronyms included
    Upper,
    /// Capitalize every word except acronyms
    Capitalize,
    /// Lowercase the first word, capitalize the rest; acronyms kept
    LowerFirst,
    /// Capitalize the first word, lowercase the rest; acronyms kept
    Sentence,
}

impl Casing {
    /// Whether acronyms bypass this policy and keep their case
    ///
    /// Forced full-case policies override acronym preservation.
    pub fn preserves_acronyms(&self) -> bool {
        !matches!(self, Casing::Lower | Casing::Upper)
    }
}

/// Immutable rule record for one naming convention
///
/// Descriptors only exist in the static registry; reach them through
/// [`FormatId::descriptor`] or [`resolve`](super::resolve).
///
/// ```compile_fail
/// use recase_core::{Casing, FormatDescriptor, FormatId};
///
/// let custom = FormatDescriptor {
///     id: FormatId::Snake,
///     delimiter: "+",
///     casing: Casing::Lower,
///     aliases: &[],
///     description: "",
///     example: "",
///     emoji: "",
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FormatDescriptor {
    /// Canonical identifier
    pub id: FormatId,
    /// Placed between words in the output
    pub delimiter: &'static str,
    /// Per-word casing policy
    pub casing: Casing,
    /// Accepted names, matched case-insensitively; always includes the id
    pub aliases: &'static [&'static str],
    /// One-line human description
    pub description: &'static str,
    /// `"my name is bond"` rendered in this format
    pub example: &'static str,
    /// Display glyph
    pub emoji: &'static str,
}

impl FormatDescriptor {
    /// Canonical id as a string
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    /// Human-readable title such as `"🐍 Snake case"`
    pub fn display_name(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} {} case", self.emoji, title)
    }

    /// Output words start with an uppercase letter
    pub fn is_capitalized(&self) -> bool {
        matches!(
            self.id,
            FormatId::Pascal
                | FormatId::Train
                | FormatId::Title
                | FormatId::Ada
                | FormatId::Sentence
                | FormatId::Upper
                | FormatId::Macro
                | FormatId::Cobol
        )
    }

    /// Output is entirely uppercase
    pub fn is_uppercase(&self) -> bool {
        self.casing == Casing::Upper
    }

    /// Output starts lowercase
    pub fn is_lowercase(&self) -> bool {
        matches!(self.casing, Casing::Lower | Casing::LowerFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let ids: Vec<&str> = FormatId::ALL.iter().map(FormatId::as_str).collect();
        assert_eq!(
            ids,
            [
                "camel", "pascal", "snake", "kebab", "macro", "train", "dot", "lower", "upper",
                "title", "path", "ada", "cobol", "sentence"
            ]
        );
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(FormatId::Macro.to_string(), "macro");
        assert_eq!(format!("{}", FormatId::Sentence), "sentence");
        assert_eq!(format!("{:<6}|", FormatId::Dot), "dot   |");
    }

    #[test]
    fn test_from_str_uses_aliases() {
        assert_eq!("SNAKE_CASE".parse::<FormatId>().unwrap(), FormatId::Snake);
        assert_eq!("studly".parse::<FormatId>().unwrap(), FormatId::Pascal);
        assert!("nope".parse::<FormatId>().is_err());
    }

    #[test]
    fn test_acronym_preservation_asymmetry() {
        assert!(!Casing::Lower.preserves_acronyms());
        assert!(!Casing::Upper.preserves_acronyms());
        assert!(Casing::Capitalize.preserves_acronyms());
        assert!(Casing::LowerFirst.preserves_acronyms());
        assert!(Casing::Sentence.preserves_acronyms());
    }

    #[test]
    fn test_capitalization_flags() {
        let flags = |id: FormatId| {
            let d = id.descriptor();
            (d.is_capitalized(), d.is_uppercase(), d.is_lowercase())
        };

        assert_eq!(flags(FormatId::Camel), (false, false, true));
        assert_eq!(flags(FormatId::Pascal), (true, false, false));
        assert_eq!(flags(FormatId::Macro), (true, true, false));
        assert_eq!(flags(FormatId::Snake), (false, false, true));
        assert_eq!(flags(FormatId::Sentence), (true, false, false));
        assert_eq!(flags(FormatId::Path), (false, false, true));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(FormatId::Snake.descriptor().display_name(), "🐍 Snake case");
        assert_eq!(FormatId::Cobol.descriptor().display_name(), "🏦 Cobol case");
    }
}
