//! Chainable conversion handle

use super::convert::AsFormat;
use crate::domain::{segment, WordSequence};
use crate::error::Result;
use crate::format::{render, FormatId};

/// Input segmented once, ready to render in any number of formats
///
/// # Example
///
/// ```rust
/// let name = recase_core::from("user_profile_id");
///
/// assert_eq!(name.to_camel(), "userProfileId");
/// assert_eq!(name.to_kebab(), "user-profile-id");
/// assert_eq!(name.to("constant").unwrap(), "USER_PROFILE_ID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    input: String,
    words: WordSequence,
}

/// Start a chain over `input`
pub fn from(input: impl Into<String>) -> Converter {
    Converter::new(input)
}

impl Converter {
    /// Segment `input` and keep the words for later rendering
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let words = segment(&input);
        Self { input, words }
    }

    /// The original input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The segmented words
    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    /// Render in a format given by id, descriptor or name
    pub fn to<F: AsFormat>(&self, format: F) -> Result<String> {
        let descriptor = format.as_format()?;
        Ok(render(&self.words, descriptor))
    }

    fn render_as(&self, id: FormatId) -> String {
        render(&self.words, id.descriptor())
    }
}

macro_rules! fluent_shortcuts {
    ($($method:ident => $id:ident;)*) => {
        impl Converter {
            $(
                #[doc = concat!("Render in ", stringify!($id), " case")]
                pub fn $method(&self) -> String {
                    self.render_as(FormatId::$id)
                }
            )*
        }
    };
}

fluent_shortcuts! {
    to_camel => Camel;
    to_pascal => Pascal;
    to_snake => Snake;
    to_kebab => Kebab;
    to_macro => Macro;
    to_train => Train;
    to_dot => Dot;
    to_lower => Lower;
    to_upper => Upper;
    to_title => Title;
    to_path => Path;
    to_ada => Ada;
    to_cobol => Cobol;
    to_sentence => Sentence;
}
