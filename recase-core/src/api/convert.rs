//! Conversion entry points

use crate::domain::segment;
use crate::error::Result;
use crate::format::{registry, render, FormatDescriptor, FormatId};

/// Anything that names a format: a [`FormatId`], a descriptor, or a string
/// id/alias resolved through the registry
pub trait AsFormat {
    /// Resolve to the static descriptor
    fn as_format(&self) -> Result<&'static FormatDescriptor>;
}

impl AsFormat for FormatId {
    fn as_format(&self) -> Result<&'static FormatDescriptor> {
        Ok(self.descriptor())
    }
}

impl AsFormat for &FormatDescriptor {
    fn as_format(&self) -> Result<&'static FormatDescriptor> {
        Ok(self.id.descriptor())
    }
}

impl AsFormat for &str {
    fn as_format(&self) -> Result<&'static FormatDescriptor> {
        registry::resolve(self)
    }
}

impl AsFormat for String {
    fn as_format(&self) -> Result<&'static FormatDescriptor> {
        registry::resolve(self)
    }
}

impl AsFormat for &String {
    fn as_format(&self) -> Result<&'static FormatDescriptor> {
        registry::resolve(self)
    }
}

/// Convert `input` to the given format
///
/// The format is resolved before any text processing, so an unknown name
/// fails without touching the input.
///
/// # Example
///
/// ```rust
/// use recase_core::{convert, FormatId};
///
/// assert_eq!(convert("user_name", "camel").unwrap(), "userName");
/// assert_eq!(convert("userName", FormatId::Macro).unwrap(), "USER_NAME");
/// assert!(convert("x", "not_a_format").is_err());
/// ```
pub fn convert<F: AsFormat>(input: &str, format: F) -> Result<String> {
    let descriptor = format.as_format()?;
    Ok(render(&segment(input), descriptor))
}

/// Convert with an already-resolved id; cannot fail
pub(crate) fn convert_to(input: &str, id: FormatId) -> String {
    render(&segment(input), id.descriptor())
}

macro_rules! shortcuts {
    ($($fn_name:ident => $id:ident, $example:literal;)*) => {
        $(
            #[doc = concat!("Convert to ", stringify!($id), " case, e.g. `", $example, "`")]
            pub fn $fn_name(input: &str) -> String {
                convert_to(input, FormatId::$id)
            }
        )*
    };
}

shortcuts! {
    to_camel => Camel, "userName";
    to_pascal => Pascal, "UserName";
    to_snake => Snake, "user_name";
    to_kebab => Kebab, "user-name";
    to_macro => Macro, "USER_NAME";
    to_train => Train, "User-Name";
    to_dot => Dot, "user.name";
    to_lower => Lower, "user name";
    to_upper => Upper, "USER NAME";
    to_title => Title, "User Name";
    to_path => Path, "user/name";
    to_ada => Ada, "User_Name";
    to_cobol => Cobol, "USER-NAME";
    to_sentence => Sentence, "User name";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_convert_accepts_every_format_spelling() {
        let expected = "user_name";
        assert_eq!(convert("userName", FormatId::Snake).unwrap(), expected);
        assert_eq!(convert("userName", "snake").unwrap(), expected);
        assert_eq!(convert("userName", "Underscore").unwrap(), expected);
        assert_eq!(convert("userName", String::from("snake_case")).unwrap(), expected);
        assert_eq!(convert("userName", &String::from("lower_snake")).unwrap(), expected);
        assert_eq!(convert("userName", FormatId::Snake.descriptor()).unwrap(), expected);
    }

    #[test]
    fn test_convert_unknown_format_fails() {
        let err = convert("x", "not_a_format").unwrap_err();
        let Error::UnsupportedFormat { name, supported } = err;
        assert_eq!(name, "not_a_format");
        assert_eq!(supported.len(), FormatId::ALL.len());
    }

    #[test]
    fn test_unknown_format_fails_even_for_empty_input() {
        assert!(convert("", "bogus").is_err());
    }

    #[test]
    fn test_shortcuts_match_convert() {
        let input = "XMLHttpRequest";
        let shortcuts: [(fn(&str) -> String, FormatId); 14] = [
            (to_camel, FormatId::Camel),
            (to_pascal, FormatId::Pascal),
            (to_snake, FormatId::Snake),
            (to_kebab, FormatId::Kebab),
            (to_macro, FormatId::Macro),
            (to_train, FormatId::Train),
            (to_dot, FormatId::Dot),
            (to_lower, FormatId::Lower),
            (to_upper, FormatId::Upper),
            (to_title, FormatId::Title),
            (to_path, FormatId::Path),
            (to_ada, FormatId::Ada),
            (to_cobol, FormatId::Cobol),
            (to_sentence, FormatId::Sentence),
        ];

        for (shortcut, id) in shortcuts {
            assert_eq!(shortcut(input), convert(input, id).unwrap(), "format: {id}");
        }
    }
}
