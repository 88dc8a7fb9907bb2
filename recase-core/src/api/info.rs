//! Format introspection

use super::convert::AsFormat;
use crate::error::Result;
use crate::format::{registry, FormatDescriptor, FormatId};

/// Snapshot of one format's rules and display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatInfo {
    /// Canonical id
    pub name: FormatId,
    /// Title with emoji, e.g. `"🐍 Snake case"`
    pub display_name: String,
    /// Display glyph
    pub emoji: &'static str,
    /// One-line description
    pub description: &'static str,
    /// `"my name is bond"` in this format
    pub example: &'static str,
    /// Every accepted name
    pub aliases: Vec<&'static str>,
    /// Placed between words
    pub delimiter: &'static str,
    /// Words start uppercase
    pub is_capitalized: bool,
    /// Output is entirely uppercase
    pub is_uppercase: bool,
    /// Output starts lowercase
    pub is_lowercase: bool,
}

impl From<&FormatDescriptor> for FormatInfo {
    fn from(descriptor: &FormatDescriptor) -> Self {
        Self {
            name: descriptor.id,
            display_name: descriptor.display_name(),
            emoji: descriptor.emoji,
            description: descriptor.description,
            example: descriptor.example,
            aliases: descriptor.aliases.to_vec(),
            delimiter: descriptor.delimiter,
            is_capitalized: descriptor.is_capitalized(),
            is_uppercase: descriptor.is_uppercase(),
            is_lowercase: descriptor.is_lowercase(),
        }
    }
}

/// True if `name` resolves to a format
pub fn is_format_supported(name: &str) -> bool {
    registry::is_supported(name)
}

/// Every format id in declaration order
pub fn supported_formats() -> Vec<FormatId> {
    FormatId::ALL.to_vec()
}

/// Every alias of every format, de-duplicated
pub fn supported_aliases() -> Vec<&'static str> {
    registry::supported_aliases()
}

/// Rules and metadata for one format
pub fn format_info<F: AsFormat>(format: F) -> Result<FormatInfo> {
    format.as_format().map(FormatInfo::from)
}

/// One line per format: display name, id, description and example
pub fn list_formats() -> String {
    registry::all()
        .iter()
        .map(|d| {
            format!(
                "{} ({}): {} (e.g. {})",
                d.display_name(),
                d.name(),
                d.description,
                d.example
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
