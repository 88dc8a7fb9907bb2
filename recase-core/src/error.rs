//! Error types for format resolution

use thiserror::Error;

/// Errors raised by the conversion API
///
/// Text processing itself never fails; the only failure point is resolving a
/// user-supplied format name before any segmentation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name matched no canonical format id or alias
    #[error("Unsupported format: '{name}'. Supported formats: {}", supported.join(", "))]
    UnsupportedFormat {
        /// The rejected format name, as given by the caller
        name: String,
        /// Canonical ids of every registered format, in declaration order
        supported: Vec<&'static str>,
    },
}

impl Error {
    /// Build an `UnsupportedFormat` error listing every registered format
    pub(crate) fn unsupported(name: impl Into<String>) -> Self {
        Error::UnsupportedFormat {
            name: name.into(),
            supported: crate::format::registry::canonical_ids(),
        }
    }

    /// The format name that failed to resolve
    pub fn rejected_name(&self) -> &str {
        match self {
            Error::UnsupportedFormat { name, .. } => name,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
