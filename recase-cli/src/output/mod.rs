//! Output formatting module

use anyhow::Result;
use recase_core::FormatId;
use serde::{Deserialize, Serialize};

/// One converted name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    /// The name as given
    pub input: String,
    /// Target format
    pub format: FormatId,
    /// The converted name
    pub output: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single conversion
    fn format_record(&mut self, record: &ConversionRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Plain text with one result per line
    #[default]
    Text,
    /// JSON array of conversion records
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
