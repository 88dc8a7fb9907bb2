//! Plain text output formatter

use super::{ConversionRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one result per line
///
/// With `label_formats` set, each line is prefixed by the format id, which
/// keeps multi-format output readable.
pub struct TextFormatter<W: Write> {
    writer: W,
    label_formats: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, label_formats: bool) -> Self {
        Self {
            writer,
            label_formats,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &ConversionRecord) -> Result<()> {
        if self.label_formats {
            writeln!(self.writer, "{:<9} {}", record.format, record.output)?;
        } else {
            writeln!(self.writer, "{}", record.output)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
