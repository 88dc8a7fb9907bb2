//! List command implementations

use anyhow::Result;
use std::io::Write;

/// Write one line per format: emoji, name, id, description and example
pub fn write_formats<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", recase_core::list_formats())?;
    Ok(())
}

/// Write every accepted format name, one per line
pub fn write_aliases<W: Write>(writer: &mut W) -> Result<()> {
    for alias in recase_core::supported_aliases() {
        writeln!(writer, "{alias}")?;
    }
    Ok(())
}
