//! Info command implementation

use anyhow::{Context, Result};
use clap::Args;
use recase_core::FormatInfo;
use std::io::Write;

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Format id or alias, e.g. `snake` or `SCREAMING_SNAKE`
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Print the format record as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoArgs {
    /// Execute the info command against stdout
    pub fn execute(&self) -> Result<()> {
        self.run(&mut std::io::stdout().lock())
    }

    /// Write the format record to `writer`
    pub fn run<W: Write>(&self, writer: &mut W) -> Result<()> {
        let info = recase_core::format_info(self.format.as_str())?;
        log::debug!("Resolved '{}' to {}", self.format, info.name);

        if self.json {
            serde_json::to_writer_pretty(&mut *writer, &info)
                .context("Failed to serialize format info")?;
            writeln!(writer)?;
        } else {
            write_text(writer, &info)?;
        }
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, info: &FormatInfo) -> Result<()> {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    writeln!(writer, "{}", info.display_name)?;
    writeln!(writer, "  id:          {}", info.name)?;
    writeln!(writer, "  description: {}", info.description)?;
    writeln!(writer, "  example:     {}", info.example)?;
    writeln!(writer, "  delimiter:   {:?}", info.delimiter)?;
    writeln!(writer, "  aliases:     {}", info.aliases.join(", "))?;
    writeln!(writer, "  capitalized: {}", yes_no(info.is_capitalized))?;
    writeln!(writer, "  uppercase:   {}", yes_no(info.is_uppercase))?;
    writeln!(writer, "  lowercase:   {}", yes_no(info.is_lowercase))?;
    Ok(())
}
