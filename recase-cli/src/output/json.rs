//! JSON output formatter

use super::{ConversionRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs conversions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<ConversionRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &ConversionRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recase_core::FormatId;

    #[test]
    fn test_compact_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_record(&ConversionRecord {
                input: "userName".to_string(),
                format: FormatId::Kebab,
                output: "user-name".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            output,
            "[{\"input\":\"userName\",\"format\":\"kebab\",\"output\":\"user-name\"}]\n"
        );
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn test_pretty_output_parses() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        for (format, output) in [(FormatId::Snake, "user_name"), (FormatId::Macro, "USER_NAME")] {
            formatter
                .format_record(&ConversionRecord {
                    input: "userName".to_string(),
                    format,
                    output: output.to_string(),
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["format"], "macro");
    }
}
