//! Convert command implementation

use anyhow::Result;
use clap::Args;
use recase_core::{Converter, FormatId};
use std::io::Write;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input;
use crate::output::{ConversionRecord, JsonFormatter, OutputFormatter, OutputStyle, TextFormatter};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Names to convert (default: one per line from --input or stdin)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Target format id or alias
    #[arg(short, long, value_name = "FORMAT")]
    pub to: Option<FormatId>,

    /// Convert to every supported format
    #[arg(short, long, conflicts_with = "to")]
    pub all: bool,

    /// Read names from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output style (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputStyle>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command against stdout
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let names = input::collect_names(&self.names, self.input.as_deref())?;
        self.run(&config, &names, std::io::stdout())
    }

    /// Convert `names` and write the results to `writer`
    pub fn run<W: Write + Send + Sync>(
        &self,
        config: &CliConfig,
        names: &[String],
        writer: W,
    ) -> Result<()> {
        let targets = self.targets(config)?;
        let style = self.format.unwrap_or(config.output.style);

        log::info!(
            "Converting {} names to {} formats",
            names.len(),
            targets.len()
        );

        let mut formatter: Box<dyn OutputFormatter + '_> = match style {
            OutputStyle::Text => Box::new(TextFormatter::new(writer, targets.len() > 1)),
            OutputStyle::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for name in names {
            let converter = Converter::new(name.as_str());
            log::debug!("'{}' segmented into {:?}", name, converter.words().as_slice());

            for &format in &targets {
                let record = ConversionRecord {
                    input: name.clone(),
                    format,
                    output: converter.to(format)?,
                };
                formatter.format_record(&record)?;
            }
        }

        formatter.finish()
    }

    /// Target formats: `--to`, then `--all`, then the configured default
    fn targets(&self, config: &CliConfig) -> Result<Vec<FormatId>> {
        if let Some(format) = self.to {
            return Ok(vec![format]);
        }
        if self.all {
            return Ok(FormatId::ALL.to_vec());
        }
        match config.convert.default_format {
            Some(format) => Ok(vec![format]),
            None => Err(CliError::MissingFormat.into()),
        }
    }
}
