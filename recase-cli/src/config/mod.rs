//! Configuration module

use anyhow::{Context, Result};
use recase_core::FormatId;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputStyle;

/// CLI configuration structure
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Target format when `--to` is not given; any id or alias
    pub default_format: Option<FormatId>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output style
    #[serde(default)]
    pub style: OutputStyle,

    /// Pretty print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            pretty_json: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
