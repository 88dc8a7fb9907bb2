//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file holding one name per line
    pub fn read_names(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        let names: Vec<String> = content.lines().map(str::to_owned).collect();
        log::info!("Read {} names from {}", names.len(), path.display());
        Ok(names)
    }
}
