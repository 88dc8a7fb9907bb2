//! Input handling module
//!
//! Names come from command-line arguments, a file (one name per line) or
//! standard input, in that order of preference.

pub mod file_reader;

pub use file_reader::FileReader;

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;

/// Read one name per line from any buffered reader
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        names.push(line.context("Failed to read input line")?);
    }
    Ok(names)
}

/// Collect the names to convert
pub fn collect_names(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    match file {
        Some(path) => FileReader::read_names(path),
        None => {
            log::debug!("Reading names from stdin");
            read_names(io::stdin().lock())
        }
    }
}
