//! Recase CLI library
//!
//! This library provides the command-line interface for converting
//! identifiers between naming conventions.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
