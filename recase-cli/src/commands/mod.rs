//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod convert;
pub mod info;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert names to one or more naming conventions
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Show the rules and metadata of one format
    Info(info::InfoArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported formats with descriptions and examples
    Formats,

    /// List every accepted format name
    Aliases,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Info(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand against stdout
    pub fn execute(&self) -> CliResult<()> {
        let mut stdout = std::io::stdout().lock();
        match self {
            ListCommands::Formats => list::write_formats(&mut stdout),
            ListCommands::Aliases => list::write_aliases(&mut stdout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Aliases,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Aliases"));

        let info_cmd = Commands::Info(info::InfoArgs {
            format: "snake".to_string(),
            json: true,
        });
        let debug_str = format!("{:?}", info_cmd);
        assert!(debug_str.contains("Info"));
        assert!(debug_str.contains("snake"));
    }

    #[test]
    fn test_list_commands_variants() {
        let debug_str = format!("{:?}", ListCommands::Formats);
        assert!(debug_str.contains("Formats"));

        let debug_str = format!("{:?}", ListCommands::Aliases);
        assert!(debug_str.contains("Aliases"));
    }
}
