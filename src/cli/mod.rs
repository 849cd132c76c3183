//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{TransformArgs, ValidateCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Vigenère cipher tool
#[derive(Debug, Parser, Clone)]
#[command(name = "vigenere")]
#[command(version)]
#[command(about = "Encrypt and decrypt text with the Vigenère cipher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Encrypt plain text
    Encrypt(TransformArgs),

    /// Decrypt cipher text
    Decrypt(TransformArgs),

    /// Validate the configuration file
    Validate(ValidateCommand),

    /// Run the built-in example
    Demo,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vigenere", "validate", "-v", "--config", "c.yaml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn test_demo_command() {
        let cli = Cli::try_parse_from(["vigenere", "demo"]).unwrap();
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["vigenere"]).is_err());
    }
}
