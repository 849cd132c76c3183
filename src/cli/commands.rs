//! CLI command definitions

use crate::core::{CipherOptions, ForceCase, NonLetterMode};
use crate::execution::{Sink, Source};
use clap::Args;
use std::path::PathBuf;

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Debug, Args, Clone)]
pub struct TransformArgs {
    /// Text to transform (reads --input, or stdin, when omitted)
    #[arg(conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, conflicts_with = "json")]
    pub output: Option<PathBuf>,

    /// Cipher key (letters only); falls back to $VIGENERE_KEY and the config file
    #[arg(short, long)]
    pub key: Option<String>,

    /// Read the key from a file
    #[arg(long)]
    pub key_file: Option<PathBuf>,

    /// Case of the output letters
    #[arg(long, value_enum)]
    pub force_case: Option<ForceCaseArg>,

    /// Drop non-letters from the output
    #[arg(long)]
    pub skip_non_letters: bool,

    /// Show a progress bar for file input
    #[arg(long)]
    pub progress: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl TransformArgs {
    /// Apply command-line overrides on top of configured options
    pub fn options(&self, base: CipherOptions) -> CipherOptions {
        let mut options = base;
        if let Some(force_case) = self.force_case {
            options = options.with_force_case(force_case.into());
        }
        if self.skip_non_letters {
            options = options.with_non_letters(NonLetterMode::Skip);
        }
        options
    }

    pub fn source(&self) -> Source {
        match (&self.text, &self.input) {
            (Some(text), _) => Source::Text(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stdin,
        }
    }

    pub fn sink(&self) -> Sink {
        if self.json {
            Sink::Buffer
        } else if let Some(path) = &self.output {
            Sink::File(path.clone())
        } else {
            Sink::Stdout
        }
    }
}

/// Validate a configuration file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Force case argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ForceCaseArg {
    Keep,
    Lower,
    Upper,
}

impl From<ForceCaseArg> for ForceCase {
    fn from(arg: ForceCaseArg) -> Self {
        match arg {
            ForceCaseArg::Keep => ForceCase::Keep,
            ForceCaseArg::Lower => ForceCase::ToLower,
            ForceCaseArg::Upper => ForceCase::ToUpper,
        }
    }
}
