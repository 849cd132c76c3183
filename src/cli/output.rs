//! CLI output formatting

use crate::core::config::KeySource;
use crate::core::{CipherOptions, ForceCase, Mode, NonLetterMode, TransformStats};
use console::Emoji;
use serde::Serialize;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static LOCK: Emoji<'_, '_> = Emoji("🔒 ", "> ");
pub static UNLOCK: Emoji<'_, '_> = Emoji("🔓 ", "< ");

/// JSON document printed by `encrypt --json` / `decrypt --json`
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    pub mode: Mode,
    pub output: String,
    pub stats: TransformStats,
}

/// JSON document printed by `validate --json`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub path: Option<String>,
    pub key_source: Option<KeySource>,
    pub key_length: Option<usize>,
    pub options: CipherOptions,
}

/// Format a mode for display
pub fn format_mode(mode: Mode) -> String {
    match mode {
        Mode::Encrypt => format!("{}{}", LOCK, style("Encrypted").green()),
        Mode::Decrypt => format!("{}{}", UNLOCK, style("Decrypted").green()),
    }
}

/// Format transform statistics for display
pub fn format_stats(stats: &TransformStats) -> String {
    let mut line = format!(
        "{} letters, {} characters",
        style(stats.letters).cyan(),
        style(stats.characters).cyan()
    );
    if stats.skipped > 0 {
        line.push_str(&format!(", {} skipped", style(stats.skipped).yellow()));
    }
    line
}

/// Format cipher options for display
pub fn format_options(options: &CipherOptions) -> String {
    let case = match options.force_case {
        ForceCase::Keep => "keep",
        ForceCase::ToLower => "lower",
        ForceCase::ToUpper => "upper",
    };
    let non_letters = match options.non_letters {
        NonLetterMode::Keep => "keep",
        NonLetterMode::Skip => "skip",
    };
    format!(
        "case: {}, non-letters: {}",
        style(case).cyan(),
        style(non_letters).cyan()
    )
}

/// Line printed by the `demo` command
pub fn format_demo_line(mode: Mode, input: &str, key: &str, output: &str) -> String {
    let verb = match mode {
        Mode::Encrypt => "Encrypting",
        Mode::Decrypt => "Decrypting",
    };
    format!("{} '{}' with key '{}' gives '{}'.", verb, input, key, output)
}
