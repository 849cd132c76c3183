//! Chunked cipher state for streaming input

use crate::core::iterator::{transform_char, CipherOptions, KeyCursor, Mode, NonLetterMode};
use crate::core::key::Key;
use serde::{Deserialize, Serialize};

/// Counters collected while transforming text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    /// Characters read from the input
    pub characters: usize,

    /// Letters shifted by the key
    pub letters: usize,

    /// Non-letters dropped from the output
    pub skipped: usize,
}

/// Cipher that transforms text one chunk at a time
///
/// The key position carries over between chunks, so splitting the input at
/// any character boundary yields the same output as a single call.
#[derive(Debug, Clone)]
pub struct StreamCipher {
    mode: Mode,
    options: CipherOptions,
    cursor: KeyCursor,
    stats: TransformStats,
}

impl StreamCipher {
    pub fn new(mode: Mode, key: Key, options: CipherOptions) -> Self {
        Self {
            mode,
            options,
            cursor: KeyCursor::new(key),
            stats: TransformStats::default(),
        }
    }

    /// Transform a chunk and return the output
    pub fn apply(&mut self, chunk: &str) -> String {
        let mut out = String::with_capacity(chunk.len());
        self.apply_into(chunk, &mut out);
        out
    }

    /// Transform a chunk, appending the output to `out`
    pub fn apply_into(&mut self, chunk: &str, out: &mut String) {
        for ch in chunk.chars() {
            self.stats.characters += 1;
            if ch.is_ascii_alphabetic() {
                self.stats.letters += 1;
            } else if self.options.non_letters == NonLetterMode::Skip {
                self.stats.skipped += 1;
            }

            if let Some(transformed) = transform_char(ch, &mut self.cursor, self.mode, self.options)
            {
                out.push(transformed);
            }
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn key_position(&self) -> usize {
        self.cursor.position()
    }

    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    pub fn into_stats(self) -> TransformStats {
        self.stats
    }
}
