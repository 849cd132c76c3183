//! Cipher key model

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in the alphabet the cipher operates on
pub const ALPHABET_LEN: u8 = 26;

/// Error types for key construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key must contain at least one letter")]
    Empty,

    #[error("invalid key character {ch:?} at position {position}: only ASCII letters are allowed")]
    InvalidCharacter { ch: char, position: usize },
}

/// A validated Vigenère key
///
/// Every key letter is stored as its shift (`A`/`a` = 0 … `Z`/`z` = 25).
/// Case is ignored, so `lemon` and `LEMON` are the same key.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    /// Normalized (upper case) key text
    text: String,

    /// Alphabet offsets, one per key letter
    shifts: Vec<u8>,
}

impl Key {
    /// Create a key from text consisting only of ASCII letters
    pub fn new(text: &str) -> Result<Self, KeyError> {
        if text.is_empty() {
            return Err(KeyError::Empty);
        }

        let mut shifts = Vec::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(KeyError::InvalidCharacter { ch, position });
            }
            shifts.push(ch.to_ascii_uppercase() as u8 - b'A');
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
            shifts,
        })
    }

    /// Create a key from a free-form phrase, dropping everything that isn't an ASCII letter
    ///
    /// `"why rust?"` becomes the key `WHYRUST`.
    pub fn from_phrase(phrase: &str) -> Result<Self, KeyError> {
        let letters: String = phrase.chars().filter(|ch| ch.is_ascii_alphabetic()).collect();
        Self::new(&letters)
    }

    /// Number of letters in the key
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false: construction rejects empty keys
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shifts of the key letters in order
    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// Normalized upper case key text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Key material stays out of logs and panic messages.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("len", &self.len()).finish_non_exhaustive()
    }
}
