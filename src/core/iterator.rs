//! Iterator-based implementation of the Vigenère cipher

use crate::core::key::{Key, ALPHABET_LEN};
use serde::{Deserialize, Serialize};

/// Direction of the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Turn plain text into cipher text
    Encrypt,
    /// Turn cipher text into plain text
    Decrypt,
}

/// Method of dealing with the case of letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCase {
    /// Keep the case of the input letter
    #[default]
    #[serde(rename = "keep")]
    Keep,
    /// Force output letters to lower case
    #[serde(rename = "lower")]
    ToLower,
    /// Force output letters to upper case
    #[serde(rename = "upper")]
    ToUpper,
}

/// Method of dealing with non-letter characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonLetterMode {
    /// Pass non-letters through unchanged
    #[default]
    Keep,
    /// Remove non-letters from the output
    Skip,
}

/// Output shaping options shared by every cipher front-end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOptions {
    #[serde(default)]
    pub force_case: ForceCase,

    #[serde(default)]
    pub non_letters: NonLetterMode,
}

impl CipherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force_case(mut self, force_case: ForceCase) -> Self {
        self.force_case = force_case;
        self
    }

    pub fn with_non_letters(mut self, non_letters: NonLetterMode) -> Self {
        self.non_letters = non_letters;
        self
    }
}

/// Position within a repeating key
#[derive(Debug, Clone)]
pub struct KeyCursor {
    key: Key,
    index: usize,
}

impl KeyCursor {
    pub fn new(key: Key) -> Self {
        Self { key, index: 0 }
    }

    /// Return the shift for the next letter and advance
    pub fn next_shift(&mut self) -> u8 {
        let shift = self.key.shifts()[self.index];
        self.index = (self.index + 1) % self.key.len();
        shift
    }

    /// Index of the key letter that will be used next
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

fn shift_letter(value: u8, shift: u8, mode: Mode) -> u8 {
    match mode {
        Mode::Encrypt => (value + shift) % ALPHABET_LEN,
        Mode::Decrypt => (ALPHABET_LEN + value - shift) % ALPHABET_LEN,
    }
}

/// Transform a single character
///
/// Returns `None` when the character is dropped. The cursor only advances
/// on ASCII letters.
pub fn transform_char(
    ch: char,
    cursor: &mut KeyCursor,
    mode: Mode,
    options: CipherOptions,
) -> Option<char> {
    let (base, out_base) = match ch {
        'A'..='Z' => (
            b'A',
            if options.force_case == ForceCase::ToLower { b'a' } else { b'A' },
        ),
        'a'..='z' => (
            b'a',
            if options.force_case == ForceCase::ToUpper { b'A' } else { b'a' },
        ),
        _ => {
            return match options.non_letters {
                NonLetterMode::Keep => Some(ch),
                NonLetterMode::Skip => None,
            };
        }
    };

    let shift = cursor.next_shift();
    let output = shift_letter(ch as u8 - base, shift, mode);
    Some((out_base + output) as char)
}

/// Iterator, over characters, that encrypts or decrypts using the Vigenère cipher
#[derive(Debug, Clone)]
pub struct VigenereIterator<I>
where
    I: Iterator<Item = char>,
{
    mode: Mode,
    options: CipherOptions,
    cursor: KeyCursor,
    iter: I,
}

impl<I> VigenereIterator<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(mode: Mode, key: &Key, options: CipherOptions, iter: I) -> Self {
        Self {
            mode,
            options,
            cursor: KeyCursor::new(key.clone()),
            iter,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the key letter that will be used for the next letter
    pub fn key_position(&self) -> usize {
        self.cursor.position()
    }
}

impl<I> Iterator for VigenereIterator<I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let ch = self.iter.next()?;
            if let Some(out) = transform_char(ch, &mut self.cursor, self.mode, self.options) {
                return Some(out);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.options.non_letters {
            NonLetterMode::Keep => (lower, upper),
            NonLetterMode::Skip => (0, upper),
        }
    }
}

/// Encryption trait for a character iterator
pub trait Encrypt: Iterator<Item = char> + Sized {
    /// Encrypt characters using the specified key and options
    fn encrypt(self, key: &Key, options: CipherOptions) -> VigenereIterator<Self>;
}

/// Decryption trait for a character iterator
pub trait Decrypt: Iterator<Item = char> + Sized {
    /// Decrypt characters using the specified key and options
    fn decrypt(self, key: &Key, options: CipherOptions) -> VigenereIterator<Self>;
}

impl<I> Encrypt for I
where
    I: Iterator<Item = char>,
{
    fn encrypt(self, key: &Key, options: CipherOptions) -> VigenereIterator<I> {
        VigenereIterator::new(Mode::Encrypt, key, options, self)
    }
}

impl<I> Decrypt for I
where
    I: Iterator<Item = char>,
{
    fn decrypt(self, key: &Key, options: CipherOptions) -> VigenereIterator<I> {
        VigenereIterator::new(Mode::Decrypt, key, options, self)
    }
}
