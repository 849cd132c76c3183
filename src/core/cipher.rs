//! Whole-text Vigenère cipher

use crate::core::iterator::{CipherOptions, Decrypt, Encrypt, Mode};
use crate::core::key::{Key, KeyError};
use crate::core::stream::StreamCipher;

/// Encrypts or decrypts string slices with a fixed key and options
///
/// ```
/// use vigenere::Vigenere;
///
/// let cipher = Vigenere::new("WHYRUST").unwrap();
/// assert_eq!(cipher.encrypt("TO EMPOWER EVERYONE"), "PV CDJGPAY CMYJRKUC");
/// assert_eq!(cipher.decrypt("PV CDJGPAY CMYJRKUC"), "TO EMPOWER EVERYONE");
/// ```
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: Key,
    options: CipherOptions,
}

impl Vigenere {
    /// Create a cipher from key text, using default options
    pub fn new(key: &str) -> Result<Self, KeyError> {
        Ok(Self::with_key(Key::new(key)?))
    }

    /// Create a cipher from an already validated key
    pub fn with_key(key: Key) -> Self {
        Self {
            key,
            options: CipherOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CipherOptions) -> Self {
        self.options = options;
        self
    }

    /// Encrypts the provided plain text and returns the cipher text
    pub fn encrypt(&self, plain_text: &str) -> String {
        plain_text.chars().encrypt(&self.key, self.options).collect()
    }

    /// Decrypts the provided cipher text and returns the plain text
    pub fn decrypt(&self, cipher_text: &str) -> String {
        cipher_text.chars().decrypt(&self.key, self.options).collect()
    }

    pub fn transform(&self, mode: Mode, text: &str) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }

    /// Start a chunked transform that carries the key position across chunks
    pub fn stream(&self, mode: Mode) -> StreamCipher {
        StreamCipher::new(mode, self.key.clone(), self.options)
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn options(&self) -> CipherOptions {
        self.options
    }
}
