//! vigenere - Vigenère cipher library and command-line tool
//!
//! Letters are shifted by the alphabet offset of the matching key letter
//! (`A` = 0 … `Z` = 25); the key repeats and only advances on letters.
//!
//! ```
//! use vigenere::{Decrypt, Encrypt, Key, CipherOptions};
//!
//! let key = Key::new("LEMON").unwrap();
//! let cipher_text: String = "ATTACK AT DAWN".chars().encrypt(&key, CipherOptions::default()).collect();
//! assert_eq!(cipher_text, "LXFOPV EF RNHR");
//!
//! let plain_text: String = cipher_text.chars().decrypt(&key, CipherOptions::default()).collect();
//! assert_eq!(plain_text, "ATTACK AT DAWN");
//! ```

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use crate::core::config::{CipherConfig, KeySource};
pub use crate::core::{
    CipherOptions, Decrypt, Encrypt, ForceCase, Key, KeyError, Mode, NonLetterMode,
    StreamCipher, TransformStats, Vigenere, VigenereIterator,
};
pub use execution::{Job, JobOutcome, Sink, Source};
