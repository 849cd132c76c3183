//! Core cipher models
//!
//! This module defines the key, the character-level cipher and its
//! whole-text and chunked front-ends, plus the configuration file format.

pub mod cipher;
pub mod config;
pub mod iterator;
pub mod key;
pub mod stream;

pub use cipher::*;
pub use iterator::{CipherOptions, Decrypt, Encrypt, ForceCase, Mode, NonLetterMode, VigenereIterator};
pub use key::*;
pub use stream::*;
