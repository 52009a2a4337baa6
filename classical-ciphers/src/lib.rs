//! # Classical Ciphers Library
//!
//! Pre-modern ciphers together with a ciphertext-only cryptanalysis engine.
//!
//! ## Supported Ciphers
//!
//! - **Alberti** - cipher disk with default, simple and periodic modes
//! - **Scytale** - transposition by rows wrapped around a rod
//! - **Block Rotate** - transposition by rotating fixed-size blocks
//! - **Shift** - Caesar cipher over a window of printable ASCII
//! - **Vigenère** - autokey or running key polyalphabetic substitution
//!
//! ## Usage
//!
//! ```rust
//! use classical_ciphers::{Cipher, Dictionary, Scytale, ScytaleParams};
//!
//! let scytale = Scytale::new(3, "");
//! let ciphertext = scytale.encrypt("attack the castle at dawn");
//!
//! let dictionary = Dictionary::from_words(["attack", "the", "castle", "at", "dawn"]);
//! let found = Scytale::cryptanalyze(&ciphertext, &dictionary, &ScytaleParams::default())?;
//! assert_eq!(found.key, 3);
//! assert_eq!(found.plaintext, "attack the castle at dawn");
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```
//!
//! ## Cryptanalysis
//!
//! - Transpositions and the Alberti disk are brute forced against a word list
//! - Shift and Vigenère keys are recovered with the chi-squared statistic
//! - Vigenère key lengths come from Friedman's test and cipher shifting

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod codec;
pub mod dictionary;
pub mod error;
pub mod key_length;
pub mod stats;
pub mod utils;

// Re-exports for easy access
pub use analysis::{
    AlbertiParams, BlockRotateParams, Score, ScoredCandidate, ScytaleParams, ShiftParams,
};
pub use cipher::Cipher;
pub use ciphers::{Alberti, AlbertiMode, BlockRotate, Scytale, Shift, Vigenere, VigenereMode};
pub use dictionary::Dictionary;
pub use error::{CipherError, Result};
pub use key_length::ShiftingParams;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    const PLAINTEXT: &str =
        "Send reinforcements, we are going to advance.\nHold the bridge until noon!";

    fn round_trip<C: Cipher>(cipher: &C) {
        assert_eq!(cipher.decrypt(&cipher.encrypt(PLAINTEXT)), PLAINTEXT);
    }

    #[test]
    fn test_all_ciphers_round_trip() {
        round_trip(&Scytale::new(6, "Q"));
        round_trip(&Scytale::new(6, ""));
        round_trip(&BlockRotate::new((7, 3), "q"));
        round_trip(&Shift::new((13, 0, 94)));
        round_trip(&Vigenere::new("lantern"));
        round_trip(&Vigenere::new("z"));
    }

    #[test]
    fn test_alberti_round_trip_lowercases() {
        for mode in AlbertiMode::ALL {
            let alberti = Alberti::new(('m', Alberti::random_wheel()), mode);
            let plaintext = PLAINTEXT.to_lowercase();
            assert_eq!(alberti.decrypt(&alberti.encrypt(&plaintext)), plaintext);
        }
    }

    #[test]
    fn test_invalid_keys_fall_back_to_defaults() {
        let mut scytale = Scytale::default();
        let mut block = BlockRotate::default();
        let mut shift = Shift::default();
        let mut vigenere = Vigenere::default();

        assert!(scytale.set_key(0).is_err());
        assert!(block.set_key((0, 1)).is_err());
        assert!(shift.set_key((1, 5, 200)).is_err());
        assert!(vigenere.set_key("42".to_string()).is_err());

        assert_eq!(scytale.key(), Scytale::DEFAULT_KEY);
        assert_eq!(block.key(), BlockRotate::DEFAULT_KEY);
        assert_eq!(shift.key(), Shift::DEFAULT_KEY);
        assert_eq!(vigenere.key(), Vigenere::DEFAULT_KEY);
        round_trip(&scytale);
        round_trip(&block);
        round_trip(&shift);
        round_trip(&vigenere);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
