//! Vigenère cipher over the 26 ASCII letters
//!
//! A single letter key runs in autokey mode: after the primer, the plaintext
//! itself extends the key. A longer key is repeated (running key mode). Only
//! ASCII letters consume key positions; everything else is copied unchanged
//! and letter case is kept independently of the key's case.

use std::fmt;

use tracing::warn;

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};

const ALPHABET_LEN: usize = 26;

const fn build_square() -> [[u8; ALPHABET_LEN]; ALPHABET_LEN] {
    let mut square = [[0u8; ALPHABET_LEN]; ALPHABET_LEN];
    let mut row = 0;
    while row < ALPHABET_LEN {
        let mut column = 0;
        while column < ALPHABET_LEN {
            square[row][column] = b'a' + ((row + column) % ALPHABET_LEN) as u8;
            column += 1;
        }
        row += 1;
    }
    square
}

/// Vigenère tableau: row `k`, column `p` holds the encryption of `p` under `k`
const SQUARE: [[u8; ALPHABET_LEN]; ALPHABET_LEN] = build_square();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VigenereMode {
    Autokey,
    RunningKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: String,
}

impl Vigenere {
    pub const DEFAULT_KEY: &'static str = "k";

    pub fn new(key: &str) -> Self {
        let mut vigenere = Self::default();
        let _ = vigenere.set_key(key.to_string());
        vigenere
    }

    /// A valid key contains at least one ASCII letter
    pub fn valid_key(key: &str) -> bool {
        key.chars().any(|c| c.is_ascii_alphabetic())
    }

    pub fn mode(&self) -> VigenereMode {
        if self.key.len() == 1 {
            VigenereMode::Autokey
        } else {
            VigenereMode::RunningKey
        }
    }

    /// The 26x26 tableau
    pub fn square() -> &'static [[u8; ALPHABET_LEN]; ALPHABET_LEN] {
        &SQUARE
    }
}

fn letter_index(c: char) -> usize {
    (c.to_ascii_lowercase() as u8 - b'a') as usize
}

/// Looks `c` up in tableau row `row`, keeping the case of `c`
fn substitute(c: char, row: usize) -> char {
    let symbol = SQUARE[row][letter_index(c)] as char;
    if c.is_ascii_uppercase() {
        symbol.to_ascii_uppercase()
    } else {
        symbol
    }
}

fn inverse_row(row: usize) -> usize {
    (ALPHABET_LEN - row) % ALPHABET_LEN
}

fn running_key(text: &str, key: &[usize], decrypt: bool) -> String {
    let mut position = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let row = key[position % key.len()];
            position += 1;
            if decrypt {
                substitute(c, inverse_row(row))
            } else {
                substitute(c, row)
            }
        })
        .collect()
}

fn key_indices(key: &str) -> Vec<usize> {
    key.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(letter_index)
        .collect()
}

/// Decrypts with `key` repeated, whatever its length
pub(crate) fn running_key_decrypt(ciphertext: &str, key: &str) -> String {
    let key = key_indices(key);
    if key.is_empty() {
        return ciphertext.to_string();
    }
    running_key(ciphertext, &key, true)
}

impl Default for Vigenere {
    fn default() -> Self {
        Self {
            key: Self::DEFAULT_KEY.to_string(),
        }
    }
}

impl Cipher for Vigenere {
    type Key = String;

    fn key(&self) -> String {
        self.key.clone()
    }

    /// Non-letters are dropped from the key and the rest is lower cased
    fn set_key(&mut self, key: String) -> Result<()> {
        if !Self::valid_key(&key) {
            warn!(%key, "invalid Vigenere key, using default");
            self.key = Self::DEFAULT_KEY.to_string();
            return Err(CipherError::InvalidKey(key));
        }

        self.key = key
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(())
    }

    fn encrypt(&self, plaintext: &str) -> String {
        match self.mode() {
            VigenereMode::RunningKey => running_key(plaintext, &key_indices(&self.key), false),
            VigenereMode::Autokey => {
                let mut row = letter_index(self.key.chars().next().unwrap_or('k'));
                plaintext
                    .chars()
                    .map(|c| {
                        if !c.is_ascii_alphabetic() {
                            return c;
                        }
                        let encrypted = substitute(c, row);
                        row = letter_index(c);
                        encrypted
                    })
                    .collect()
            }
        }
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        match self.mode() {
            VigenereMode::RunningKey => running_key(ciphertext, &key_indices(&self.key), true),
            VigenereMode::Autokey => {
                let mut row = letter_index(self.key.chars().next().unwrap_or('k'));
                ciphertext
                    .chars()
                    .map(|c| {
                        if !c.is_ascii_alphabetic() {
                            return c;
                        }
                        let decrypted = substitute(c, inverse_row(row));
                        row = letter_index(decrypted);
                        decrypted
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for Vigenere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vigenere Cipher:\nkey = {}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let square = Vigenere::square();
        assert_eq!(&square[0][..3], b"abc");
        assert_eq!(square[1][25], b'a');
        assert_eq!(square[25][25], b'y');
    }

    #[test]
    fn test_running_key() {
        let vigenere = Vigenere::new("LEMON");
        assert_eq!(vigenere.key(), "lemon");
        assert_eq!(vigenere.mode(), VigenereMode::RunningKey);
        assert_eq!(vigenere.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
        assert_eq!(vigenere.encrypt("attack at dawn"), "lxfopv ef rnhr");
        assert_eq!(vigenere.decrypt("lxfopv ef rnhr"), "attack at dawn");
    }

    #[test]
    fn test_autokey() {
        let vigenere = Vigenere::default();
        assert_eq!(vigenere.mode(), VigenereMode::Autokey);
        assert_eq!(vigenere.encrypt("Hello"), "Rlpwz");
        assert_eq!(vigenere.decrypt("Rlpwz"), "Hello");
    }

    #[test]
    fn test_round_trip_preserves_non_letters() {
        let plaintext = "Grüße, 42 Cats & Dogs!\nNew line.";
        for key in ["x", "key", "Running Key"] {
            let vigenere = Vigenere::new(key);
            assert_eq!(vigenere.decrypt(&vigenere.encrypt(plaintext)), plaintext);
        }
    }

    #[test]
    fn test_running_key_decrypt_repeats_short_key() {
        let caesar = running_key_decrypt("khoor", "d");
        assert_eq!(caesar, "hello");
        assert_eq!(running_key_decrypt("lxfopv", "lemon"), "attack");
    }

    #[test]
    fn test_invalid_key_falls_back_to_default() {
        let mut vigenere = Vigenere::new("lemon");
        assert!(matches!(
            vigenere.set_key("1234 !".to_string()),
            Err(CipherError::InvalidKey(_))
        ));
        assert_eq!(vigenere.key(), Vigenere::DEFAULT_KEY);
        assert_eq!(Vigenere::new("").key(), Vigenere::DEFAULT_KEY);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vigenere::new("ruby").to_string(), "Vigenere Cipher:\nkey = ruby");
    }
}
