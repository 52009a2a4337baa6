//! Scytale transposition cipher
//!
//! The key is the number of rows wrapped around the rod. Plaintext is written
//! row by row into a `key x ceil(len / key)` grid and read column by column.
//! Empty cells of the last row are filled with the pad character, or skipped
//! when no pad is set.

use std::fmt;

use tracing::warn;

use super::parse_pad;
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scytale {
    key: usize,
    pad: Option<char>,
}

impl Scytale {
    pub const DEFAULT_KEY: usize = 4;
    pub const DEFAULT_PAD: Option<char> = Some('Q');

    /// Create a Scytale cipher. An empty pad disables padding; an invalid key
    /// or pad is replaced by its default.
    pub fn new(key: usize, pad: &str) -> Self {
        let mut scytale = Self::default();
        let _ = scytale.set_key(key);
        let _ = scytale.set_pad(pad);
        scytale
    }

    /// A valid key is at least one row
    pub fn valid_key(key: usize) -> bool {
        key >= 1
    }

    pub fn pad(&self) -> Option<char> {
        self.pad
    }

    /// Set the pad: a single character, or an empty string for no padding
    pub fn set_pad(&mut self, pad: &str) -> Result<()> {
        match parse_pad(pad) {
            Some(pad) => {
                self.pad = pad;
                Ok(())
            }
            None => {
                warn!(pad, "invalid Scytale pad, using default");
                self.pad = Self::DEFAULT_PAD;
                Err(CipherError::InvalidPad(pad.to_string()))
            }
        }
    }
}

impl Default for Scytale {
    fn default() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
            pad: Self::DEFAULT_PAD,
        }
    }
}

impl Cipher for Scytale {
    type Key = usize;

    fn key(&self) -> usize {
        self.key
    }

    fn set_key(&mut self, key: usize) -> Result<()> {
        if Self::valid_key(key) {
            self.key = key;
            Ok(())
        } else {
            warn!(key, "invalid Scytale key, using default");
            self.key = Self::DEFAULT_KEY;
            Err(CipherError::InvalidKey(key.to_string()))
        }
    }

    fn encrypt(&self, plaintext: &str) -> String {
        let newlines = utils::get_positions(plaintext, "\n");
        let text: Vec<char> = utils::clean_text(plaintext, "\n").chars().collect();

        let rows = self.key;
        let columns = text.len().div_ceil(rows);

        let mut ciphertext = String::with_capacity(rows * columns);
        for column in 0..columns {
            for row in 0..rows {
                match text.get(row * columns + column) {
                    Some(&c) => ciphertext.push(c),
                    None => ciphertext.extend(self.pad),
                }
            }
        }

        utils::insert_positions(&ciphertext, &newlines)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        let newlines = utils::get_positions(ciphertext, "\n");
        let text: Vec<char> = utils::clean_text(ciphertext, "\n").chars().collect();

        let rows = self.key;
        let columns = text.len().div_ceil(rows);

        // Cells past the text length in row-major order are the holes left
        // by an unpadded encryption
        let mut grid: Vec<Option<char>> = vec![None; rows * columns];
        let mut symbols = text.iter();
        for column in 0..columns {
            for row in 0..rows {
                let cell = row * columns + column;
                if cell < text.len() {
                    grid[cell] = symbols.next().copied();
                }
            }
        }

        let plaintext: String = grid.into_iter().flatten().collect();
        let plaintext = match self.pad {
            Some(pad) => plaintext.trim_end_matches(pad),
            None => plaintext.as_str(),
        };

        utils::insert_positions(plaintext, &newlines)
    }
}

impl fmt::Display for Scytale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scytale Cipher:\nkey = {}, ", self.key)?;
        match self.pad {
            Some(pad) => write!(f, "pad = {pad}"),
            None => write!(f, "no padding"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_with_padding() {
        let scytale = Scytale::new(3, "Q");
        assert_eq!(scytale.encrypt("attack at dawn"), "akdt atawatnc Q");
        assert_eq!(scytale.decrypt("akdt atawatnc Q"), "attack at dawn");
    }

    #[test]
    fn test_encrypt_without_padding() {
        let scytale = Scytale::new(3, "");
        assert_eq!(scytale.pad(), None);
        assert_eq!(scytale.encrypt("attack at dawn"), "akdt atawatnc ");
        assert_eq!(scytale.decrypt("akdt atawatnc "), "attack at dawn");
    }

    #[test]
    fn test_round_trip() {
        for key in 1..8 {
            for plaintext in ["hello world", "abcdefghij", "x", "the quick brown fox", ""] {
                let padded = Scytale::new(key, "Q");
                assert_eq!(padded.decrypt(&padded.encrypt(plaintext)), plaintext);

                let unpadded = Scytale::new(key, "");
                assert_eq!(unpadded.decrypt(&unpadded.encrypt(plaintext)), plaintext);
            }
        }
    }

    #[test]
    fn test_newlines_keep_their_offsets() {
        let scytale = Scytale::new(4, "Q");
        let plaintext = "first line\nsecond line\nthird";
        let ciphertext = scytale.encrypt(plaintext);
        assert_eq!(ciphertext.find('\n'), Some(10));
        assert_eq!(scytale.decrypt(&ciphertext), plaintext);
    }

    #[test]
    fn test_invalid_key_falls_back_to_default() {
        let mut scytale = Scytale::new(6, "Q");
        assert!(matches!(scytale.set_key(0), Err(CipherError::InvalidKey(_))));
        assert_eq!(scytale.key(), Scytale::DEFAULT_KEY);

        let ciphertext = scytale.encrypt("defaults still work");
        assert_eq!(scytale.decrypt(&ciphertext), "defaults still work");
        assert_eq!(Scytale::new(0, "Q").key(), Scytale::DEFAULT_KEY);
    }

    #[test]
    fn test_invalid_pad_falls_back_to_default() {
        let mut scytale = Scytale::new(5, "");
        assert!(matches!(scytale.set_pad("xy"), Err(CipherError::InvalidPad(_))));
        assert_eq!(scytale.pad(), Scytale::DEFAULT_PAD);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scytale::default().to_string(), "Scytale Cipher:\nkey = 4, pad = Q");
        assert_eq!(Scytale::new(2, "").to_string(), "Scytale Cipher:\nkey = 2, no padding");
    }
}
