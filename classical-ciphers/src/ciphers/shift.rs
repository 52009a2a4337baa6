//! Shift cipher: a generalised Caesar cipher over a window of printable ASCII
//!
//! Key `(shifts, start, end)` selects the window `BASE[start..=end]`; every
//! symbol inside the window is replaced by the symbol `shifts` positions
//! further along (circular). Symbols outside the window are left unchanged.

use std::fmt;

use tracing::warn;

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils::{self, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    key: (i64, usize, usize),
}

impl Shift {
    /// Upper, lower, digits, punctuation and space
    pub const BASE: &'static str = concat!(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ "
    );
    /// Lower case Caesar cipher
    pub const DEFAULT_KEY: (i64, usize, usize) = (3, 26, 51);

    pub fn new(key: (i64, usize, usize)) -> Self {
        let mut cipher = Self::default();
        let _ = cipher.set_key(key);
        cipher
    }

    /// Any shift is valid; the window must be at least two symbols inside BASE
    pub fn valid_key(key: (i64, usize, usize)) -> bool {
        let (_, start, end) = key;
        start < end && end < Self::BASE.len()
    }

    /// Symbols of the active window
    pub fn base(&self) -> &'static str {
        let (_, start, end) = self.key;
        &Self::BASE[start..=end]
    }

    /// The window shifted left by the key: `base[i]` encrypts to `substitution[i]`
    pub fn substitution(&self) -> String {
        utils::shift_string(self.base(), self.key.0, Direction::Left)
    }

    fn substitute(text: &str, from: &str, to: &str) -> String {
        text.chars()
            .map(|c| match from.chars().position(|symbol| symbol == c) {
                Some(index) => to.chars().nth(index).unwrap_or(c),
                None => c,
            })
            .collect()
    }
}

impl Default for Shift {
    fn default() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
        }
    }
}

impl Cipher for Shift {
    type Key = (i64, usize, usize);

    fn key(&self) -> (i64, usize, usize) {
        self.key
    }

    /// Negative shifts are normalised modulo the window size
    fn set_key(&mut self, key: (i64, usize, usize)) -> Result<()> {
        if !Self::valid_key(key) {
            warn!(?key, "invalid Shift key, using default");
            self.key = Self::DEFAULT_KEY;
            return Err(CipherError::InvalidKey(format!("{key:?}")));
        }

        let (shifts, start, end) = key;
        self.key = (shifts.rem_euclid((end - start + 1) as i64), start, end);
        Ok(())
    }

    fn encrypt(&self, plaintext: &str) -> String {
        Self::substitute(plaintext, self.base(), &self.substitution())
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        Self::substitute(ciphertext, &self.substitution(), self.base())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shift Cipher:\nkey = {:?}\nbase = {}\nsub  = {}",
            self.key,
            self.base(),
            self.substitution()
        )
    }
}
