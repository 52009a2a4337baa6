use tracing::debug;

use super::{exhausted, search, ScoredCandidate, ShiftParams};
use crate::alphabet;
use crate::ciphers::vigenere::running_key_decrypt;
use crate::ciphers::{Shift, Vigenere};
use crate::error::Result;
use crate::key_length;
use crate::utils;

/// Lowercase ASCII letters of `text`
fn letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Solve every basket of a `key_length` split as a Caesar cipher over the
/// lowercase alphabet and spell the shifts as a key.
fn recover_key(letters: &str, key_length: usize) -> Result<String> {
    let blocks = utils::text_to_blocks(letters, key_length, Some(utils::PAD));
    let baskets = utils::blocks_to_baskets(&blocks)?;
    let params = ShiftParams {
        base: Some(alphabet::LOWER.to_string()),
        ..Default::default()
    };

    baskets
        .iter()
        .map(|basket| {
            let found = Shift::cryptanalyze(basket, &params)?;
            Ok((b'a' + found.key.0 as u8) as char)
        })
        .collect()
}

impl Vigenere {
    /// Candidate key lengths of a ciphertext, most likely first
    pub fn cryptanalyze_key_length(ciphertext: &str) -> Result<Vec<usize>> {
        key_length::candidate_key_lengths(&letters(ciphertext))
    }

    /// Recover a key for every candidate key length and keep the one whose
    /// decryption has the lowest chi-squared score. The key is applied as a
    /// repeating key even when it is a single letter.
    pub fn cryptanalyze(ciphertext: &str) -> Result<ScoredCandidate<String>> {
        let letters = letters(ciphertext);
        let key_lengths = key_length::candidate_key_lengths(&letters)?;

        let keys: Vec<String> = key_lengths
            .into_iter()
            .filter_map(|k| recover_key(&letters, k).ok())
            .collect();
        debug!(?keys, "Vigenere candidate keys");

        search::lowest_chi_squared(keys, |key| running_key_decrypt(ciphertext, key))
            .ok_or_else(|| exhausted("Vigenere"))
    }
}
