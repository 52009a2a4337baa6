//! Block rotate transposition cipher
//!
//! Key `(b, r)`: the text is split into blocks of `b` characters, the final
//! block padded, and every block is rotated left by `r` positions.

use std::fmt;

use tracing::warn;

use super::parse_pad;
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils::{self, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRotate {
    key: (usize, i64),
    pad: Option<char>,
}

impl BlockRotate {
    pub const DEFAULT_KEY: (usize, i64) = (1, 0);
    pub const DEFAULT_PAD: Option<char> = Some('q');

    pub fn new(key: (usize, i64), pad: &str) -> Self {
        let mut cipher = Self::default();
        let _ = cipher.set_key(key);
        let _ = cipher.set_pad(pad);
        cipher
    }

    /// A valid key has a positive block size; any rotation is accepted
    pub fn valid_key(key: (usize, i64)) -> bool {
        key.0 > 0
    }

    pub fn pad(&self) -> Option<char> {
        self.pad
    }

    pub fn set_pad(&mut self, pad: &str) -> Result<()> {
        match parse_pad(pad) {
            Some(pad) => {
                self.pad = pad;
                Ok(())
            }
            None => {
                warn!(pad, "invalid Block Rotate pad, using default");
                self.pad = Self::DEFAULT_PAD;
                Err(CipherError::InvalidPad(pad.to_string()))
            }
        }
    }

    fn rotate_blocks(&self, text: &str, direction: Direction) -> String {
        let newlines = utils::get_positions(text, "\n");
        let text = utils::clean_text(text, "\n");
        let (block_size, rotation) = self.key;

        let rotated: String = utils::text_to_blocks(&text, block_size, self.pad)
            .iter()
            .map(|block| utils::shift_string(block, rotation, direction))
            .collect();

        let rotated = match (direction, self.pad) {
            (Direction::Right, Some(pad)) => rotated.trim_end_matches(pad),
            _ => rotated.as_str(),
        };

        utils::insert_positions(rotated, &newlines)
    }
}

impl Default for BlockRotate {
    fn default() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
            pad: Self::DEFAULT_PAD,
        }
    }
}

impl Cipher for BlockRotate {
    type Key = (usize, i64);

    fn key(&self) -> (usize, i64) {
        self.key
    }

    /// The rotation is stored reduced modulo the block size
    fn set_key(&mut self, key: (usize, i64)) -> Result<()> {
        if Self::valid_key(key) {
            let (block_size, rotation) = key;
            self.key = (block_size, rotation.rem_euclid(block_size as i64));
            Ok(())
        } else {
            warn!(?key, "invalid Block Rotate key, using default");
            self.key = Self::DEFAULT_KEY;
            Err(CipherError::InvalidKey(format!("{key:?}")))
        }
    }

    fn encrypt(&self, plaintext: &str) -> String {
        self.rotate_blocks(plaintext, Direction::Left)
    }

    /// Rotates every block back and strips the trailing pad
    fn decrypt(&self, ciphertext: &str) -> String {
        self.rotate_blocks(ciphertext, Direction::Right)
    }
}

impl fmt::Display for BlockRotate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block Rotate Cipher:\nkey = {:?}, pad = ", self.key)?;
        match self.pad {
            Some(pad) => write!(f, "{pad}"),
            None => Ok(()),
        }
    }
}
