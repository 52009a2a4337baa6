//! Alberti cipher disk (1472)
//!
//! The outer wheel holds `a..z0..9`, the inner wheel a permutation of the
//! same symbols. The key `(pointer, in_wheel)` aligns `pointer` on the inner
//! wheel with `a` on the outer wheel.
//!
//! - **Default** mode substitutes outer to inner with the given inner wheel.
//! - **Simple** mode does the same but always uses the default inner wheel.
//! - **Periodic** mode also turns the inner wheel one step clockwise after
//!   every [`Alberti::PERIOD`] characters.
//!
//! Substitution is case-insensitive and its output is lower case. Characters
//! not on the wheels pass through unchanged.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use tracing::{error, warn};

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils::{self, Direction};

/// Operating mode of the Alberti disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlbertiMode {
    #[default]
    Default,
    Simple,
    Periodic,
}

impl AlbertiMode {
    pub const ALL: [AlbertiMode; 3] = [
        AlbertiMode::Default,
        AlbertiMode::Simple,
        AlbertiMode::Periodic,
    ];
}

impl FromStr for AlbertiMode {
    type Err = CipherError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(AlbertiMode::Default),
            "simple" => Ok(AlbertiMode::Simple),
            "periodic" => Ok(AlbertiMode::Periodic),
            _ => {
                error!(mode = name, "unsupported Alberti mode");
                Err(CipherError::UnsupportedMode(name.to_string()))
            }
        }
    }
}

impl fmt::Display for AlbertiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlbertiMode::Default => "default",
            AlbertiMode::Simple => "simple",
            AlbertiMode::Periodic => "periodic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alberti {
    pointer: char,
    in_wheel: String,
    mode: AlbertiMode,
}

impl Alberti {
    pub const OUT_WHEEL: &'static str = "abcdefghijklmnopqrstuvwxyz0123456789";
    pub const DEFAULT_KEY: (char, &'static str) = ('k', "k0v9p1j8m2r7d3l5g4a6zteunwbosfchyqix");
    /// Characters between two turns of the wheel in periodic mode
    pub const PERIOD: usize = 8;

    pub fn new(key: (char, String), mode: AlbertiMode) -> Self {
        let mut alberti = Self::default();
        alberti.set_mode(mode);
        let _ = alberti.set_key(key);
        alberti
    }

    /// The pointer must be a wheel symbol and the inner wheel a permutation
    /// of the outer wheel.
    pub fn valid_key(pointer: char, in_wheel: &str) -> bool {
        let mut symbols: Vec<char> = in_wheel.chars().map(|c| c.to_ascii_lowercase()).collect();
        symbols.sort_unstable();

        let mut expected: Vec<char> = Self::OUT_WHEEL.chars().collect();
        expected.sort_unstable();

        Self::OUT_WHEEL.contains(pointer) && symbols == expected
    }

    pub fn mode(&self) -> AlbertiMode {
        self.mode
    }

    /// Switching to simple mode resets the inner wheel to the default wheel
    pub fn set_mode(&mut self, mode: AlbertiMode) {
        self.mode = mode;
        if mode == AlbertiMode::Simple {
            self.in_wheel = Self::DEFAULT_KEY.1.to_string();
        }
    }

    /// Outer wheel and inner wheel turned so that the pointer faces `a`
    pub fn wheels(&self) -> (&'static str, String) {
        let offset = self
            .in_wheel
            .chars()
            .position(|c| c == self.pointer)
            .unwrap_or_default();
        (
            Self::OUT_WHEEL,
            utils::shift_string(&self.in_wheel, offset as i64, Direction::Left),
        )
    }

    /// Random arrangement of the outer wheel symbols
    pub fn random_wheel() -> String {
        let mut symbols: Vec<char> = Self::OUT_WHEEL.chars().collect();
        symbols.shuffle(&mut rand::thread_rng());
        symbols.into_iter().collect()
    }

    fn substitute(&self, text: &str, direction: Direction) -> String {
        let (out_wheel, in_wheel) = self.wheels();
        let out_wheel: Vec<char> = out_wheel.chars().collect();
        let mut in_wheel: Vec<char> = in_wheel.chars().collect();

        let mut result = String::with_capacity(text.len());
        for (i, c) in text.chars().enumerate() {
            let symbol = c.to_ascii_lowercase();
            let (from, to) = match direction {
                Direction::Left => (&out_wheel, &in_wheel),
                Direction::Right => (&in_wheel, &out_wheel),
            };
            match from.iter().position(|&s| s == symbol) {
                Some(index) => result.push(to[index]),
                None => result.push(c),
            }

            if self.mode == AlbertiMode::Periodic && (i + 1) % Self::PERIOD == 0 {
                in_wheel.rotate_right(1);
            }
        }

        result
    }
}

impl Default for Alberti {
    fn default() -> Self {
        Self {
            pointer: Self::DEFAULT_KEY.0,
            in_wheel: Self::DEFAULT_KEY.1.to_string(),
            mode: AlbertiMode::Default,
        }
    }
}

impl Cipher for Alberti {
    type Key = (char, String);

    fn key(&self) -> (char, String) {
        (self.pointer, self.in_wheel.clone())
    }

    /// In simple mode only the pointer is taken from the key
    fn set_key(&mut self, key: (char, String)) -> Result<()> {
        let (pointer, in_wheel) = key;
        let pointer = pointer.to_ascii_lowercase();

        if !Self::valid_key(pointer, &in_wheel) {
            warn!(%pointer, %in_wheel, "invalid Alberti key, using default");
            self.pointer = Self::DEFAULT_KEY.0;
            self.in_wheel = Self::DEFAULT_KEY.1.to_string();
            return Err(CipherError::InvalidKey(format!("({pointer:?}, {in_wheel:?})")));
        }

        self.pointer = pointer;
        self.in_wheel = match self.mode {
            AlbertiMode::Simple => Self::DEFAULT_KEY.1.to_string(),
            _ => in_wheel.to_ascii_lowercase(),
        };
        Ok(())
    }

    fn encrypt(&self, plaintext: &str) -> String {
        self.substitute(plaintext, Direction::Left)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        self.substitute(ciphertext, Direction::Right)
    }
}

impl fmt::Display for Alberti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (out_wheel, in_wheel) = self.wheels();
        write!(
            f,
            "Alberti Cipher:\nkey = ({:?}, {:?}), mode = {}\n{out_wheel}\n{in_wheel}",
            self.pointer, self.in_wheel, self.mode
        )
    }
}
