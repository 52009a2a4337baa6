//! Symbol sets and reference language models

use std::fmt;
use std::str::FromStr;

use tracing::error;

use crate::error::{CipherError, Result};

pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Printable ASCII punctuation from `!` to `~`
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Upper, lower, digits and punctuation
pub const ALL: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"
);

/// Symbols of the 6-bit B6 code, in code order
pub const B6: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ \n";

const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const LOWERNUM: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
const UPPERNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ALPHANUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const NONALPHA: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~0123456789";
const BA: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \n"
);

/// English letter frequencies, a..z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015,
    0.06094, 0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749,
    0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056, 0.02758,
    0.00978, 0.0236, 0.0015, 0.01974, 0.00074,
];

/// Named subsets of printable ASCII
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Lower,
    Upper,
    Alpha,
    LowerNum,
    UpperNum,
    AlphaNum,
    Special,
    NonAlpha,
    B6,
    BA,
    All,
}

impl Base {
    pub fn symbols(self) -> &'static str {
        match self {
            Base::Lower => LOWER,
            Base::Upper => UPPER,
            Base::Alpha => ALPHA,
            Base::LowerNum => LOWERNUM,
            Base::UpperNum => UPPERNUM,
            Base::AlphaNum => ALPHANUM,
            Base::Special => SPECIAL,
            Base::NonAlpha => NONALPHA,
            Base::B6 => B6,
            Base::BA => BA,
            Base::All => ALL,
        }
    }
}

impl FromStr for Base {
    type Err = CipherError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "lower" => Ok(Base::Lower),
            "upper" => Ok(Base::Upper),
            "alpha" => Ok(Base::Alpha),
            "lowernum" => Ok(Base::LowerNum),
            "uppernum" => Ok(Base::UpperNum),
            "alphanum" => Ok(Base::AlphaNum),
            "special" => Ok(Base::Special),
            "nonalpha" => Ok(Base::NonAlpha),
            "B6" => Ok(Base::B6),
            "BA" => Ok(Base::BA),
            "all" => Ok(Base::All),
            _ => {
                error!(base = name, "undefined base type");
                Err(CipherError::UnsupportedBase(name.to_string()))
            }
        }
    }
}

/// Reference language for chi-squared scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// Letter probabilities a..z
    pub fn frequencies(self) -> &'static [f64; 26] {
        match self {
            Language::English => &ENGLISH_FREQUENCIES,
        }
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "English" => Ok(Language::English),
            _ => {
                error!(language = name, "unsupported language");
                Err(CipherError::UnsupportedLanguage(name.to_string()))
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sizes() {
        assert_eq!(Base::Lower.symbols().len(), 26);
        assert_eq!(Base::Special.symbols().len(), 32);
        assert_eq!(Base::B6.symbols().len(), 64);
        assert_eq!(Base::BA.symbols().len(), 96);
        assert_eq!(Base::All.symbols().len(), 94);
        assert_eq!(Base::NonAlpha.symbols().len(), 42);
    }

    #[test]
    fn test_special_excludes_alphanumerics() {
        assert!(SPECIAL.chars().all(|c| !c.is_ascii_alphanumeric()));
        assert_eq!(ALL, format!("{UPPER}{LOWER}{DIGITS}{SPECIAL}"));
    }

    #[test]
    fn test_base_from_str() {
        assert_eq!("lowernum".parse::<Base>().unwrap(), Base::LowerNum);
        assert!(matches!(
            "hex".parse::<Base>(),
            Err(CipherError::UnsupportedBase(_))
        ));
    }

    #[test]
    fn test_language() {
        let english: Language = "English".parse().unwrap();
        let total: f64 = english.frequencies().iter().sum();
        assert!((total - 1.0).abs() < 0.01);
        assert!(matches!(
            "Klingon".parse::<Language>(),
            Err(CipherError::UnsupportedLanguage(_))
        ));
    }
}
