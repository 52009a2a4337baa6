//! Ciphertext-only cryptanalysis
//!
//! Every cipher gets a `cryptanalyze` associated function. Transposition
//! ciphers and the Alberti disk are attacked by brute force, accepting the
//! first candidate whose decryption is plausible plaintext according to a
//! [`Dictionary`](crate::dictionary::Dictionary). Shift and Vigenère ciphers
//! are scored with the chi-squared statistic and the lowest score wins.
//!
//! Drivers that exhaust their search space return
//! [`CipherError::CryptanalysisFailed`].

mod alberti;
mod block_rotate;
mod scytale;
pub mod search;
mod shift;
mod vigenere;

pub use alberti::AlbertiParams;
pub use block_rotate::BlockRotateParams;
pub use scytale::ScytaleParams;
pub use shift::ShiftParams;

use tracing::{error, warn};

use crate::dictionary::DEFAULT_THRESHOLD;
use crate::error::CipherError;

/// Score of a candidate decryption. The two scales are never compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Fraction of dictionary words, higher is better
    MatchRatio(f64),
    /// Chi-squared against English, lower is better
    ChiSquared(f64),
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::MatchRatio(value) | Score::ChiSquared(value) => value,
        }
    }
}

/// A recovered key with its decryption
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<K> {
    pub key: K,
    pub plaintext: String,
    pub score: Score,
}

impl<K> ScoredCandidate<K> {
    pub(crate) fn map_key<T>(self, f: impl FnOnce(K) -> T) -> ScoredCandidate<T> {
        ScoredCandidate {
            key: f(self.key),
            plaintext: self.plaintext,
            score: self.score,
        }
    }
}

pub(crate) fn exhausted(cipher: &'static str) -> CipherError {
    error!("{cipher} cryptanalysis failed");
    CipherError::CryptanalysisFailed(cipher)
}

pub(crate) fn checked_threshold(threshold: f64) -> f64 {
    if (0.0..=1.0).contains(&threshold) {
        threshold
    } else {
        warn!(threshold, "invalid threshold, using {DEFAULT_THRESHOLD}");
        DEFAULT_THRESHOLD
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_value() {
        assert_eq!(Score::MatchRatio(0.75).value(), 0.75);
        assert_eq!(Score::ChiSquared(12.5).value(), 12.5);
    }

    #[test]
    fn test_exhausted_names_cipher() {
        let err = exhausted("Scytale");
        assert_eq!(err, CipherError::CryptanalysisFailed("Scytale"));
        assert_eq!(err.to_string(), "Scytale cryptanalysis failed");
    }

    #[test]
    fn test_checked_threshold() {
        assert_eq!(checked_threshold(0.8), 0.8);
        assert_eq!(checked_threshold(1.5), DEFAULT_THRESHOLD);
        assert_eq!(checked_threshold(-0.1), DEFAULT_THRESHOLD);
    }
}
