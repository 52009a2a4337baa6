//! Key length estimation for polyalphabetic ciphers
//!
//! Two independent estimates are combined:
//!
//! - **Friedman's test** derives the key length from the index of coincidence.
//! - **Cipher shifting** compares the ciphertext with shifted copies of itself;
//!   shifts that are multiples of the key length line up letters encrypted
//!   with the same key symbol and produce more coincidences.

use tracing::{debug, warn};

use crate::error::{CipherError, Result};
use crate::stats;

/// Parameters of the cipher shifting test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftingParams {
    /// Shifts above this bound are reduced modulo the bound
    pub max_key_length: usize,
    /// Shifts `1..factor` are tried
    pub factor: usize,
}

impl Default for ShiftingParams {
    fn default() -> Self {
        Self {
            max_key_length: 20,
            factor: 26,
        }
    }
}

/// Friedman's test. Returns the two integers adjacent to the estimate,
/// nearest first: 3.2 gives `[3, 4]`, 4.8 gives `[5, 4]`.
///
/// ```text
///            0.0265 N
/// K = -------------------------
///     (0.065 - I) + N(I - 0.0385)
/// ```
pub fn friedman(ciphertext: &str) -> Result<[usize; 2]> {
    if ciphertext.is_empty() {
        return Err(CipherError::EmptyText);
    }

    let ic = stats::index_of_coincidence(ciphertext);
    let n = ciphertext.chars().count() as f64;
    let k = (0.0265 * n) / ((0.065 - ic) + n * (ic - 0.0385));

    if !k.is_finite() || k < 1.0 {
        debug!(estimate = k, "degenerate Friedman estimate");
        return Ok([1, 2]);
    }

    let floor = k.trunc() as usize;
    let estimate = if k - k.trunc() < 0.5 {
        [floor, floor + 1]
    } else {
        [floor + 1, floor]
    };
    debug!(k, ?estimate, "Friedman's test");

    Ok(estimate)
}

/// Cipher shifting test. Everything but ASCII letters is removed first; upper
/// and lower case letters are distinct symbols. The text is rotated right by
/// each trial shift and compared with itself, wrapping around at the end.
/// Returns the two shifts with the most coincidences; on a tie the shift
/// found first is kept.
pub fn cipher_shifting(ciphertext: &str, params: &ShiftingParams) -> Result<[usize; 2]> {
    let max_key_length = if params.max_key_length == 0 {
        warn!("cipher_shifting: max key length must be > 0, using default");
        ShiftingParams::default().max_key_length
    } else {
        params.max_key_length
    };

    let text: Vec<char> = ciphertext.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if text.is_empty() {
        return Err(CipherError::EmptyText);
    }

    // (matches, shift) of the best and second best shift
    let mut best = [(0usize, 0usize); 2];
    let len = text.len();
    for shift in 1..params.factor {
        let matches = (0..len)
            .filter(|&i| text[i] == text[(i + len - shift % len) % len])
            .count();
        let key_length = if shift > max_key_length {
            shift % max_key_length
        } else {
            shift
        };

        if matches > best[0].0 {
            best[1] = best[0];
            best[0] = (matches, key_length);
        } else if matches > best[1].0 {
            best[1] = (matches, key_length);
        }
    }
    debug!(?best, "cipher shifting");

    Ok([best[0].1, best[1].1])
}

/// Candidate key lengths from both tests, deterministic order: Friedman
/// values confirmed by cipher shifting, the other Friedman values, then the
/// remaining cipher shifting values. Zero lengths are dropped.
pub fn candidate_key_lengths(ciphertext: &str) -> Result<Vec<usize>> {
    let friedman = friedman(ciphertext)?;
    let shifting = cipher_shifting(ciphertext, &ShiftingParams::default())?;

    let confirmed = friedman.iter().filter(|k| shifting.contains(k));
    let mut key_lengths: Vec<usize> = Vec::with_capacity(4);
    for &k in confirmed.chain(friedman.iter()).chain(shifting.iter()) {
        if k != 0 && !key_lengths.contains(&k) {
            key_lengths.push(k);
        }
    }
    debug!(?key_lengths, "candidate key lengths");

    Ok(key_lengths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friedman_rejects_empty() {
        assert!(matches!(friedman(""), Err(CipherError::EmptyText)));
    }

    #[test]
    fn test_friedman_monoalphabetic_text() {
        // A single repeated letter has I = 1: the estimate is below one key symbol
        assert_eq!(friedman("aaaaaaaaaaaaaaaaaaaa").unwrap(), [1, 2]);
    }

    #[test]
    fn test_friedman_ordering() {
        let ciphertext = "thequickbrownfoxjumpsoverthelazydogandkeepsrunningthroughthefield";
        let [first, second] = friedman(ciphertext).unwrap();
        assert_eq!(first.abs_diff(second), 1);
    }

    #[test]
    fn test_cipher_shifting_periodic_text() {
        // Period 3: every shift that is a multiple of 3 lines up completely
        let text = "abcabcabcabcabcabcabcabcabcabc";
        let params = ShiftingParams { max_key_length: 20, factor: 10 };
        assert_eq!(cipher_shifting(text, &params).unwrap(), [3, 6]);
    }

    #[test]
    fn test_cipher_shifting_reduces_long_shifts() {
        let text = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz";
        let params = ShiftingParams { max_key_length: 20, factor: 27 };
        // Only shift 26 produces coincidences; 26 % 20 == 6
        assert_eq!(cipher_shifting(text, &params).unwrap(), [6, 0]);
    }

    #[test]
    fn test_cipher_shifting_ignores_non_letters() {
        let params = ShiftingParams::default();
        assert_eq!(
            cipher_shifting("ab ab, ab; ab!", &params).unwrap(),
            cipher_shifting("abababab", &params).unwrap()
        );
        assert!(matches!(
            cipher_shifting("1234 !!", &params),
            Err(CipherError::EmptyText)
        ));
    }

    #[test]
    fn test_cipher_shifting_ignores_non_ascii_letters() {
        let params = ShiftingParams::default();
        assert_eq!(
            cipher_shifting("abcéabcéabcéabcéabcé", &params).unwrap(),
            cipher_shifting("abcabcabcabcabc", &params).unwrap()
        );
        assert!(matches!(
            cipher_shifting("éüß", &params),
            Err(CipherError::EmptyText)
        ));
    }

    #[test]
    fn test_cipher_shifting_wraps_around() {
        // Shift 3 only coincides across the wrap; shift 5 coincides without it
        let params = ShiftingParams { max_key_length: 20, factor: 6 };
        assert_eq!(cipher_shifting("abcdeabc", &params).unwrap(), [3, 5]);
    }

    #[test]
    fn test_candidate_key_lengths_without_duplicates() {
        let text = "abcabcabcabcabcabcabcabcabcabcabcabcabcabc";
        let lengths = candidate_key_lengths(text).unwrap();
        let mut unique = lengths.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), lengths.len());
        assert!(lengths.contains(&3));
        assert!(!lengths.contains(&0));
    }
}
