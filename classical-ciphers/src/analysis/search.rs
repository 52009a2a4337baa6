//! Search loops shared by the cryptanalysis drivers
//!
//! Candidates are produced lazily in a fixed order, so both searches are
//! deterministic: `first_plausible` stops at the first hit and
//! `lowest_chi_squared` keeps the earliest candidate on ties.

use tracing::debug;

use super::{Score, ScoredCandidate};
use crate::dictionary::Dictionary;
use crate::stats;

/// First candidate whose decryption is plausible plaintext
pub fn first_plausible<K, I, F>(
    candidates: I,
    dictionary: &Dictionary,
    threshold: f64,
    mut decrypt: F,
) -> Option<ScoredCandidate<K>>
where
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> String,
{
    candidates.into_iter().find_map(|key| {
        let plaintext = decrypt(&key);
        if !dictionary.is_plausible_plaintext(&plaintext, threshold) {
            return None;
        }

        let ratio = dictionary.match_ratio(&plaintext);
        debug!(ratio, "plausible plaintext found");
        Some(ScoredCandidate {
            key,
            plaintext,
            score: Score::MatchRatio(ratio),
        })
    })
}

/// Candidate with the strictly lowest chi-squared score. Decryptions
/// without letters cannot be scored and are skipped.
pub fn lowest_chi_squared<K, I, F>(candidates: I, mut decrypt: F) -> Option<ScoredCandidate<K>>
where
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> String,
{
    candidates.into_iter().fold(None, |best, key| {
        let plaintext = decrypt(&key);
        let Ok(chi) = stats::chi_squared(&plaintext, stats::DEFAULT_LANGUAGE) else {
            return best;
        };

        match best {
            Some(best) if chi >= best.score.value() => Some(best),
            _ => Some(ScoredCandidate {
                key,
                plaintext,
                score: Score::ChiSquared(chi),
            }),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cipher;
    use crate::ciphers::Shift;

    #[test]
    fn test_first_plausible_stops_at_first_hit() {
        let dictionary = Dictionary::from_words(["hello", "world"]);
        let mut tried = Vec::new();
        let candidates = ["xyz", "hello world", "world hello"];
        let found = first_plausible(candidates, &dictionary, 0.9, |text| {
            tried.push(text.to_string());
            text.to_string()
        })
        .unwrap();

        assert_eq!(found.key, "hello world");
        assert_eq!(found.score, Score::MatchRatio(1.0));
        assert_eq!(tried, ["xyz", "hello world"]);
    }

    #[test]
    fn test_first_plausible_exhausted() {
        let dictionary = Dictionary::from_words(["hello"]);
        let found = first_plausible(0..5, &dictionary, 0.5, |n| n.to_string());
        assert!(found.is_none());
    }

    #[test]
    fn test_lowest_chi_squared_picks_english() {
        let ciphertext =
            Shift::new((7, 26, 51)).encrypt("the weather is nice and the sea is calm today");
        let best = lowest_chi_squared(0..26, |&shifts| {
            Shift::new((shifts, 26, 51)).decrypt(&ciphertext)
        })
        .unwrap();
        assert_eq!(best.key, 7);
        assert_eq!(best.plaintext, "the weather is nice and the sea is calm today");
        assert!(matches!(best.score, Score::ChiSquared(_)));
    }

    #[test]
    fn test_lowest_chi_squared_keeps_first_on_tie() {
        let texts = ["abc", "bca", "cab"];
        let best = lowest_chi_squared(0..texts.len(), |&i| texts[i].to_string()).unwrap();
        assert_eq!(best.key, 0);
    }

    #[test]
    fn test_lowest_chi_squared_skips_unscorable() {
        assert!(lowest_chi_squared(["123", "!!"], |text| text.to_string()).is_none());
        let best = lowest_chi_squared(["123", "eat"], |text| text.to_string()).unwrap();
        assert_eq!(best.key, "eat");
    }
}
