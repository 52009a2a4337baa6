use tracing::debug;

use super::{checked_threshold, exhausted, search, ScoredCandidate};
use crate::cipher::Cipher;
use crate::ciphers::Scytale;
use crate::dictionary::Dictionary;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScytaleParams {
    /// Largest row count tried (inclusive)
    pub max_key: usize,
    pub threshold: f64,
}

impl Default for ScytaleParams {
    fn default() -> Self {
        Self {
            max_key: 100,
            threshold: 0.9,
        }
    }
}

impl Scytale {
    /// Brute force the row count from 1 to `max_key`, stripping the default
    /// pad from each candidate. The first plausible plaintext wins.
    pub fn cryptanalyze(
        ciphertext: &str,
        dictionary: &Dictionary,
        params: &ScytaleParams,
    ) -> Result<ScoredCandidate<usize>> {
        let threshold = checked_threshold(params.threshold);
        debug!(max_key = params.max_key, threshold, "Scytale cryptanalysis");

        search::first_plausible(1..=params.max_key, dictionary, threshold, |&key| {
            let mut scytale = Scytale::default();
            let _ = scytale.set_key(key);
            scytale.decrypt(ciphertext)
        })
        .ok_or_else(|| exhausted("Scytale"))
    }
}
