use tracing::{debug, warn};

use super::{checked_threshold, exhausted, search, ScoredCandidate};
use crate::cipher::Cipher;
use crate::ciphers::BlockRotate;
use crate::dictionary::Dictionary;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRotateParams {
    /// Smallest block size tried
    pub b0: usize,
    /// Largest block size tried (inclusive)
    pub bn: usize,
    /// Known rotation; every rotation `0..b` is tried when `None`
    pub rotation: Option<i64>,
    pub threshold: f64,
}

impl Default for BlockRotateParams {
    fn default() -> Self {
        Self {
            b0: 2,
            bn: 20,
            rotation: None,
            threshold: 0.8,
        }
    }
}

impl BlockRotate {
    /// Brute force block sizes `b0..=bn` and, unless known, every rotation of
    /// each block size. The first plausible plaintext wins.
    pub fn cryptanalyze(
        ciphertext: &str,
        dictionary: &Dictionary,
        params: &BlockRotateParams,
    ) -> Result<ScoredCandidate<(usize, i64)>> {
        let defaults = BlockRotateParams::default();
        let b0 = if params.b0 == 0 {
            warn!("minimum block size must be > 0, using {}", defaults.b0);
            defaults.b0
        } else {
            params.b0
        };
        let bn = if params.bn < 2 {
            warn!(bn = params.bn, "maximum block size must be >= 2, using {}", defaults.bn);
            defaults.bn
        } else {
            params.bn
        };
        let threshold = checked_threshold(params.threshold);
        debug!(b0, bn, rotation = ?params.rotation, threshold, "Block Rotate cryptanalysis");

        let rotation = params.rotation;
        let candidates = (b0..=bn).flat_map(move |block_size| {
            let rotations = match rotation {
                Some(rotation) => rotation..rotation + 1,
                None => 0..block_size as i64,
            };
            rotations.map(move |rotation| BlockRotate::new((block_size, rotation), "q"))
        });

        search::first_plausible(candidates, dictionary, threshold, |cipher| {
            cipher.decrypt(ciphertext)
        })
        .map(|found| found.map_key(|cipher| cipher.key()))
        .ok_or_else(|| exhausted("Block Rotate"))
    }
}
