use tracing::{debug, error};

use super::{exhausted, search, Score, ScoredCandidate};
use crate::cipher::Cipher;
use crate::ciphers::Shift;
use crate::error::{CipherError, Result};
use crate::stats;

/// What is known about the Shift key. The strategy depends on which fields
/// are set: base and shifts, base only, shifts and base length, or base
/// length only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftParams {
    /// Symbols of the window, located in [`Shift::BASE`] by its first and
    /// last symbol
    pub base: Option<String>,
    pub shifts: Option<i64>,
    pub base_length: Option<usize>,
}

type ShiftKey = (i64, usize, usize);

impl Shift {
    /// Recover a Shift key by chi-squared scoring. Every strategy keeps the
    /// candidate with the strictly lowest score, so ties go to the first
    /// candidate enumerated.
    pub fn cryptanalyze(
        ciphertext: &str,
        params: &ShiftParams,
    ) -> Result<ScoredCandidate<ShiftKey>> {
        let found = match (&params.base, params.shifts, params.base_length) {
            (Some(base), Some(shifts), _) => {
                let (start, end) = locate_base(base)?;
                let cipher = Shift::new((shifts, start, end));
                let plaintext = cipher.decrypt(ciphertext);
                let chi = stats::chi_squared(&plaintext, stats::DEFAULT_LANGUAGE)
                    .unwrap_or(f64::INFINITY);
                Some(ScoredCandidate {
                    key: cipher,
                    plaintext,
                    score: Score::ChiSquared(chi),
                })
            }
            (Some(base), None, _) => {
                let (start, end) = locate_base(base)?;
                let candidates =
                    (0..=(end - start) as i64).map(|shifts| Shift::new((shifts, start, end)));
                lowest(candidates, ciphertext)
            }
            (None, Some(shifts), Some(length)) => {
                let length = checked_length(length)?;
                let candidates =
                    windows(length).map(|(start, end)| Shift::new((shifts, start, end)));
                lowest(candidates, ciphertext)
            }
            (None, None, Some(length)) => {
                let length = checked_length(length)?;
                let candidates = windows(length).flat_map(|(start, end)| {
                    (0..length as i64).map(move |shifts| Shift::new((shifts, start, end)))
                });
                lowest(candidates, ciphertext)
            }
            (None, _, None) => {
                error!("Shift cryptanalysis needs a base or a base length");
                return Err(CipherError::InvalidParameter(
                    "base or base length required".to_string(),
                ));
            }
        };

        let found = found.ok_or_else(|| exhausted("Shift"))?;
        debug!(key = ?found.key.key(), score = found.score.value(), "Shift key recovered");
        Ok(found.map_key(|cipher| cipher.key()))
    }
}

fn lowest(
    candidates: impl Iterator<Item = Shift>,
    ciphertext: &str,
) -> Option<ScoredCandidate<Shift>> {
    search::lowest_chi_squared(candidates, |cipher| cipher.decrypt(ciphertext))
}

/// Start and end index of `base` inside [`Shift::BASE`]
fn locate_base(base: &str) -> Result<(usize, usize)> {
    let first = base.chars().next();
    let last = base.chars().last();
    let start = first.and_then(|c| Shift::BASE.find(c));
    let end = last.and_then(|c| Shift::BASE.find(c));

    match (start, end) {
        (Some(start), Some(end)) if Shift::valid_key((0, start, end)) => Ok((start, end)),
        _ => {
            error!(base, "invalid Shift base");
            Err(CipherError::InvalidParameter(format!("base {base:?}")))
        }
    }
}

fn checked_length(length: usize) -> Result<usize> {
    if (2..=Shift::BASE.len()).contains(&length) {
        Ok(length)
    } else {
        error!(length, "invalid Shift base length");
        Err(CipherError::InvalidParameter(format!("base length {length}")))
    }
}

/// Every window of exactly `length` symbols of [`Shift::BASE`], left to right
fn windows(length: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..=Shift::BASE.len() - length).map(move |start| (start, start + length - 1))
}
