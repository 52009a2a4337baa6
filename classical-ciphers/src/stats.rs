//! Text statistics: frequency counts, index of coincidence, chi-squared

use crate::alphabet::Language;
use crate::error::{CipherError, Result};

/// Language used by the chi-squared scoring of the cryptanalysis drivers
pub const DEFAULT_LANGUAGE: &str = "English";

/// Count occurrences of each symbol of `base` in `text`.
///
/// Without a base the 26 English letters are counted case-insensitively.
/// Characters outside the base are ignored.
pub fn frequency(text: &str, base: Option<&str>) -> Vec<usize> {
    match base {
        None => {
            let mut counts = vec![0; 26];
            for c in text.chars().filter(char::is_ascii_alphabetic) {
                counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
            }
            counts
        }
        Some(base) => base
            .chars()
            .map(|symbol| text.chars().filter(|&c| c == symbol).count())
            .collect(),
    }
}

/// Index of coincidence over the English letters of `text`
pub fn index_of_coincidence(text: &str) -> f64 {
    index_of_coincidence_over(text, None)
}

/// Index of coincidence over an arbitrary base.
///
/// `I = sum(n_i * (n_i - 1)) / (N * (N - 1))`, or 0 when fewer than two
/// symbols are counted.
pub fn index_of_coincidence_over(text: &str, base: Option<&str>) -> f64 {
    let counts = frequency(text, base);
    let total: usize = counts.iter().sum();
    if total <= 1 {
        return 0.0;
    }

    let numerator: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    numerator as f64 / (total * (total - 1)) as f64
}

/// Chi-squared statistic of the letter counts of `text` against a reference
/// language. Lower values mean a closer fit.
pub fn chi_squared(text: &str, language: &str) -> Result<f64> {
    let language: Language = language.parse()?;
    chi_squared_against(text, language.frequencies())
}

fn chi_squared_against(text: &str, expected: &[f64; 26]) -> Result<f64> {
    let counts = frequency(text, None);
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(CipherError::EmptyText);
    }

    let total = total as f64;
    Ok(counts
        .iter()
        .zip(expected.iter())
        .map(|(&observed, &probability)| {
            let expected = probability * total;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum())
}
