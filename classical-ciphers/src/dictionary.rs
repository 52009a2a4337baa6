//! Word-list dictionary and plaintext scoring

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CipherError, Result};
use crate::utils;

/// Threshold used when a caller passes one outside [0, 1]
pub const DEFAULT_THRESHOLD: f64 = 0.9;

const VALID_EXTENSIONS: [&str; 3] = [".txt", ".py", ".c"];

/// Known lowercase words bucketed by first letter a..z
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: [HashSet<String>; 26],
}

impl Dictionary {
    /// Build a dictionary from words. Each word is trimmed and lowercased;
    /// words not starting with a letter a..z are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if let Some(index) = word.chars().next().and_then(bucket_index) {
                dictionary.buckets[index].insert(word);
            }
        }
        dictionary
    }

    /// Load a word list, one word per line, encoded as ISO-8859-15.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if !is_valid_filename(name) {
            return Err(CipherError::InvalidSource(path.display().to_string()));
        }

        let bytes = fs::read(path)
            .map_err(|err| CipherError::InvalidSource(format!("{}: {err}", path.display())))?;
        let dictionary = Self::from_words(decode_latin9(&bytes).lines());
        debug!(path = %path.display(), words = dictionary.len(), "dictionary loaded");

        Ok(dictionary)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.buckets.iter().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(HashSet::is_empty)
    }

    /// True if the lowercase form of `word` is a known word
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        word.chars()
            .next()
            .and_then(bucket_index)
            .is_some_and(|index| self.buckets[index].contains(&word))
    }

    /// Count recognized and unrecognized words of `text`.
    ///
    /// Returns `(matches, mismatches)`. Empty words and words whose first
    /// character is not a letter are mismatches.
    pub fn score(&self, text: &str) -> (usize, usize) {
        utils::text_to_words(text)
            .into_iter()
            .fold((0, 0), |(matches, mismatches), word| {
                if self.contains(word) {
                    (matches + 1, mismatches)
                } else {
                    (matches, mismatches + 1)
                }
            })
    }

    /// Fraction of recognized words, 0 for text without words
    pub fn match_ratio(&self, text: &str) -> f64 {
        let (matches, mismatches) = self.score(text);
        let words = matches + mismatches;
        if words == 0 {
            return 0.0;
        }
        matches as f64 / words as f64
    }

    /// True iff `text` is non-empty and at least `threshold` of its words are
    /// known. A threshold outside [0, 1] falls back to 0.9.
    pub fn is_plausible_plaintext(&self, text: &str, threshold: f64) -> bool {
        let threshold = if (0.0..=1.0).contains(&threshold) {
            threshold
        } else {
            warn!(threshold, "invalid threshold, using {DEFAULT_THRESHOLD}");
            DEFAULT_THRESHOLD
        };

        if text.is_empty() || utils::text_to_words(text).is_empty() {
            return false;
        }
        self.match_ratio(text) >= threshold
    }
}

fn bucket_index(first: char) -> Option<usize> {
    first
        .is_ascii_lowercase()
        .then(|| (first as u8 - b'a') as usize)
}

/// A word list name needs more than four characters, exactly one dot, at
/// least four name characters before the dot and a `.txt`, `.py` or `.c`
/// extension.
fn is_valid_filename(name: &str) -> bool {
    if name.chars().count() <= 4 || name.matches('.').count() != 1 || name.starts_with('.') {
        return false;
    }

    let stem_len = name
        .chars()
        .take_while(|&c| c != '.')
        .filter(|&c| c.is_alphanumeric() || c == '_')
        .count();

    stem_len > 3 && VALID_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Decode ISO-8859-15 bytes. It matches Latin-1 apart from eight code points.
fn decode_latin9(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| match byte {
            0xA4 => '€',
            0xA6 => 'Š',
            0xA8 => 'š',
            0xB4 => 'Ž',
            0xB8 => 'ž',
            0xBC => 'Œ',
            0xBD => 'œ',
            0xBE => 'Ÿ',
            _ => char::from(byte),
        })
        .collect()
}
