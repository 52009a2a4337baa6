//! Utility functions for text transforms

use tracing::error;

use crate::error::{CipherError, Result};

/// Default padding character for block utilities
pub const PAD: char = 'q';

/// Punctuation stripped from both ends of a word
pub const WORD_PUNCTUATION: &str = "-!@#$%^&*<>\\.,():;\"'{[]}+_=)";

/// Circular shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Collect every occurrence of a `base` character together with its
/// character offset, in order of appearance.
///
/// ```rust
/// use classical_ciphers::utils::get_positions;
///
/// assert_eq!(get_positions("I have 3 cents.", "c.h"), vec![('h', 2), ('c', 9), ('.', 14)]);
/// ```
pub fn get_positions(text: &str, base: &str) -> Vec<(char, usize)> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| base.contains(*c))
        .map(|(i, c)| (c, i))
        .collect()
}

/// Remove all `base` characters from text
pub fn clean_text(text: &str, base: &str) -> String {
    text.chars().filter(|c| !base.contains(*c)).collect()
}

/// Reinsert characters removed by [`clean_text`] at the offsets recorded by
/// [`get_positions`]. Offsets past the end of the text are appended.
pub fn insert_positions(text: &str, positions: &[(char, usize)]) -> String {
    let mut result = String::with_capacity(text.len() + positions.len());
    let mut chars = text.chars();
    let mut written = 0;

    for &(symbol, position) in positions {
        while written < position {
            match chars.next() {
                Some(c) => {
                    result.push(c);
                    written += 1;
                }
                None => break,
            }
        }
        result.push(symbol);
        written += 1;
    }
    result.extend(chars);

    result
}

/// Circular shift of a string by `shifts` characters
pub fn shift_string(text: &str, shifts: i64, direction: Direction) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let len = chars.len() as i64;
    let shifts = shifts.rem_euclid(len);
    let offset = match direction {
        Direction::Left => shifts,
        Direction::Right => (len - shifts) % len,
    };

    (0..len).map(|i| chars[((offset + i) % len) as usize]).collect()
}

/// Split text into blocks of `block_size` characters.
///
/// If a pad is given the final block is filled up to the block size.
/// A block size of zero yields no blocks.
pub fn text_to_blocks(text: &str, block_size: usize, pad: Option<char>) -> Vec<String> {
    if block_size == 0 {
        error!("text_to_blocks: block size must be > 0");
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(block_size)
        .map(|chunk| {
            let mut block: String = chunk.iter().collect();
            if let Some(pad) = pad {
                block.extend(std::iter::repeat(pad).take(block_size - chunk.len()));
            }
            block
        })
        .collect()
}

/// Transpose equal-size blocks into baskets: basket `i` holds the `i`-th
/// character of every block.
pub fn blocks_to_baskets(blocks: &[String]) -> Result<Vec<String>> {
    let Some(first) = blocks.first() else {
        return Ok(Vec::new());
    };
    let size = first.chars().count();

    let mut baskets = vec![String::new(); size];
    for block in blocks {
        if block.chars().count() != size {
            error!("blocks_to_baskets: invalid blocks");
            return Err(CipherError::InvalidBlocks);
        }
        for (basket, c) in baskets.iter_mut().zip(block.chars()) {
            basket.push(c);
        }
    }

    Ok(baskets)
}

/// Number of positions where both texts hold the same character
pub fn compare_texts(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}

/// Split text on whitespace and strip punctuation from both ends of each word
pub fn text_to_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| WORD_PUNCTUATION.contains(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_round_trip() {
        let text = "first line\nsecond\n\nthird";
        let positions = get_positions(text, "\n");
        assert_eq!(positions, vec![('\n', 10), ('\n', 17), ('\n', 18)]);

        let cleaned = clean_text(text, "\n");
        assert_eq!(cleaned, "first linesecondthird");
        assert_eq!(insert_positions(&cleaned, &positions), text);
    }

    #[test]
    fn test_insert_past_end() {
        assert_eq!(insert_positions("abc", &[('\n', 3)]), "abc\n");
        assert_eq!(insert_positions("ab", &[('\n', 5)]), "ab\n");
    }

    #[test]
    fn test_shift_string() {
        assert_eq!(shift_string("abcde", 2, Direction::Left), "cdeab");
        assert_eq!(shift_string("abcde", 2, Direction::Right), "deabc");
        assert_eq!(shift_string("abcde", -1, Direction::Left), "eabcd");
        assert_eq!(shift_string("abcde", 7, Direction::Left), "cdeab");
        assert_eq!(shift_string("", 3, Direction::Left), "");
    }

    #[test]
    fn test_shift_string_extreme_shifts() {
        assert_eq!(shift_string("abcde", i64::MAX, Direction::Left), "cdeab");
        assert_eq!(shift_string("abcde", i64::MAX, Direction::Right), "deabc");
        assert_eq!(shift_string("abcde", i64::MIN, Direction::Left), "cdeab");
        assert_eq!(shift_string("abcde", i64::MIN, Direction::Right), "deabc");
    }

    #[test]
    fn test_text_to_blocks() {
        assert_eq!(text_to_blocks("abcdefg", 3, None), vec!["abc", "def", "g"]);
        assert_eq!(text_to_blocks("abcdefg", 3, Some(PAD)), vec!["abc", "def", "gqq"]);
        assert!(text_to_blocks("abc", 0, None).is_empty());
        assert!(text_to_blocks("", 4, Some(PAD)).is_empty());
    }

    #[test]
    fn test_blocks_to_baskets() {
        let blocks = text_to_blocks("abcdefghi", 3, None);
        assert_eq!(blocks_to_baskets(&blocks).unwrap(), vec!["adg", "beh", "cfi"]);
    }

    #[test]
    fn test_blocks_to_baskets_unequal() {
        let blocks = text_to_blocks("abcdefg", 3, None);
        assert!(matches!(
            blocks_to_baskets(&blocks),
            Err(CipherError::InvalidBlocks)
        ));
        assert!(blocks_to_baskets(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_compare_texts() {
        assert_eq!(compare_texts("abcdef", "abXdeYZ"), 4);
        assert_eq!(compare_texts("", "abc"), 0);
    }

    #[test]
    fn test_text_to_words() {
        let words = text_to_words("\"Hello,\" she said -- (twice)!\n? ok");
        assert_eq!(words, vec!["Hello", "she", "said", "", "twice", "?", "ok"]);
    }
}
