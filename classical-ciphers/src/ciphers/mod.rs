//! Classical cipher implementations

pub mod alberti;
pub mod block_rotate;
pub mod scytale;
pub mod shift;
pub mod vigenere;

pub use alberti::{Alberti, AlbertiMode};
pub use block_rotate::BlockRotate;
pub use scytale::Scytale;
pub use shift::Shift;
pub use vigenere::{Vigenere, VigenereMode};

/// Validate a pad given as text: a single character, or empty for no padding
pub(crate) fn parse_pad(pad: &str) -> Option<Option<char>> {
    let mut chars = pad.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) => Some(Some(c)),
        _ => None,
    }
}
