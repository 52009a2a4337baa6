//! Binary string helpers and character codes (8-bit ASCII, 6-bit B6)

use std::str::FromStr;

use tracing::error;

use crate::alphabet::B6;
use crate::error::{CipherError, Result};

/// Character encoding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ascii,
    B6,
}

impl Encoding {
    /// Number of bits per encoded character
    pub fn width(self) -> usize {
        match self {
            Encoding::Ascii => 8,
            Encoding::B6 => 6,
        }
    }
}

impl FromStr for Encoding {
    type Err = CipherError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "ASCII" => Ok(Encoding::Ascii),
            "B6" => Ok(Encoding::B6),
            _ => {
                error!(encoding = name, "unsupported coding type");
                Err(CipherError::UnsupportedEncoding(name.to_string()))
            }
        }
    }
}

/// True for a non-empty string of `0`/`1` digits
pub fn is_binary(bits: &str) -> bool {
    !bits.is_empty() && bits.chars().all(|c| c == '0' || c == '1')
}

pub fn bin_to_dec(bits: &str) -> Result<u64> {
    if !is_binary(bits) {
        return Err(CipherError::InvalidParameter(format!(
            "not a binary number: {bits:?}"
        )));
    }
    u64::from_str_radix(bits, 2)
        .map_err(|_| CipherError::InvalidParameter("integer overflow".to_string()))
}

/// Binary representation of `value`, left-padded with zeros to `size` bits
/// when a size is given.
pub fn dec_to_bin(value: u64, size: Option<usize>) -> Result<String> {
    let bits = format!("{value:b}");
    match size {
        None => Ok(bits),
        Some(0) => Err(CipherError::InvalidParameter("invalid size".to_string())),
        Some(size) if bits.len() > size => {
            Err(CipherError::InvalidParameter("integer overflow".to_string()))
        }
        Some(size) => Ok(format!("{bits:0>size$}")),
    }
}

/// Bitwise xor of two equal-length binary strings
pub fn xor(a: &str, b: &str) -> Result<String> {
    if !is_binary(a) || !is_binary(b) {
        return Err(CipherError::InvalidParameter("xor: invalid input".to_string()));
    }
    if a.len() != b.len() {
        return Err(CipherError::InvalidParameter("xor: size mismatch".to_string()));
    }

    Ok(a.chars()
        .zip(b.chars())
        .map(|(x, y)| if x == y { '0' } else { '1' })
        .collect())
}

pub fn encode(c: char, encoding: Encoding) -> Result<String> {
    let value = match encoding {
        Encoding::Ascii => u64::from(u32::from(c)),
        Encoding::B6 => B6
            .chars()
            .position(|symbol| symbol == c)
            .ok_or_else(|| CipherError::InvalidParameter(format!("{c:?} has no B6 code")))?
            as u64,
    };
    dec_to_bin(value, Some(encoding.width()))
}

pub fn decode(bits: &str, encoding: Encoding) -> Result<char> {
    let value = bin_to_dec(bits)?;
    match encoding {
        Encoding::Ascii => u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| CipherError::InvalidParameter(format!("invalid code point {value}"))),
        Encoding::B6 if bits.len() <= Encoding::B6.width() => B6
            .chars()
            .nth(value as usize)
            .ok_or_else(|| CipherError::InvalidParameter(format!("invalid B6 code {bits}"))),
        Encoding::B6 => Err(CipherError::InvalidParameter(format!(
            "invalid B6 code {bits}"
        ))),
    }
}
