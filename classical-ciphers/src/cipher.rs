//! Generic classical cipher trait

use crate::error::Result;

/// Trait for a keyed classical cipher working on text.
///
/// Keys are validated when set. An invalid key is never kept: the cipher
/// falls back to its documented default key and the setter reports the
/// rejection, so encryption and decryption always run with a usable key.
pub trait Cipher {
    /// Key shape of the cipher
    type Key;

    /// Returns a copy of the current key
    fn key(&self) -> Self::Key;

    /// Sets the key, or resets to the default key if the given one is invalid
    fn set_key(&mut self, key: Self::Key) -> Result<()>;

    /// Encrypts a plaintext
    fn encrypt(&self, plaintext: &str) -> String;

    /// Decrypts a ciphertext
    fn decrypt(&self, ciphertext: &str) -> String;
}
