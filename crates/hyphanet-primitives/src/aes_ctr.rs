//! AES-256-CTR: the `AES_CTR_256_SHA256` crypto algorithm.
//!
//! Despite the network's naming convention ("256" refers to the key
//! size), the block itself is the standard 128-bit AES block; the IV
//! is 16 bytes, half the width `rijndael256`'s IV uses.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::{PrimitiveError, Result};

pub const KEY_SIZE: usize = 32;
pub const IV_SIZE: usize = 16;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Encrypt (or decrypt — CTR is its own inverse) `data` in place.
pub fn apply_keystream(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<()> {
    if key.len() != KEY_SIZE {
        return Err(PrimitiveError::InvalidLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    if iv.len() != IV_SIZE {
        return Err(PrimitiveError::InvalidLength {
            expected: IV_SIZE,
            actual: iv.len(),
        });
    }
    let mut cipher = Aes256Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(data);
    Ok(())
}

/// Encrypt `plaintext`, returning a new buffer.
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut buf = plaintext.to_vec();
    apply_keystream(key, iv, &mut buf)?;
    Ok(buf)
}

/// Decrypt `ciphertext`, returning a new buffer. Identical to
/// [`encrypt`] since CTR mode is symmetric, kept as a separate name
/// for call-site clarity.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    encrypt(key, iv, ciphertext)
}
