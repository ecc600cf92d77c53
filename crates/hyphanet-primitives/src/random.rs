//! CSPRNG fill, used for SSK encryption nonces and any padding that
//! needs to look indistinguishable from ciphertext.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fill `buf` with cryptographically secure random bytes.
pub fn fill(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Return a fresh random array of size `N`.
pub fn bytes<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    fill(&mut out);
    out
}
