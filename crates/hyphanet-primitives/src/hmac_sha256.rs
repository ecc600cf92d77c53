//! HMAC-SHA-256 (RFC 2104), used both as a MAC and — doubling as an
//! IV source — for the CHK content-hash encryption scheme.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute `HMAC-SHA-256(key, message)`.
///
/// Accepts any key length (HMAC pads/hashes keys longer than the
/// block size internally); the CHK codec always passes a 32-byte key.
pub fn hmac(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC-SHA-256 accepts any key length");
    mac.update(message);
    let tag = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&tag);
    out
}

/// Compute `HMAC-SHA-256(key, a || b)` without allocating the
/// concatenation, matching the CHK tag computation over
/// `padded_data || length`.
pub fn hmac_concat(key: &[u8], a: &[u8], b: &[u8]) -> [u8; 32] {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC-SHA-256 accepts any key length");
    mac.update(a);
    mac.update(b);
    let tag = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&tag);
    out
}

/// Constant-time verification of an HMAC tag.
pub fn verify(key: &[u8], message: &[u8], tag: &[u8; 32]) -> bool {
    let computed = hmac(key, message);
    use subtle_compare::ct_eq;
    ct_eq(&computed, tag)
}

/// Constant-time verification against a two-part message, matching
/// the CHK tag computation over `padded_data || length`.
pub fn verify_concat(key: &[u8], a: &[u8], b: &[u8], tag: &[u8; 32]) -> bool {
    let computed = hmac_concat(key, a, b);
    use subtle_compare::ct_eq;
    ct_eq(&computed, tag)
}

mod subtle_compare {
    /// Constant-time byte-slice equality, to avoid leaking HMAC
    /// comparison timing on attacker-controlled block data.
    pub fn ct_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
        let mut diff = 0u8;
        for (x, y) in a.iter().zip(b.iter()) {
            diff |= x ^ y;
        }
        diff == 0
    }
}
