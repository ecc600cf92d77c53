//! # hyphanet-primitives
//!
//! Cryptographic primitives used by the Hyphanet access-layer codec.
//!
//! No algorithm negotiation happens here: the block codec picks the
//! algorithm (from a URI's extra bytes) and calls straight into the
//! matching module.
//!
//! ## Modules
//!
//! - [`sha256`] — pooled SHA-256 hashing (content hashes, routing keys)
//! - [`hmac_sha256`] — HMAC-SHA-256, used as the CHK tag/IV source
//! - [`aes_ctr`] — AES-256-CTR, one of the two CHK/SSK cipher choices
//! - [`rijndael256`] — 256-bit-block Rijndael (not AES), the other cipher choice
//! - [`random`] — CSPRNG fill for padding and nonces

pub mod aes_ctr;
pub mod hmac_sha256;
pub mod random;
pub mod rijndael256;
pub mod sha256;

/// Error type for primitive operations.
#[derive(Debug, thiserror::Error)]
pub enum PrimitiveError {
    /// A key or IV was not the length the primitive requires.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PrimitiveError>;
