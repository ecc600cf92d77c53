//! The error taxonomy carried across every entry point (spec.md §7).
//! Crate-local errors (`hyphanet-uri::UriError`, `hyphanet-codec::CodecError`,
//! ...) convert into this via `From`; callers that only want the
//! facade crate never need to see the per-crate variants.

use crate::algo::KeyType;

#[derive(Debug, thiserror::Error)]
pub enum HyphanetError {
    /// Structural or character-level failure parsing a URI. Never
    /// retried; surfaced to the caller as-is.
    #[error("malformed URI: {0}")]
    MalformedUri(String),

    /// A value names a feature this build does not implement.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Encoding failed before producing a block.
    #[error("cannot encode {key_type}: {reason}")]
    CannotEncode { key_type: KeyType, reason: String },

    /// Decoding failed.
    #[error("cannot decode {key_type}: {reason}")]
    CannotDecode { key_type: KeyType, reason: String },

    /// Block-level cryptographic verification failed (SSK signature,
    /// CHK routing-key match). Indicates corruption or a wrong key;
    /// non-retryable against the same inputs.
    #[error("verification failed for {key_type}: {reason}")]
    VerifyFailed { key_type: KeyType, reason: String },

    /// Decompressed (or to-be-decompressed) output would exceed the
    /// caller-supplied cap.
    #[error("output too big: estimated {estimated_size} bytes")]
    TooBig { estimated_size: u64 },

    /// A compressor descriptor string was unparseable.
    #[error("invalid compressor descriptor: {0}")]
    InvalidDescriptor(String),
}

impl HyphanetError {
    pub fn cannot_encode(key_type: KeyType, reason: impl Into<String>) -> Self {
        Self::CannotEncode {
            key_type,
            reason: reason.into(),
        }
    }

    pub fn cannot_decode(key_type: KeyType, reason: impl Into<String>) -> Self {
        Self::CannotDecode {
            key_type,
            reason: reason.into(),
        }
    }

    pub fn verify_failed(key_type: KeyType, reason: impl Into<String>) -> Self {
        Self::VerifyFailed {
            key_type,
            reason: reason.into(),
        }
    }
}
