//! Crate-local error type. `hyphanet-codec` knows which key type a
//! compression failure happened under; this crate does not, so it
//! reports plain facts and leaves `HyphanetError` construction to the
//! caller.

use hyphanet_types::{HyphanetError, KeyType};

#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("invalid compressor descriptor: {0:?}")]
    InvalidDescriptor(String),

    #[error("input of {actual} bytes exceeds max_before_compression of {limit}")]
    TooBigBeforeCompression { actual: u64, limit: u64 },

    #[error("no codec in the descriptor produced output within {limit} bytes")]
    NoCodecFits { limit: u64 },

    #[error("decompressed output would exceed {limit} bytes")]
    TooBig { limit: u64 },

    #[error("codec failure: {0}")]
    Codec(String),
}

impl CompressError {
    /// Attach the key type a caller in `hyphanet-codec` already knows,
    /// producing the crate-spanning error type.
    pub fn into_hyphanet(self, key_type: KeyType) -> HyphanetError {
        match self {
            Self::InvalidDescriptor(d) => HyphanetError::InvalidDescriptor(d),
            Self::TooBigBeforeCompression { actual, .. } => {
                HyphanetError::TooBig { estimated_size: actual }
            }
            Self::NoCodecFits { limit } => HyphanetError::TooBig { estimated_size: limit },
            Self::TooBig { limit } => HyphanetError::TooBig { estimated_size: limit },
            Self::Codec(reason) => HyphanetError::cannot_decode(key_type, reason),
        }
    }
}
