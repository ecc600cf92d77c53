//! # hyphanet-types
//!
//! Shared value types used by every other crate in the workspace:
//! the 32-byte key newtypes, the algorithm tag enums, the `extra
//! bytes` wire packing, and the crate-spanning error taxonomy every
//! downstream crate's local error converts into.

pub mod algo;
pub mod error;
pub mod extra;
pub mod keys;

pub use algo::{CompressionAlgorithm, CryptoAlgorithm, KeyType};
pub use error::HyphanetError;
pub use extra::{ChkExtraBytes, SskExtraBytes};
pub use keys::{DecryptionKey, RoutingKey};

pub type Result<T> = std::result::Result<T, HyphanetError>;
