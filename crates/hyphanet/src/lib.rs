//! # hyphanet
//!
//! Facade over the workspace: URIs, typed client/node keys, and the
//! CHK/SSK block codec behind one stable surface, per spec.md §4.7's
//! three user-visible edges — `Uri::create_client_key()`,
//! `ClientKey::node_key()`, and `ClientChkBlock`/`ClientSskBlock`
//! decode.

mod block;
mod uri_ext;

pub use block::{ClientChkBlock, ClientSskBlock};
pub use uri_ext::UriExt;

pub use hyphanet_bytestore::{ArrayByteStore, ByteStore, RandomAccessByteStore};
pub use hyphanet_codec::{
    ChkDecodeInput, ChkEncodeInput, NodeChkBlock, NodeSskBlock, SskDecodeInput, SskEncodeInput,
};
pub use hyphanet_compress::{compress, decompress, CompressConfig, CompressError};
pub use hyphanet_keys::{
    create_ksk, ClientChk, ClientKey, ClientKsk, ClientSsk, DsaKeyPair, InsertableClientSsk,
    NodeChk, NodeKey, NodeSsk, Usk,
};
pub use hyphanet_types::{
    ChkExtraBytes, CompressionAlgorithm, CryptoAlgorithm, DecryptionKey, HyphanetError, KeyType,
    RoutingKey, SskExtraBytes,
};
pub use hyphanet_uri::Uri;

pub type Result<T> = std::result::Result<T, HyphanetError>;
