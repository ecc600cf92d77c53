//! CHK and SSK block encode/decode: the hard part of the access
//! layer — compress, derive keys, encrypt, HMAC, route, and back.

pub mod chk;
pub mod cipher;
pub mod ssk;

pub use chk::{decode as decode_chk, encode as encode_chk, ChkDecodeInput, ChkEncodeInput, NodeChkBlock};
pub use ssk::{decode as decode_ssk, encode as encode_ssk, NodeSskBlock, SskDecodeInput, SskEncodeInput};
