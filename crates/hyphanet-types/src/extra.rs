//! `extra bytes`: the 5-byte trailer embedded in a URI's `keys`
//! segment carrying algorithm and flag metadata. CHK and SSK each
//! define their own packing (spec.md §4.2/§6); this is a hard
//! compatibility contract, not a place for invention.

use crate::algo::{CompressionAlgorithm, CryptoAlgorithm};
use crate::error::HyphanetError;

const IS_CONTROL_DOC_FLAG: u8 = 0x02;

/// `[reserved=0, crypto_algo, flags, compression_hi, compression_lo]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChkExtraBytes {
    pub crypto_algo: CryptoAlgorithm,
    pub is_control_doc: bool,
    pub compression: CompressionAlgorithm,
}

impl ChkExtraBytes {
    pub fn to_bytes(self) -> [u8; 5] {
        let flags = if self.is_control_doc {
            IS_CONTROL_DOC_FLAG
        } else {
            0
        };
        let comp = self.compression.as_i16();
        [
            0,
            self.crypto_algo.as_u8(),
            flags,
            (comp >> 8) as u8,
            comp as u8,
        ]
    }

    /// Parsing tolerates any length `>= 5`; shorter inputs are
    /// rejected outright ("maybe legacy key" in the source's terms).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HyphanetError> {
        if bytes.len() < 5 {
            return Err(HyphanetError::MalformedUri(format!(
                "CHK extra bytes too short ({} < 5, maybe legacy key)",
                bytes.len()
            )));
        }
        let crypto_algo = CryptoAlgorithm::try_from(bytes[1])?;
        let is_control_doc = bytes[2] & IS_CONTROL_DOC_FLAG != 0;
        let comp = i16::from_be_bytes([bytes[3], bytes[4]]);
        let compression = CompressionAlgorithm::try_from(comp)?;
        Ok(Self {
            crypto_algo,
            is_control_doc,
            compression,
        })
    }
}

/// `[ssk_version=1, insert_flag, crypto_algo, reserved_hi=0, reserved_lo=1]`.
/// Only byte 2 (`crypto_algo`) is parsed on decode, per spec.md §4.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SskExtraBytes {
    pub insert: bool,
    pub crypto_algo: CryptoAlgorithm,
}

impl SskExtraBytes {
    pub fn to_bytes(self) -> [u8; 5] {
        [1, u8::from(self.insert), self.crypto_algo.as_u8(), 0, 1]
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HyphanetError> {
        if bytes.len() < 5 {
            return Err(HyphanetError::MalformedUri(format!(
                "SSK extra bytes too short ({} < 5, maybe legacy key)",
                bytes.len()
            )));
        }
        let crypto_algo = CryptoAlgorithm::try_from(bytes[2])?;
        Ok(Self {
            // Decode never needs the insert flag: it describes how
            // the block that produced this URI was written, not how
            // to read it.
            insert: false,
            crypto_algo,
        })
    }
}
