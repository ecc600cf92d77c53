//! Tagged algorithm sets stored as small integers in the wire format.

use std::fmt;
use std::str::FromStr;

use crate::error::HyphanetError;

/// Cipher construction chosen for a CHK or SSK block. Stored as a
/// single byte in `extra bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoAlgorithm {
    /// 256-bit-block Rijndael, mode CFB, 32-byte IV.
    AesPcfb256Sha256 = 2,
    /// Standard 128-bit-block AES-256, mode CTR, 16-byte IV.
    AesCtr256Sha256 = 3,
}

impl CryptoAlgorithm {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CryptoAlgorithm {
    type Error = HyphanetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::AesPcfb256Sha256),
            3 => Ok(Self::AesCtr256Sha256),
            other => Err(HyphanetError::Unsupported(format!(
                "unknown crypto algorithm byte {other}"
            ))),
        }
    }
}

/// Compression codec tag, stored as a signed 16-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionAlgorithm {
    None = -1,
    Gzip = 0,
    Bzip2 = 1,
    /// Legacy LZMA container. Decode-only: a new encode must never
    /// emit this tag.
    LzmaLegacy = 2,
    Lzma = 3,
}

impl CompressionAlgorithm {
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    pub fn is_compressed(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Codec name as accepted by the compressor descriptor grammar,
    /// matching spec.md §6's `GZIP | BZIP2 | LZMA_NEW` token set.
    pub fn descriptor_name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Gzip => "GZIP",
            Self::Bzip2 => "BZIP2",
            Self::LzmaLegacy => "LZMA_LEGACY",
            Self::Lzma => "LZMA_NEW",
        }
    }
}

impl TryFrom<i16> for CompressionAlgorithm {
    type Error = HyphanetError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::None),
            0 => Ok(Self::Gzip),
            1 => Ok(Self::Bzip2),
            2 => Ok(Self::LzmaLegacy),
            3 => Ok(Self::Lzma),
            other => Err(HyphanetError::Unsupported(format!(
                "unknown compression algorithm id {other}"
            ))),
        }
    }
}

/// URI scheme / block flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Chk,
    Ssk,
    Usk,
    Ksk,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Chk => "CHK",
            Self::Ssk => "SSK",
            Self::Usk => "USK",
            Self::Ksk => "KSK",
        };
        write!(f, "{s}")
    }
}

impl FromStr for KeyType {
    type Err = HyphanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CHK" => Ok(Self::Chk),
            "SSK" => Ok(Self::Ssk),
            "USK" => Ok(Self::Usk),
            "KSK" => Ok(Self::Ksk),
            other => Err(HyphanetError::MalformedUri(format!(
                "unknown key type {other}"
            ))),
        }
    }
}
