//! Per-algorithm compress/decompress, wrapped behind a uniform
//! signature so the pipeline in `lib.rs` can loop over a descriptor
//! without a match arm per call site.

use std::io::{Read, Write};

use hyphanet_types::CompressionAlgorithm;

use crate::error::CompressError;

/// Offset of the OS byte in a gzip member header (RFC 1952 §2.3).
const GZIP_OS_BYTE_OFFSET: usize = 9;

pub fn compress(algo: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>, CompressError> {
    match algo {
        CompressionAlgorithm::Gzip => gzip_compress(data),
        CompressionAlgorithm::Bzip2 => bzip2_compress(data),
        CompressionAlgorithm::Lzma => lzma_compress(data),
        CompressionAlgorithm::LzmaLegacy => {
            Err(CompressError::Codec("LZMA_LEGACY is decode-only".to_string()))
        }
        CompressionAlgorithm::None => Ok(data.to_vec()),
    }
}

pub fn decompress(algo: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>, CompressError> {
    match algo {
        CompressionAlgorithm::Gzip => gzip_decompress(data),
        CompressionAlgorithm::Bzip2 => bzip2_decompress(data),
        CompressionAlgorithm::Lzma | CompressionAlgorithm::LzmaLegacy => lzma_decompress(data),
        CompressionAlgorithm::None => Ok(data.to_vec()),
    }
}

fn gzip_compress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    let mut out = encoder.finish().map_err(|e| CompressError::Codec(e.to_string()))?;
    if out.len() > GZIP_OS_BYTE_OFFSET {
        out[GZIP_OS_BYTE_OFFSET] = 0;
    }
    Ok(out)
}

fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    use flate2::read::GzDecoder;
    let mut out = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    Ok(out)
}

fn bzip2_compress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    use bzip2::write::BzEncoder;
    use bzip2::Compression;
    let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    encoder.finish().map_err(|e| CompressError::Codec(e.to_string()))
}

fn bzip2_decompress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    use bzip2::read::BzDecoder;
    let mut out = Vec::new();
    BzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    Ok(out)
}

fn lzma_compress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    let mut out = Vec::new();
    lzma_rs::lzma_compress(&mut &data[..], &mut out)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    Ok(out)
}

fn lzma_decompress(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    let mut out = Vec::new();
    lzma_rs::lzma_decompress(&mut &data[..], &mut out)
        .map_err(|e| CompressError::Codec(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_roundtrip_and_os_byte_is_zero() {
        let data = vec![7u8; 4096];
        let compressed = compress(CompressionAlgorithm::Gzip, &data).unwrap();
        assert_eq!(compressed[GZIP_OS_BYTE_OFFSET], 0);
        let back = decompress(CompressionAlgorithm::Gzip, &compressed).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_bzip2_roundtrip() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(50);
        let compressed = compress(CompressionAlgorithm::Bzip2, &data).unwrap();
        let back = decompress(CompressionAlgorithm::Bzip2, &compressed).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_lzma_roundtrip() {
        let data = vec![0x01u8; 5120];
        let compressed = compress(CompressionAlgorithm::Lzma, &data).unwrap();
        let back = decompress(CompressionAlgorithm::Lzma, &compressed).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_lzma_legacy_is_decode_only() {
        assert!(compress(CompressionAlgorithm::LzmaLegacy, b"x").is_err());
    }
}
