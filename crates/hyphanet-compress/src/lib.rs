//! Codec registry and the size-gated compress/decompress pipeline
//! the block codec streams payloads through.

pub mod codecs;
pub mod descriptor;
pub mod error;

pub use error::CompressError;
use hyphanet_types::CompressionAlgorithm;

/// Input to [`compress`]. Mirrors the flags the block codec threads
/// through on a CHK/SSK encode.
pub struct CompressConfig<'a> {
    pub data: &'a [u8],
    pub dont_compress: bool,
    /// Set when the caller already compressed `data` under a known
    /// algorithm; `compress` then only frames and size-checks it.
    pub precompressed_algo: Option<CompressionAlgorithm>,
    /// Uncompressed length to record in the frame, when known ahead
    /// of compression (relevant only alongside `precompressed_algo`).
    pub original_length: Option<u64>,
    pub max_before_compression: u64,
    pub max_after_compression: u64,
    pub short_prefix: bool,
    pub descriptor: String,
}

/// Compress `config.data`, trying each codec named in `descriptor` in
/// order and keeping the first whose framed output fits
/// `max_after_compression`. Falls back to an unframed copy tagged
/// `CompressionAlgorithm::None` if nothing fits but the raw input
/// does.
pub fn compress(config: CompressConfig<'_>) -> Result<(Vec<u8>, CompressionAlgorithm), CompressError> {
    let raw_len = config.data.len() as u64;
    if raw_len > config.max_before_compression {
        return Err(CompressError::TooBigBeforeCompression {
            actual: raw_len,
            limit: config.max_before_compression,
        });
    }
    let prefix_len: u64 = if config.short_prefix { 2 } else { 4 };

    if let Some(algo) = config.precompressed_algo {
        let orig_len = config.original_length.unwrap_or(raw_len);
        let framed = frame(orig_len, config.data, prefix_len);
        if framed.len() as u64 > config.max_after_compression {
            return Err(CompressError::NoCodecFits {
                limit: config.max_after_compression,
            });
        }
        return Ok((framed, algo));
    }

    if !config.dont_compress {
        let candidates = descriptor::parse(&config.descriptor)?;
        let ceiling = config.max_after_compression.saturating_sub(prefix_len);
        for algo in candidates {
            if let Ok(compressed) = codecs::compress(algo, config.data) {
                if compressed.len() as u64 <= ceiling {
                    return Ok((frame(raw_len, &compressed, prefix_len), algo));
                }
                tracing::debug!(?algo, produced = compressed.len(), ceiling, "codec output did not fit, trying next");
            }
        }
    }

    if raw_len <= config.max_after_compression {
        return Ok((config.data.to_vec(), CompressionAlgorithm::None));
    }
    Err(CompressError::NoCodecFits {
        limit: config.max_after_compression,
    })
}

fn frame(orig_len: u64, body: &[u8], prefix_len: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix_len as usize + body.len());
    match prefix_len {
        2 => out.extend_from_slice(&(orig_len as u16).to_be_bytes()),
        4 => out.extend_from_slice(&(orig_len as u32).to_be_bytes()),
        _ => unreachable!("prefix_len is always 2 or 4"),
    }
    out.extend_from_slice(body);
    out
}

/// Invert [`compress`]: read the length prefix (skipped entirely for
/// `CompressionAlgorithm::None`, which carries none), enforce
/// `max_length` both on the declared and the actual decompressed
/// size, and run the matching codec.
pub fn decompress(
    compressed: &[u8],
    algo: CompressionAlgorithm,
    max_length: u64,
    short_prefix: bool,
) -> Result<Vec<u8>, CompressError> {
    if algo == CompressionAlgorithm::None {
        if compressed.len() as u64 > max_length {
            return Err(CompressError::TooBig { limit: max_length });
        }
        return Ok(compressed.to_vec());
    }
    let prefix_len = if short_prefix { 2 } else { 4 };
    if compressed.len() < prefix_len {
        return Err(CompressError::Codec("compressed stream shorter than its length prefix".to_string()));
    }
    let orig_len = match prefix_len {
        2 => u16::from_be_bytes([compressed[0], compressed[1]]) as u64,
        4 => u32::from_be_bytes([compressed[0], compressed[1], compressed[2], compressed[3]]) as u64,
        _ => unreachable!("prefix_len is always 2 or 4"),
    };
    if orig_len > max_length {
        return Err(CompressError::TooBig { limit: max_length });
    }
    let decoded = codecs::decompress(algo, &compressed[prefix_len..])?;
    if decoded.len() as u64 > max_length {
        return Err(CompressError::TooBig { limit: max_length });
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_path_picks_first_fitting_codec() {
        let data = vec![0x01u8; 5120];
        let (out, algo) = compress(CompressConfig {
            data: &data,
            dont_compress: false,
            precompressed_algo: None,
            original_length: None,
            max_before_compression: u64::MAX,
            max_after_compression: 32768,
            short_prefix: true,
            descriptor: "GZIP".to_string(),
        })
        .unwrap();
        assert_eq!(algo, CompressionAlgorithm::Gzip);
        let back = decompress(&out, algo, 32768, true).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_falls_back_to_none_when_incompressible_and_small() {
        let data = b"hello\n".to_vec();
        let (out, algo) = compress(CompressConfig {
            data: &data,
            dont_compress: true,
            precompressed_algo: None,
            original_length: None,
            max_before_compression: u64::MAX,
            max_after_compression: 32768,
            short_prefix: true,
            descriptor: String::new(),
        })
        .unwrap();
        assert_eq!(algo, CompressionAlgorithm::None);
        assert_eq!(out, data);
        let back = decompress(&out, algo, 32768, true).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_rejects_input_over_max_before_compression() {
        let data = vec![0u8; 10];
        let err = compress(CompressConfig {
            data: &data,
            dont_compress: true,
            precompressed_algo: None,
            original_length: None,
            max_before_compression: 5,
            max_after_compression: 32768,
            short_prefix: true,
            descriptor: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, CompressError::TooBigBeforeCompression { .. }));
    }

    #[test]
    fn test_decompress_rejects_declared_length_over_cap() {
        let data = vec![0x01u8; 5120];
        let (out, algo) = compress(CompressConfig {
            data: &data,
            dont_compress: false,
            precompressed_algo: None,
            original_length: None,
            max_before_compression: u64::MAX,
            max_after_compression: 32768,
            short_prefix: true,
            descriptor: "GZIP".to_string(),
        })
        .unwrap();
        let err = decompress(&out, algo, 100, true).unwrap_err();
        assert!(matches!(err, CompressError::TooBig { .. }));
    }

    #[test]
    fn test_precompressed_path_just_frames() {
        let compressed = codecs::compress(CompressionAlgorithm::Gzip, b"payload payload payload").unwrap();
        let (out, algo) = compress(CompressConfig {
            data: &compressed,
            dont_compress: true,
            precompressed_algo: Some(CompressionAlgorithm::Gzip),
            original_length: Some(24),
            max_before_compression: u64::MAX,
            max_after_compression: 32768,
            short_prefix: true,
            descriptor: String::new(),
        })
        .unwrap();
        assert_eq!(algo, CompressionAlgorithm::Gzip);
        let back = decompress(&out, algo, 32768, true).unwrap();
        assert_eq!(back, b"payload payload payload");
    }
}
