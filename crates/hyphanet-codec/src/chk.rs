//! CHK block encode/decode (spec.md §4.3/§4.4): the content-hash
//! pipeline — compress, pad to a fixed block, derive a content-hash
//! key, HMAC-as-IV, encrypt, route by hash of the result.

use hyphanet_compress::{compress, decompress, CompressConfig};
use hyphanet_keys::{ClientChk, NodeChk};
use hyphanet_primitives::{hmac_sha256, random, sha256};
use hyphanet_types::{CompressionAlgorithm, CryptoAlgorithm, DecryptionKey, HyphanetError, KeyType, RoutingKey};

use crate::cipher;

pub const BLOCK_SIZE: usize = 32768;
const HEADERS_LEN: usize = 37;
const BLOCK_HASH_ALGO_SHA256: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeChkBlock {
    pub data: Vec<u8>,
    pub headers: Vec<u8>,
    pub key: NodeChk,
}

pub struct ChkEncodeInput<'a> {
    pub data: &'a [u8],
    pub as_metadata: bool,
    pub dont_compress: bool,
    pub precompressed_algo: Option<CompressionAlgorithm>,
    pub descriptor: String,
    pub decryption_key: Option<DecryptionKey>,
    pub crypto_algo: CryptoAlgorithm,
}

pub fn encode(input: ChkEncodeInput<'_>) -> Result<(NodeChkBlock, ClientChk), HyphanetError> {
    tracing::trace!(raw_len = input.data.len(), crypto_algo = ?input.crypto_algo, "encoding CHK block");
    let (compressed, compression_algo) = compress(CompressConfig {
        data: input.data,
        dont_compress: input.dont_compress,
        precompressed_algo: input.precompressed_algo,
        original_length: None,
        max_before_compression: i32::MAX as u64,
        max_after_compression: BLOCK_SIZE as u64,
        short_prefix: true,
        descriptor: input.descriptor,
    })
    .map_err(|e| e.into_hyphanet(KeyType::Chk))?;

    if compressed.len() > BLOCK_SIZE {
        tracing::warn!(
            compressed_len = compressed.len(),
            limit = BLOCK_SIZE,
            "compressed CHK payload does not fit a single block"
        );
        return Err(HyphanetError::TooBig {
            estimated_size: compressed.len() as u64,
        });
    }
    let real_length = compressed.len() as u16;

    let mut padded = vec![0u8; BLOCK_SIZE];
    padded[..compressed.len()].copy_from_slice(&compressed);
    random::fill(&mut padded[compressed.len()..]);

    let decryption_key = input
        .decryption_key
        .unwrap_or_else(|| DecryptionKey::from_bytes(sha256::hash(&padded)));

    let length_bytes = real_length.to_be_bytes();
    let tag = hmac_sha256::hmac_concat(decryption_key.as_bytes(), &padded, &length_bytes);

    let mut stream = Vec::with_capacity(BLOCK_SIZE + 2);
    stream.extend_from_slice(&padded);
    stream.extend_from_slice(&length_bytes);
    let ciphertext = cipher::encrypt(input.crypto_algo, decryption_key.as_bytes(), &tag, &stream);
    let (ciphertext_data, ciphertext_length) = ciphertext.split_at(BLOCK_SIZE);

    // 37-byte header: `[0x00, block_hash_algo, tag(32), reserved=0,
    // ciphertext_length(2)]`. The reserved byte at offset 34 keeps the
    // trailing length field at the fixed offset 35..37 that decode
    // reads from — not a typo, a deliberately preserved gap.
    let mut headers = [0u8; HEADERS_LEN];
    headers[0] = 0x00;
    headers[1] = BLOCK_HASH_ALGO_SHA256;
    headers[2..34].copy_from_slice(&tag);
    headers[35..37].copy_from_slice(ciphertext_length);

    let routing = RoutingKey::from_bytes(sha256::hash_concat(&[&headers, ciphertext_data]));
    tracing::debug!(?routing, compression_algo = ?compression_algo, "encoded CHK block");

    let node_block = NodeChkBlock {
        data: ciphertext_data.to_vec(),
        headers: headers.to_vec(),
        key: NodeChk {
            routing,
            crypto_algo: input.crypto_algo,
        },
    };
    let client_chk = ClientChk::new(
        routing,
        Some(decryption_key),
        input.crypto_algo,
        input.as_metadata,
        compression_algo,
        None,
    );
    Ok((node_block, client_chk))
}

pub struct ChkDecodeInput<'a> {
    pub block: &'a NodeChkBlock,
    pub client: &'a ClientChk,
    pub decompress: bool,
    pub max_length: u64,
}

pub fn decode(input: ChkDecodeInput<'_>) -> Result<Vec<u8>, HyphanetError> {
    tracing::trace!(routing = ?input.block.key.routing, "decoding CHK block");
    let decryption_key = input
        .client
        .decryption
        .ok_or_else(|| HyphanetError::cannot_decode(KeyType::Chk, "missing decryption key"))?;
    if input.block.headers.len() != HEADERS_LEN {
        return Err(HyphanetError::cannot_decode(KeyType::Chk, "bad header length"));
    }
    if input.block.data.len() != BLOCK_SIZE {
        return Err(HyphanetError::cannot_decode(KeyType::Chk, "bad data length"));
    }
    let tag: [u8; 32] = input.block.headers[2..34]
        .try_into()
        .expect("headers length already checked above");
    let ciphertext_length = &input.block.headers[35..37];

    let mut stream = Vec::with_capacity(BLOCK_SIZE + 2);
    stream.extend_from_slice(&input.block.data);
    stream.extend_from_slice(ciphertext_length);
    let plain = cipher::decrypt(input.client.crypto_algo, decryption_key.as_bytes(), &tag, &stream);
    let (plain_data, plain_length_bytes) = plain.split_at(BLOCK_SIZE);

    let length = u16::from_be_bytes([plain_length_bytes[0], plain_length_bytes[1]]) as usize;
    if length > BLOCK_SIZE {
        return Err(HyphanetError::cannot_decode(KeyType::Chk, "declared length exceeds block size"));
    }
    if !hmac_sha256::verify_concat(decryption_key.as_bytes(), plain_data, plain_length_bytes, &tag) {
        tracing::warn!(routing = ?input.block.key.routing, "CHK block failed HMAC verification");
        return Err(HyphanetError::cannot_decode(KeyType::Chk, "wrong key or corrupted"));
    }

    let plain_slice = &plain_data[..length];
    let out = if input.client.is_compressed() && input.decompress {
        decompress(plain_slice, input.client.compression, input.max_length, true)
            .map_err(|e| e.into_hyphanet(KeyType::Chk))?
    } else {
        plain_slice.to_vec()
    };
    tracing::debug!(out_len = out.len(), "decoded CHK block");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8], dont_compress: bool, descriptor: &str, crypto_algo: CryptoAlgorithm) -> Vec<u8> {
        let (block, client) = encode(ChkEncodeInput {
            data,
            as_metadata: false,
            dont_compress,
            precompressed_algo: None,
            descriptor: descriptor.to_string(),
            decryption_key: None,
            crypto_algo,
        })
        .unwrap();
        decode(ChkDecodeInput {
            block: &block,
            client: &client,
            decompress: true,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap()
    }

    #[test]
    fn test_small_payload_roundtrip_uncompressed() {
        let data = b"hello\n";
        let (block, client) = encode(ChkEncodeInput {
            data,
            as_metadata: false,
            dont_compress: true,
            precompressed_algo: None,
            descriptor: String::new(),
            decryption_key: None,
            crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
        })
        .unwrap();
        assert_eq!(client.compression, CompressionAlgorithm::None);
        let uri = client.to_uri().to_string();
        assert!(uri.starts_with("CHK@"));
        let out = decode(ChkDecodeInput {
            block: &block,
            client: &client,
            decompress: true,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_compressible_payload_roundtrips_and_reports_compressed() {
        let data = vec![0x01u8; 5120];
        let (block, client) = encode(ChkEncodeInput {
            data: &data,
            as_metadata: false,
            dont_compress: false,
            precompressed_algo: None,
            descriptor: "GZIP".to_string(),
            decryption_key: None,
            crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
        })
        .unwrap();
        assert!(client.is_compressed());
        let out = decode(ChkDecodeInput {
            block: &block,
            client: &client,
            decompress: true,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_identical_payloads_produce_identical_routing_key() {
        // A full 32768-byte payload never needs a random padding
        // tail, so (unlike a short payload) two independent encodes
        // of it are actually comparable byte for byte.
        let data = vec![0x7Eu8; BLOCK_SIZE];
        let decryption_key = DecryptionKey::from_bytes(sha256::hash(&data));
        let (a, _) = encode(ChkEncodeInput {
            data: &data,
            as_metadata: false,
            dont_compress: true,
            precompressed_algo: None,
            descriptor: String::new(),
            decryption_key: Some(decryption_key),
            crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
        })
        .unwrap();
        let (b, _) = encode(ChkEncodeInput {
            data: &data,
            as_metadata: false,
            dont_compress: true,
            precompressed_algo: None,
            descriptor: String::new(),
            decryption_key: Some(decryption_key),
            crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
        })
        .unwrap();
        assert_eq!(a.key.routing, b.key.routing);
        assert_eq!(a.headers, b.headers);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_decode_fails_with_wrong_decryption_key() {
        let data = b"some payload";
        let (block, client) = encode(ChkEncodeInput {
            data,
            as_metadata: false,
            dont_compress: true,
            precompressed_algo: None,
            descriptor: String::new(),
            decryption_key: None,
            crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
        })
        .unwrap();
        let mut wrong_client = client.clone();
        wrong_client.decryption = Some(DecryptionKey::from_bytes([0xAAu8; 32]));
        let err = decode(ChkDecodeInput {
            block: &block,
            client: &wrong_client,
            decompress: true,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap_err();
        assert!(matches!(err, HyphanetError::CannotDecode { .. }));
    }

    #[test]
    fn test_pcfb_crypto_algo_also_roundtrips() {
        let out = roundtrip(
            b"pcfb flavoured payload",
            true,
            "",
            CryptoAlgorithm::AesPcfb256Sha256,
        );
        assert_eq!(out, b"pcfb flavoured payload");
    }
}
