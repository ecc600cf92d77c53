//! SSK block decode (spec.md §4.6) plus a minimal encode path
//! (supplemented — see DESIGN.md) so the decode invariants have
//! something real to decode in tests.

use dsa::Signature;
use hyphanet_compress::{compress, decompress, CompressConfig};
use hyphanet_keys::{verifying_key_from_mpi, ClientSsk, InsertableClientSsk, NodeSsk};
use hyphanet_primitives::{random, rijndael256};
use hyphanet_types::{CompressionAlgorithm, HyphanetError, KeyType};
use rand::rngs::OsRng;
use signature::{RandomizedSigner, Verifier};

use crate::chk::BLOCK_SIZE;

const ENCRYPTED_HEADERS_LEN: usize = 36;
/// Top bit of the length field marks the block as metadata rather
/// than plain data (spec.md §4.6 step 5).
const METADATA_FLAG: u16 = 0x8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSskBlock {
    pub data: Vec<u8>,
    pub headers: Vec<u8>,
    pub key: NodeSsk,
}

pub struct SskEncodeInput<'a> {
    pub insertable: &'a InsertableClientSsk,
    pub data: &'a [u8],
    pub is_metadata: bool,
    pub dont_compress: bool,
    pub descriptor: String,
}

/// Our own header layout for the insertable side: `sig_len_u16_be(2)
/// || signature(sig_len) || encrypted_headers(36)`. The source's
/// `HEADERS_OFFSET` is a build-specific constant derived from its DSA
/// parameter sizes; since this crate's insert path is a supplemented
/// addition rather than a wire-compatibility contract, it records its
/// own signature length instead of hard-coding one.
pub fn encode(input: SskEncodeInput<'_>) -> Result<NodeSskBlock, HyphanetError> {
    tracing::trace!(raw_len = input.data.len(), doc_name = %input.insertable.ssk.doc_name, "encoding SSK block");
    let (compressed, compression_algo) = compress(CompressConfig {
        data: input.data,
        dont_compress: input.dont_compress,
        precompressed_algo: None,
        original_length: None,
        max_before_compression: i32::MAX as u64,
        max_after_compression: BLOCK_SIZE as u64,
        short_prefix: true,
        descriptor: input.descriptor,
    })
    .map_err(|e| e.into_hyphanet(KeyType::Ssk))?;

    if compressed.len() > BLOCK_SIZE {
        tracing::warn!(
            compressed_len = compressed.len(),
            limit = BLOCK_SIZE,
            "compressed SSK payload does not fit a single block"
        );
        return Err(HyphanetError::TooBig {
            estimated_size: compressed.len() as u64,
        });
    }

    let mut padded = vec![0u8; BLOCK_SIZE];
    padded[..compressed.len()].copy_from_slice(&compressed);
    random::fill(&mut padded[compressed.len()..]);

    let data_decrypt_key: [u8; 32] = random::bytes();
    let block_data = rijndael256::cfb_encrypt(&data_decrypt_key, &data_decrypt_key, &padded);

    let mut length_flagged = compressed.len() as u16;
    if input.is_metadata {
        length_flagged |= METADATA_FLAG;
    }
    let mut encrypted_headers_plain = [0u8; ENCRYPTED_HEADERS_LEN];
    encrypted_headers_plain[0..32].copy_from_slice(&data_decrypt_key);
    encrypted_headers_plain[32..34].copy_from_slice(&length_flagged.to_be_bytes());
    encrypted_headers_plain[34..36].copy_from_slice(&compression_algo.as_i16().to_be_bytes());

    let ssk = &input.insertable.ssk;
    let encrypted_headers = rijndael256::cfb_encrypt(
        ssk.decryption.as_bytes(),
        &ssk.eh_docname,
        &encrypted_headers_plain,
    );

    let signature: Signature = input
        .insertable
        .signing_key
        .try_sign_with_rng(&mut OsRng, &encrypted_headers)
        .map_err(|e| HyphanetError::cannot_encode(KeyType::Ssk, e.to_string()))?;
    let signature_bytes: Box<[u8]> = signature::SignatureEncoding::to_bytes(&signature);

    let mut headers = Vec::with_capacity(2 + signature_bytes.len() + ENCRYPTED_HEADERS_LEN);
    headers.extend_from_slice(&(signature_bytes.len() as u16).to_be_bytes());
    headers.extend_from_slice(&signature_bytes);
    headers.extend_from_slice(&encrypted_headers);

    let key = ssk.node_key();
    tracing::debug!(?key, compression_algo = ?compression_algo, "encoded SSK block");

    Ok(NodeSskBlock {
        data: block_data,
        headers,
        key,
    })
}

pub struct SskDecodeInput<'a> {
    pub client: &'a ClientSsk,
    pub block: &'a NodeSskBlock,
    pub dont_decompress: bool,
    pub max_length: u64,
}

pub fn decode(input: SskDecodeInput<'_>) -> Result<Vec<u8>, HyphanetError> {
    tracing::trace!(key = ?input.block.key, "decoding SSK block");
    if input.block.headers.len() < 2 {
        return Err(HyphanetError::cannot_decode(KeyType::Ssk, "truncated headers"));
    }
    let sig_len = u16::from_be_bytes([input.block.headers[0], input.block.headers[1]]) as usize;
    let headers_offset = 2 + sig_len;
    if input.block.headers.len() < headers_offset + ENCRYPTED_HEADERS_LEN {
        return Err(HyphanetError::cannot_decode(KeyType::Ssk, "truncated headers"));
    }
    let signature_bytes = &input.block.headers[2..headers_offset];
    let encrypted_headers = &input.block.headers[headers_offset..headers_offset + ENCRYPTED_HEADERS_LEN];

    let public_key = input
        .client
        .public_key
        .as_ref()
        .ok_or_else(|| HyphanetError::verify_failed(KeyType::Ssk, "no public key to verify signed prelude"))?;
    let verifying_key = verifying_key_from_mpi(public_key)
        .ok_or_else(|| HyphanetError::verify_failed(KeyType::Ssk, "malformed public key"))?;
    let signature = <Signature as signature::SignatureEncoding>::try_from(signature_bytes)
        .map_err(|_| HyphanetError::verify_failed(KeyType::Ssk, "malformed signature"))?;
    verifying_key.verify(encrypted_headers, &signature).map_err(|_| {
        tracing::warn!(key = ?input.block.key, "SSK signed prelude failed to verify");
        HyphanetError::verify_failed(KeyType::Ssk, "signed prelude does not verify")
    })?;

    let decrypted_headers =
        rijndael256::cfb_decrypt(input.client.decryption.as_bytes(), &input.client.eh_docname, encrypted_headers);
    let data_decrypt_key: [u8; 32] = decrypted_headers[0..32]
        .try_into()
        .expect("encrypted_headers is exactly ENCRYPTED_HEADERS_LEN bytes");
    let plaintext = rijndael256::cfb_decrypt(&data_decrypt_key, &data_decrypt_key, &input.block.data);

    let length_flagged = u16::from_be_bytes([decrypted_headers[32], decrypted_headers[33]]);
    let length = (length_flagged & !METADATA_FLAG) as usize;
    if length > plaintext.len() {
        return Err(HyphanetError::cannot_decode(KeyType::Ssk, "declared length exceeds plaintext"));
    }
    let compression_raw = i16::from_be_bytes([decrypted_headers[34], decrypted_headers[35]]);
    let compression_algo = CompressionAlgorithm::try_from(compression_raw)
        .map_err(|_| HyphanetError::cannot_decode(KeyType::Ssk, "unknown compression algorithm"))?;

    if input.dont_decompress {
        return if compression_algo.is_compressed() {
            Ok(plaintext[2..length].to_vec())
        } else {
            Ok(plaintext[..length].to_vec())
        };
    }
    let out = if compression_algo.is_compressed() {
        let max_length = input.max_length.min(BLOCK_SIZE as u64);
        decompress(&plaintext[..length], compression_algo, max_length, true)
            .map_err(|e| e.into_hyphanet(KeyType::Ssk))?
    } else {
        plaintext[..length].to_vec()
    };
    tracing::debug!(out_len = out.len(), "decoded SSK block");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyphanet_keys::create_ksk;
    use hyphanet_types::CryptoAlgorithm;

    #[test]
    fn test_ssk_roundtrip_uncompressed() {
        let insertable = create_ksk("my-document", CryptoAlgorithm::AesCtr256Sha256);
        let data = b"a small signed document";
        let block = encode(SskEncodeInput {
            insertable: &insertable,
            data,
            is_metadata: false,
            dont_compress: true,
            descriptor: String::new(),
        })
        .unwrap();
        let out = decode(SskDecodeInput {
            client: &insertable.ssk,
            block: &block,
            dont_decompress: false,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_ssk_roundtrip_compressed() {
        let insertable = create_ksk("another-document", CryptoAlgorithm::AesCtr256Sha256);
        let data = vec![0x42u8; 4096];
        let block = encode(SskEncodeInput {
            insertable: &insertable,
            data: &data,
            is_metadata: false,
            dont_compress: false,
            descriptor: "GZIP".to_string(),
        })
        .unwrap();
        let out = decode(SskDecodeInput {
            client: &insertable.ssk,
            block: &block,
            dont_decompress: false,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_ssk_decode_rejects_tampered_signed_prelude() {
        let insertable = create_ksk("tamper-me", CryptoAlgorithm::AesCtr256Sha256);
        let mut block = encode(SskEncodeInput {
            insertable: &insertable,
            data: b"payload",
            is_metadata: false,
            dont_compress: true,
            descriptor: String::new(),
        })
        .unwrap();
        let last = block.headers.len() - 1;
        block.headers[last] ^= 0xFF;
        let err = decode(SskDecodeInput {
            client: &insertable.ssk,
            block: &block,
            dont_decompress: false,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap_err();
        assert!(matches!(err, HyphanetError::VerifyFailed { .. }));
    }

    #[test]
    fn test_ssk_decode_rejects_missing_public_key() {
        let insertable = create_ksk("no-pubkey", CryptoAlgorithm::AesCtr256Sha256);
        let block = encode(SskEncodeInput {
            insertable: &insertable,
            data: b"payload",
            is_metadata: false,
            dont_compress: true,
            descriptor: String::new(),
        })
        .unwrap();
        let mut fetch_only = insertable.ssk.clone();
        fetch_only.public_key = None;
        let err = decode(SskDecodeInput {
            client: &fetch_only,
            block: &block,
            dont_decompress: false,
            max_length: BLOCK_SIZE as u64,
        })
        .unwrap_err();
        assert!(matches!(err, HyphanetError::VerifyFailed { .. }));
    }
}
