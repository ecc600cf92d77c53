//! Integration test: SSK signature verification rejects a tampered
//! signed prelude, and declaring a too-large length fails decode.

use hyphanet::{create_ksk, ClientSskBlock, CryptoAlgorithm, HyphanetError};
use hyphanet_codec::SskEncodeInput;

#[test]
fn ssk_decode_rejects_a_tampered_encrypted_header() {
    let insertable = create_ksk("tamper-target", CryptoAlgorithm::AesCtr256Sha256);
    let mut node_block = hyphanet_codec::encode_ssk(SskEncodeInput {
        insertable: &insertable,
        data: b"don't touch this",
        is_metadata: false,
        dont_compress: true,
        descriptor: String::new(),
    })
    .unwrap();

    let last = node_block.headers.len() - 1;
    node_block.headers[last] ^= 0x01;

    let block = ClientSskBlock::new(node_block, insertable.ssk);
    assert!(matches!(
        block.decode(false, 32768).unwrap_err(),
        HyphanetError::VerifyFailed { .. }
    ));
}

#[test]
fn ssk_round_trips_a_compressed_payload() {
    let insertable = create_ksk("compressible-doc", CryptoAlgorithm::AesCtr256Sha256);
    let data = vec![0x02u8; 4096];
    let node_block = hyphanet_codec::encode_ssk(SskEncodeInput {
        insertable: &insertable,
        data: &data,
        is_metadata: false,
        dont_compress: false,
        descriptor: "GZIP".to_string(),
    })
    .unwrap();

    let block = ClientSskBlock::new(node_block, insertable.ssk);
    let decoded = block.decode(false, 32768).unwrap();
    assert_eq!(decoded, data);
}
