//! Integration test: CHK small payload, uncompressed.
//!
//! Feed the 6-byte string `"hello\n"` with `dont_compress=true`,
//! `crypto_algo=AES_CTR_256_SHA256`. The returned `ClientChk::to_uri()`
//! must start with `CHK@`; reparsing, decoding, and comparing against
//! the original bytes must all round-trip, and the reported
//! compression algorithm must be `NONE`.

use hyphanet::{ChkEncodeInput, ClientChkBlock, ClientKey, CompressionAlgorithm, CryptoAlgorithm, UriExt};

#[test]
fn chk_small_uncompressed_payload_round_trips_through_a_uri() {
    let (node_block, client) = hyphanet_codec::encode_chk(ChkEncodeInput {
        data: b"hello\n",
        as_metadata: false,
        dont_compress: true,
        precompressed_algo: None,
        descriptor: String::new(),
        decryption_key: None,
        crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
    })
    .unwrap();

    assert_eq!(client.compression, CompressionAlgorithm::None);

    let uri = client.to_uri();
    let uri_string = uri.to_string();
    assert!(uri_string.starts_with("CHK@"));

    let reparsed = uri_string.parse::<hyphanet_uri::Uri>().unwrap();
    let key = reparsed.create_client_key().unwrap();
    let ClientKey::Chk(parsed_client) = key else {
        panic!("CHK URI must parse back into a ClientKey::Chk");
    };

    let block = ClientChkBlock::new(node_block, parsed_client);
    let decoded = block.decode(true, 32768).unwrap();
    assert_eq!(decoded, b"hello\n");
    assert_eq!(block.client.compression, CompressionAlgorithm::None);
}
