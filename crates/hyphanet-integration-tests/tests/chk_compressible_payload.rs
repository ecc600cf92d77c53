//! Integration test: CHK compressible payload.
//!
//! Feed 5120 bytes of value `0x01` with descriptor `"GZIP"`. The
//! resulting `ClientChk` must report itself compressed, and decoding
//! must recover the original 5120-byte payload.

use hyphanet::{ChkEncodeInput, ClientChkBlock, CryptoAlgorithm};

#[test]
fn chk_compressible_payload_is_flagged_compressed_and_round_trips() {
    let data = vec![0x01u8; 5120];
    let (node_block, client) = hyphanet_codec::encode_chk(ChkEncodeInput {
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

    let block = ClientChkBlock::new(node_block, client);
    let decoded = block.decode(true, 32768).unwrap();
    assert_eq!(decoded, data);
}
