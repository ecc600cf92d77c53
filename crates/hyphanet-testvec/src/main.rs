//! Test vector generator for the Hyphanet access layer.
//!
//! Generates `test_vectors.json` containing canonical encode/decode
//! vectors for CHK/SSK/USK/KSK, so a consuming implementation can
//! cross-check wire compatibility.
//!
//! Usage:
//!   hyphanet-testvec           # Generate test_vectors.json
//!   hyphanet-testvec --verify  # Verify test vectors match expected values

use std::collections::BTreeMap;

use hyphanet_codec::ChkEncodeInput;
use hyphanet_primitives::sha256;
use hyphanet_types::{CryptoAlgorithm, DecryptionKey, RoutingKey};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct TestVectors {
    version: String,
    generated_by: String,
    vectors: BTreeMap<String, TestVector>,
}

#[derive(Serialize, Deserialize)]
struct TestVector {
    description: String,
    inputs: BTreeMap<String, String>,
    outputs: BTreeMap<String, String>,
}

fn generate_uri_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    let chk = hyphanet_keys::ClientChk::new(
        RoutingKey::from_bytes([0x11u8; 32]),
        Some(DecryptionKey::from_bytes([0x22u8; 32])),
        CryptoAlgorithm::AesCtr256Sha256,
        false,
        hyphanet_types::CompressionAlgorithm::None,
        Some("index.html".to_string()),
    );
    let uri = chk.to_uri();
    vectors.insert(
        "chk_uri_serialize".to_string(),
        TestVector {
            description: "ClientChk::toUri() for fixed routing/decryption keys".to_string(),
            inputs: BTreeMap::from([
                ("routing".to_string(), hex::encode([0x11u8; 32])),
                ("decryption".to_string(), hex::encode([0x22u8; 32])),
            ]),
            outputs: BTreeMap::from([("uri".to_string(), uri.to_string())]),
        },
    );

    let insertable = hyphanet_keys::create_ksk("freesite", CryptoAlgorithm::AesCtr256Sha256);
    vectors.insert(
        "ksk_decryption_key_from_keyword".to_string(),
        TestVector {
            description: "KSK decryption_key = SHA-256(UTF-8(keyword))".to_string(),
            inputs: BTreeMap::from([("keyword".to_string(), "freesite".to_string())]),
            outputs: BTreeMap::from([(
                "decryption_key".to_string(),
                hex::encode(sha256::hash(b"freesite")),
            )]),
        },
    );
    let _ = insertable;

    vectors
}

fn generate_chk_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    // A full 32768-byte payload never gets a random padding tail, so
    // unlike a short payload its routing key is reproducible run to
    // run — the only shape of CHK vector worth freezing in a fixture.
    let data = vec![0x09u8; hyphanet_codec::chk::BLOCK_SIZE];
    let decryption_key = DecryptionKey::from_bytes(sha256::hash(&data));
    let (_, client) = hyphanet_codec::encode_chk(ChkEncodeInput {
        data: &data,
        as_metadata: false,
        dont_compress: true,
        precompressed_algo: None,
        descriptor: String::new(),
        decryption_key: Some(decryption_key),
        crypto_algo: CryptoAlgorithm::AesCtr256Sha256,
    })
    .unwrap();

    vectors.insert(
        "chk_full_block_content_hash".to_string(),
        TestVector {
            description: "CHK routing key for a full 32768-byte block (0x09 repeated) under its own content-hash decryption key".to_string(),
            inputs: BTreeMap::from([
                ("data_byte".to_string(), "0x09".to_string()),
                ("data_len".to_string(), hyphanet_codec::chk::BLOCK_SIZE.to_string()),
                ("crypto_algo".to_string(), "AES_CTR_256_SHA256".to_string()),
            ]),
            outputs: BTreeMap::from([
                ("decryption_key".to_string(), decryption_key.to_string()),
                ("routing_key".to_string(), client.routing.to_string()),
            ]),
        },
    );

    vectors
}

fn generate_all_vectors() -> TestVectors {
    let mut vectors = BTreeMap::new();
    vectors.extend(generate_uri_vectors());
    vectors.extend(generate_chk_vectors());
    TestVectors {
        version: "1".to_string(),
        generated_by: "hyphanet-testvec".to_string(),
        vectors,
    }
}

fn verify_vectors(vectors: &TestVectors) -> bool {
    let regenerated = generate_all_vectors();
    let mut all_pass = true;

    for (name, expected) in &vectors.vectors {
        if let Some(actual) = regenerated.vectors.get(name) {
            if actual.outputs != expected.outputs {
                eprintln!("FAIL: {name}");
                eprintln!("  expected: {:?}", expected.outputs);
                eprintln!("  actual:   {:?}", actual.outputs);
                all_pass = false;
            } else {
                eprintln!("PASS: {name}");
            }
        } else {
            eprintln!("MISSING: {name}");
            all_pass = false;
        }
    }

    all_pass
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = "tests/fixtures/test_vectors.json";

    if args.iter().any(|a| a == "--verify") {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let vectors: TestVectors = serde_json::from_str(&content).expect("valid JSON");
                if verify_vectors(&vectors) {
                    eprintln!("All test vectors verified successfully.");
                } else {
                    eprintln!("Test vector verification FAILED.");
                    std::process::exit(1);
                }
            }
            Err(_) => {
                eprintln!("No existing test vectors found at {path}.");
                std::process::exit(1);
            }
        }
        return;
    }

    let vectors = generate_all_vectors();
    let json = serde_json::to_string_pretty(&vectors).expect("serialize");
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent).expect("create dirs");
    }
    std::fs::write(path, &json).expect("write file");
    eprintln!("Generated {} test vectors to {path}", vectors.vectors.len());

    if verify_vectors(&vectors) {
        eprintln!("Self-verification passed.");
    } else {
        eprintln!("Self-verification FAILED.");
        std::process::exit(1);
    }
}
