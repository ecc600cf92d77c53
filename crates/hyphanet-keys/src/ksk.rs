//! `ClientKsk`: an SSK whose keys are derived from a human-chosen
//! keyword.
//!
//! The decryption key is deterministic (`SHA-256(keyword)`); the
//! routing key is not, since it comes from a freshly generated DSA
//! keypair each call. Two `create` calls for the same keyword
//! therefore yield two different URIs — this matches the source
//! literally (see DESIGN.md); callers that need a stable KSK URI
//! must cache the generated pair themselves.

use hyphanet_primitives::sha256;
use hyphanet_types::{CryptoAlgorithm, DecryptionKey, RoutingKey};

use crate::dsa_keys::DsaKeyPair;
use crate::ssk::{ClientSsk, InsertableClientSsk};

pub type ClientKsk = InsertableClientSsk;

pub fn create(keyword: &str, crypto_algo: CryptoAlgorithm) -> ClientKsk {
    create_with_meta(keyword, crypto_algo, Vec::new())
}

/// Same derivation as [`create`], but carrying through meta-strings
/// beyond the keyword (the `KSK@keyword/path...` case). Kept
/// crate-visible so `ClientKey::from_uri` can build a KSK from a
/// parsed URI without duplicating the keypair/derivation logic.
pub(crate) fn create_with_meta(keyword: &str, crypto_algo: CryptoAlgorithm, meta_strings: Vec<String>) -> ClientKsk {
    let pair = DsaKeyPair::generate();
    let public_key = pair.public_key_mpi();
    let decryption = DecryptionKey::from_bytes(sha256::hash(keyword.as_bytes()));
    let routing = RoutingKey::from_bytes(sha256::hash(&public_key));
    let ssk = ClientSsk::new(
        routing,
        decryption,
        crypto_algo,
        keyword.to_string(),
        Some(public_key),
        meta_strings,
    )
    .expect("just hashed this public key into routing ourselves");
    InsertableClientSsk::new(ssk, pair.signing_key)
}
