//! DSA keypair generation for KSK/SSK insertion, over a fixed
//! domain-parameter group (spec.md §4.2/§9: "generate a DSA key pair
//! over a fixed group"). The group is generated once per process and
//! reused for every subsequent keypair; only the private exponent
//! differs between calls, which is exactly why two `ClientKsk::create`
//! calls for the same keyword produce different routing keys (see
//! DESIGN.md's Open Question record).

use std::sync::OnceLock;

use dsa::{Components, KeySize, SigningKey};
use rand::rngs::OsRng;

static GROUP: OnceLock<Components> = OnceLock::new();

/// The process-wide fixed domain-parameter group every DSA keypair in
/// this crate is generated over. Exposed so the codec can reconstruct
/// a `VerifyingKey` from a bare public-key MPI (the wire format never
/// carries `p`/`q`/`g` — both sides are assumed to already agree on
/// them, same as the source).
pub fn group() -> &'static Components {
    GROUP.get_or_init(|| Components::generate(&mut OsRng, KeySize::DSA_2048_256))
}

/// A freshly generated DSA keypair over the fixed group.
pub struct DsaKeyPair {
    pub signing_key: SigningKey,
}

impl DsaKeyPair {
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng, group().clone());
        Self { signing_key }
    }

    /// The public key `y`, encoded as an MPI (2-byte bit-length
    /// prefix, then big-endian magnitude) — the form spec.md's
    /// `DSA_public_key_encoded_in_MPI_form` names.
    pub fn public_key_mpi(&self) -> Vec<u8> {
        mpi_encode(self.signing_key.verifying_key().y())
    }
}

/// Reconstruct a verifying key from the MPI encoding `public_key_mpi`
/// produces, over the shared fixed group.
pub fn verifying_key_from_mpi(bytes: &[u8]) -> Option<dsa::VerifyingKey> {
    if bytes.len() < 2 {
        return None;
    }
    let y = dsa::BigUint::from_bytes_be(&bytes[2..]);
    dsa::VerifyingKey::from_components(group().clone(), y).ok()
}

fn mpi_encode(value: &dsa::BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let bit_len = bytes.len() * 8
        - bytes
            .first()
            .map(|b| b.leading_zeros() as usize)
            .unwrap_or(0);
    let mut out = Vec::with_capacity(2 + bytes.len());
    out.push((bit_len >> 8) as u8);
    out.push(bit_len as u8);
    out.extend_from_slice(&bytes);
    out
}
