//! Cipher/IV-width selection by `CryptoAlgorithm`, shared between the
//! CHK and SSK pipelines (spec.md §4.3 step 5).

use hyphanet_primitives::{aes_ctr, rijndael256};
use hyphanet_types::CryptoAlgorithm;

pub fn encrypt(algo: CryptoAlgorithm, key: &[u8; 32], tag: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    match algo {
        CryptoAlgorithm::AesPcfb256Sha256 => rijndael256::cfb_encrypt(key, tag, plaintext),
        CryptoAlgorithm::AesCtr256Sha256 => {
            let iv: [u8; 16] = tag[..16].try_into().expect("tag is 32 bytes");
            aes_ctr::encrypt(key, &iv, plaintext).expect("key/iv widths are fixed by construction")
        }
    }
}

pub fn decrypt(algo: CryptoAlgorithm, key: &[u8; 32], tag: &[u8; 32], ciphertext: &[u8]) -> Vec<u8> {
    match algo {
        CryptoAlgorithm::AesPcfb256Sha256 => rijndael256::cfb_decrypt(key, tag, ciphertext),
        CryptoAlgorithm::AesCtr256Sha256 => {
            let iv: [u8; 16] = tag[..16].try_into().expect("tag is 32 bytes");
            aes_ctr::decrypt(key, &iv, ciphertext).expect("key/iv widths are fixed by construction")
        }
    }
}
