//! Pooled SHA-256 hashing.
//!
//! The pool is a plain allocator optimisation, never a correctness
//! requirement: any thread can allocate a fresh hasher on a miss, and
//! a hasher that fails to return to the pool is just dropped. It never
//! holds a lock across an I/O operation, since callers only ever feed
//! it in-memory byte slices.

use std::sync::Mutex;

use sha2::{Digest, Sha256};

/// Maximum number of idle hashers kept around.
const POOL_CAPACITY: usize = 32;

static POOL: Mutex<Vec<Sha256>> = Mutex::new(Vec::new());

fn acquire() -> Sha256 {
    POOL.lock()
        .ok()
        .and_then(|mut pool| pool.pop())
        .unwrap_or_default()
}

fn release(hasher: Sha256) {
    if let Ok(mut pool) = POOL.lock() {
        if pool.len() < POOL_CAPACITY {
            pool.push(hasher);
        }
    }
}

/// Compute the SHA-256 digest of `data`.
pub fn hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = acquire();
    hasher.update(data);
    let digest = hasher.finalize_reset();
    let out: [u8; 32] = digest.into();
    release(hasher);
    out
}

/// Compute the SHA-256 digest of several fields concatenated, without
/// allocating an intermediate buffer.
pub fn hash_concat(fields: &[&[u8]]) -> [u8; 32] {
    let mut hasher = acquire();
    for field in fields {
        hasher.update(field);
    }
    let digest = hasher.finalize_reset();
    let out: [u8; 32] = digest.into();
    release(hasher);
    out
}
