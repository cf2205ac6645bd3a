//! Detection of nonce reuse.
//!
//! The signature engine itself is stateless and cannot notice a nonce being
//! used twice. Callers that want that check pass a [`NonceGuard`] to
//! [`SigningKey::sign_guarded`](crate::SigningKey::sign_guarded). Keep one
//! guard per signing key.

use std::collections::HashSet;

use curve::BigUint;
use sha2::{Digest, Sha256};

/// Set-membership check over nonces.
pub trait NonceGuard {
    /// Records `nonce`, returning `false` if it had already been recorded.
    fn register(&mut self, nonce: &BigUint) -> bool;
}

impl NonceGuard for HashSet<BigUint> {
    fn register(&mut self, nonce: &BigUint) -> bool {
        self.insert(nonce.clone())
    }
}

/// In-memory nonce guard that stores SHA-256 fingerprints rather than the
/// nonces themselves.
#[derive(Clone, Debug, Default)]
pub struct NonceLedger {
    seen: HashSet<[u8; 32]>,
}

impl NonceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `nonce` has been recorded.
    pub fn contains(&self, nonce: &BigUint) -> bool {
        self.seen.contains(&fingerprint(nonce))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl NonceGuard for NonceLedger {
    fn register(&mut self, nonce: &BigUint) -> bool {
        self.seen.insert(fingerprint(nonce))
    }
}

fn fingerprint(nonce: &BigUint) -> [u8; 32] {
    Sha256::digest(nonce.to_bytes_be()).into()
}
