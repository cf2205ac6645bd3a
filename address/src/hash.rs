//! Hash primitives of the address pipeline.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of the checksum appended to a versioned payload.
pub const CHECKSUM_LEN: usize = 4;

/// `SHA-256(SHA-256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// `RIPEMD-160(SHA-256(data))`.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// The first four bytes of [`sha256d`].
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
