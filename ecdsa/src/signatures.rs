//! Signature type, message hashing and batch verification.

use curve::{BigUint, CurveParams, encode_fixed_width};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::errors::EcdsaError;
use crate::keys::VerifyingKey;

/// An ECDSA signature `(r, s)`.
///
/// Signatures produced by [`SigningKey::sign`](crate::SigningKey::sign) have
/// both components in `[1, N)`. Values parsed from untrusted input may not;
/// verification rejects those.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The x-coordinate of `k * G` reduced modulo N, where k is the nonce
    pub r: BigUint,
    /// `(hash + r * d) / k mod N`, where d is the private key
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Whether both components lie in `[1, N)`.
    pub fn is_well_formed(&self, curve: &CurveParams) -> bool {
        let scalars = curve.scalar_field();
        scalars.contains_nonzero(&self.r) && scalars.contains_nonzero(&self.s)
    }

    /// Fixed-width `r || s` encoding, each half as wide as N.
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>, EcdsaError> {
        let width = curve.scalar_field().byte_len();
        let mut out = encode_fixed_width(&self.r, width)?;
        out.extend(encode_fixed_width(&self.s, width)?);
        Ok(out)
    }

    /// Parses the `r || s` encoding.
    ///
    /// Only the length is checked; range checks are left to verification.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self, EcdsaError> {
        let width = curve.scalar_field().byte_len();
        if bytes.len() != 2 * width {
            return Err(EcdsaError::InvalidSignatureEncoding);
        }
        let (r, s) = bytes.split_at(width);
        Ok(Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }
}

/// Hashes `msg` with `D` and converts the digest to an integer.
///
/// The digest is read big-endian. A digest wider than N keeps only its
/// leftmost `bits(N)` bits; for SHA-256 on secp256k1 the whole digest is
/// used.
pub(crate) fn hash_message<D: Digest>(curve: &CurveParams, msg: &[u8]) -> BigUint {
    let digest = D::digest(msg);
    let value = BigUint::from_bytes_be(digest.as_slice());

    let digest_bits = 8 * digest.len() as u64;
    let order_bits = curve.n().bits();
    if digest_bits > order_bits {
        value >> (digest_bits - order_bits)
    } else {
        value
    }
}

/// Verifies independent `(key, message, signature)` triples.
///
/// Each entry is checked on its own with SHA-256; the result vector is in
/// input order.
pub fn verify_batch(
    curve: &CurveParams,
    items: &[(&VerifyingKey, &[u8], &Signature)],
) -> Vec<bool> {
    items
        .iter()
        .map(|(key, msg, sig)| key.verify(curve, msg, sig))
        .collect()
}
