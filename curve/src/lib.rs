//! Short Weierstrass elliptic curve arithmetic over arbitrary-precision
//! integers.
//!
//! This crate provides prime field arithmetic (including the extended
//! Euclidean modular inverse), affine point algebra with an explicit point at
//! infinity, double-and-add scalar multiplication and SEC1 point encoding.
//! All operations take the curve as an explicit [`CurveParams`] value;
//! [`CurveParams::secp256k1`] supplies the standard parameters.
//!
//! Nothing here is constant time.

mod encoding;
mod errors;
mod field;
mod group;
mod msm;
mod params;
mod point;
mod random;

pub use encoding::{encode_fixed_width, SEC1_UNCOMPRESSED_TAG};
pub use errors::CurveError;
pub use field::{mod_inverse, FieldElement, PrimeField};
pub use num_bigint::{BigInt, BigUint};
pub use params::{
    CurveParams, SECP256K1_A, SECP256K1_B, SECP256K1_GX, SECP256K1_GY, SECP256K1_N, SECP256K1_P,
};
pub use point::Point;
