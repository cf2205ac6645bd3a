//! ECDSA over short Weierstrass curves, secp256k1 by default.
//!
//! This library implements ECDSA signing and verification on top of the
//! `curve` crate:
//! - SHA-256 message hashing by default, any [`sha2::Digest`] on request
//! - caller-supplied nonces, or nonces drawn from a random number generator
//! - an optional [`NonceGuard`] that refuses to sign twice with one nonce
//!
//! # Example
//!
//! ```
//! use curve::CurveParams;
//! use ecdsa::KeyPair;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let curve = CurveParams::secp256k1();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Generate a random key pair
//! let keys = KeyPair::random(&curve, &mut rng).expect("key generation failed");
//!
//! // Sign the message
//! let signature = keys
//!     .signing_key()
//!     .sign_with_rng(&curve, &mut rng, b"hello ecdsa")
//!     .expect("signing failed");
//!
//! // Verify the signature
//! assert!(keys.verifying_key().verify(&curve, b"hello ecdsa", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each signature must use a fresh nonce; reusing one leaks the private key
//! - The arithmetic is not constant time and leaks timing information

mod constants;
mod errors;
mod keys;
mod nonce;
mod signatures;


pub use constants::{PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::EcdsaError;
pub use keys::{KeyPair, SigningKey, VerifyingKey};
pub use nonce::{NonceGuard, NonceLedger};
pub use signatures::{Signature, verify_batch};
