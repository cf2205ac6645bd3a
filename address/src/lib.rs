//! Base58Check pay-to-public-key-hash addresses.
//!
//! An address is derived from a public key in a fixed pipeline:
//! 1. uncompressed SEC1 encoding of the key
//! 2. SHA-256, then RIPEMD-160 of that digest (`hash160`)
//! 3. a version byte prepended (`0x00` for mainnet)
//! 4. the first 4 bytes of a double SHA-256 appended as checksum
//! 5. Base58 encoding of the 25-byte payload
//!
//! # Example
//!
//! ```
//! use address::derive_address;
//! use curve::CurveParams;
//!
//! let curve = CurveParams::secp256k1();
//! let public_key = curve.generator().clone();
//!
//! let address = derive_address(&curve, &public_key).expect("affine key");
//! assert_eq!(address.to_string(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
//!
//! let parsed: address::Address = address.to_string().parse().expect("valid address");
//! assert_eq!(parsed, address);
//! ```

mod address;
pub mod base58;
mod errors;
pub mod hash;

pub use address::{
    Address, MAINNET_P2PKH, PAYLOAD_LEN, TESTNET_P2PKH, address_from_sec1, derive_address,
    derive_address_with,
};
pub use errors::AddressError;
