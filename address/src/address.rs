use core::fmt;
use core::str::FromStr;

use curve::{CurveParams, Point};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::base58;
use crate::errors::AddressError;
use crate::hash::{CHECKSUM_LEN, checksum};

/// Version byte of mainnet pay-to-public-key-hash addresses.
pub const MAINNET_P2PKH: u8 = 0x00;
/// Version byte of testnet pay-to-public-key-hash addresses.
pub const TESTNET_P2PKH: u8 = 0x6f;

/// Payload length of a P2PKH address: version, hash160 and checksum.
pub const PAYLOAD_LEN: usize = 1 + 20 + CHECKSUM_LEN;

/// A Base58Check address together with its decoded payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    payload: Vec<u8>,
    encoded: String,
}

impl Address {
    fn from_versioned(mut versioned: Vec<u8>) -> Self {
        let check = checksum(&versioned);
        versioned.extend_from_slice(&check);
        let encoded = base58::encode(&versioned);
        Self {
            payload: versioned,
            encoded,
        }
    }

    /// Parses a P2PKH address string.
    ///
    /// The string must be the canonical encoding of a [`PAYLOAD_LEN`]-byte
    /// payload whose last four bytes match its checksum.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let payload = base58::decode(s, PAYLOAD_LEN)?;
        if base58::encode(&payload) != s {
            return Err(AddressError::NonCanonical);
        }

        let (versioned, check) = payload.split_at(PAYLOAD_LEN - CHECKSUM_LEN);
        if checksum(versioned) != check {
            return Err(AddressError::ChecksumMismatch);
        }

        Ok(Self {
            encoded: s.to_owned(),
            payload,
        })
    }

    /// Version byte.
    pub fn version(&self) -> u8 {
        self.payload[0]
    }

    /// The hashed public key between version byte and checksum.
    pub fn pubkey_hash(&self) -> &[u8] {
        &self.payload[1..self.payload.len() - CHECKSUM_LEN]
    }

    /// Version, key hash and checksum as raw bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Derives the mainnet P2PKH address of `public_key`.
pub fn derive_address(curve: &CurveParams, public_key: &Point) -> Result<Address, AddressError> {
    derive_address_with::<Sha256, Ripemd160>(curve, public_key, MAINNET_P2PKH)
}

/// Derives an address with caller-chosen hash functions and version byte.
///
/// The key hash is `Secondary(Primary(sec1))`; the checksum is always the
/// double SHA-256 prefix.
pub fn derive_address_with<Primary: Digest, Secondary: Digest>(
    curve: &CurveParams,
    public_key: &Point,
    version: u8,
) -> Result<Address, AddressError> {
    let sec1 = curve.encode_point(public_key)?;
    let key_hash = Secondary::digest(Primary::digest(&sec1));

    let mut versioned = Vec::with_capacity(1 + key_hash.len() + CHECKSUM_LEN);
    versioned.push(version);
    versioned.extend_from_slice(&key_hash);

    let address = Address::from_versioned(versioned);
    trace!(%address, version, "derived address");
    Ok(address)
}

/// Parses an uncompressed SEC1 public key, checks it is on the curve, and
/// derives its mainnet address.
pub fn address_from_sec1(curve: &CurveParams, bytes: &[u8]) -> Result<Address, AddressError> {
    let point = curve.decode_point(bytes)?;
    derive_address(curve, &point)
}
