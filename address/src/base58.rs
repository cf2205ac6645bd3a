//! Base58 with the Bitcoin alphabet.
//!
//! The payload is read as one big-endian unsigned integer and written in
//! base 58, most significant digit first. Leading zero bytes carry no value,
//! so they are rendered separately: every started pair of leading zero bytes
//! becomes one `'1'`. A single version byte `0x00` and a run of two zero
//! bytes both produce exactly one leading `'1'`.
//!
//! Since several zero-byte prefixes share a rendering, [`decode`] needs the
//! payload width to restore them.

use curve::BigUint;

use crate::errors::AddressError;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes `payload` as Base58.
pub fn encode(payload: &[u8]) -> String {
    let zeros = payload.iter().take_while(|&&b| b == 0).count();
    let rest = &payload[zeros..];

    let mut out = String::with_capacity(zeros.div_ceil(2) + rest.len() * 138 / 100 + 1);
    out.extend(std::iter::repeat_n('1', zeros.div_ceil(2)));
    if !rest.is_empty() {
        let digits = BigUint::from_bytes_be(rest).to_radix_be(58);
        out.extend(digits.iter().map(|&d| char::from(ALPHABET[usize::from(d)])));
    }
    out
}

/// Decodes a Base58 string into exactly `width` bytes, left-padding with
/// zeros.
pub fn decode(s: &str, width: usize) -> Result<Vec<u8>, AddressError> {
    let mut value = BigUint::default();
    for (index, ch) in s.chars().enumerate() {
        let digit = digit_of(ch).ok_or(AddressError::InvalidCharacter { ch, index })?;
        value = value * 58u32 + digit;
    }

    let bytes = if value.bits() == 0 {
        Vec::new()
    } else {
        value.to_bytes_be()
    };
    if bytes.len() > width {
        return Err(AddressError::PayloadTooLong { width });
    }

    let mut out = vec![0u8; width - bytes.len()];
    out.extend(bytes);
    Ok(out)
}

fn digit_of(ch: char) -> Option<u32> {
    if !ch.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&c| c == ch as u8)
        .map(|d| d as u32)
}
