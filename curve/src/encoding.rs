//! SEC1 uncompressed point encoding.
//!
//! `0x04 || x || y`, each coordinate big-endian and left-padded with zeros
//! to the byte length of the field modulus.

use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::params::CurveParams;
use crate::point::Point;

/// Tag byte of an uncompressed SEC1 point.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Big-endian encoding of `value`, left-padded to exactly `width` bytes.
pub fn encode_fixed_width(value: &BigUint, width: usize) -> Result<Vec<u8>, CurveError> {
    let digits = value.to_bytes_be();
    // to_bytes_be renders zero as a single 0x00 byte
    let digits = if digits.iter().all(|&b| b == 0) {
        Vec::new()
    } else {
        digits
    };
    if digits.len() > width {
        return Err(CurveError::InvalidEncoding);
    }

    let mut out = vec![0u8; width - digits.len()];
    out.extend_from_slice(&digits);
    Ok(out)
}

impl CurveParams {
    /// Length in bytes of an uncompressed encoding on this curve.
    #[inline]
    pub fn encoded_point_len(&self) -> usize {
        1 + 2 * self.base_field().byte_len()
    }

    /// Serializes an affine point in uncompressed form.
    pub fn encode_point(&self, point: &Point) -> Result<Vec<u8>, CurveError> {
        let (x, y) = point.coordinates().ok_or(CurveError::PointAtInfinity)?;
        let width = self.base_field().byte_len();

        let mut out = Vec::with_capacity(self.encoded_point_len());
        out.push(SEC1_UNCOMPRESSED_TAG);
        out.extend(encode_fixed_width(x, width)?);
        out.extend(encode_fixed_width(y, width)?);
        Ok(out)
    }

    /// Parses an uncompressed point and checks that it lies on the curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point, CurveError> {
        if bytes.len() != self.encoded_point_len() {
            return Err(CurveError::InvalidEncoding);
        }
        let (tag, coords) = bytes.split_first().ok_or(CurveError::InvalidEncoding)?;
        if *tag != SEC1_UNCOMPRESSED_TAG {
            return Err(CurveError::InvalidEncoding);
        }

        let (x, y) = coords.split_at(self.base_field().byte_len());
        self.point(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
    }
}
