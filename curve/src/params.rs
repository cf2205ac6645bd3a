//! Curve domain parameters.
//!
//! Short Weierstrass curve `y^2 = x^3 + a*x + b` over the prime field `F_P`,
//! with base point `G` of prime order `N`. The parameters are an explicit,
//! immutable value handed to every operation; nothing here is global state.
//!
//! secp256k1 (SEC 2, section 2.4.1):
//! - P = 2^256 - 2^32 - 977
//! - a = 0, b = 7
//! - N = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//! - cofactor 1

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::{FieldElement, PrimeField};
use crate::point::Point;

/// secp256k1 field modulus P, big-endian.
pub const SECP256K1_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// secp256k1 group order N, big-endian.
pub const SECP256K1_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// secp256k1 base point x-coordinate, big-endian.
pub const SECP256K1_GX: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

/// secp256k1 base point y-coordinate, big-endian.
pub const SECP256K1_GY: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];

/// secp256k1 coefficient a.
pub const SECP256K1_A: u64 = 0;

/// secp256k1 coefficient b.
pub const SECP256K1_B: u64 = 7;

/// Domain parameters of a short Weierstrass curve and its base point.
///
/// Deserialization goes through [`CurveParams::new`], so it applies the same
/// checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawCurveParams", try_from = "RawCurveParams")]
pub struct CurveParams {
    a: FieldElement,
    b: FieldElement,
    base_field: PrimeField,
    scalar_field: PrimeField,
    generator: Point,
}

impl CurveParams {
    /// Builds and validates a parameter set.
    ///
    /// Rejects singular curves, coefficients outside the field, an order
    /// below 2, and a base point that is not on the curve.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        n: BigUint,
    ) -> Result<Self, CurveError> {
        let base_field = PrimeField::new(p)?;
        let scalar_field = PrimeField::new(n)?;

        if !base_field.contains(&a) || !base_field.contains(&b) {
            return Err(CurveError::InvalidParameters(
                "coefficients must be reduced modulo P",
            ));
        }

        // 4a^3 + 27b^2 != 0 (mod P)
        let a3 = base_field.mul(&base_field.square(&a), &a);
        let disc = base_field.add(
            &base_field.mul(&BigUint::from(4u32), &a3),
            &base_field.mul(&BigUint::from(27u32), &base_field.square(&b)),
        );
        if disc.is_zero() {
            return Err(CurveError::InvalidParameters("curve is singular"));
        }

        let params = Self {
            a,
            b,
            base_field,
            scalar_field,
            generator: Point::Infinity,
        };
        let generator = params.point(gx, gy)?;

        Ok(Self { generator, ..params })
    }

    /// Builds a parameter set from hexadecimal strings.
    pub fn from_hex(
        p: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        n: &str,
    ) -> Result<Self, CurveError> {
        Self::new(
            parse_hex(p)?,
            parse_hex(a)?,
            parse_hex(b)?,
            parse_hex(gx)?,
            parse_hex(gy)?,
            parse_hex(n)?,
        )
    }

    /// The secp256k1 parameters.
    pub fn secp256k1() -> Self {
        Self {
            a: BigUint::from(SECP256K1_A),
            b: BigUint::from(SECP256K1_B),
            base_field: PrimeField::from_trusted(BigUint::from_bytes_be(&SECP256K1_P)),
            scalar_field: PrimeField::from_trusted(BigUint::from_bytes_be(&SECP256K1_N)),
            generator: Point::Affine {
                x: BigUint::from_bytes_be(&SECP256K1_GX),
                y: BigUint::from_bytes_be(&SECP256K1_GY),
            },
        }
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The coordinate field `F_P`.
    #[inline]
    pub fn base_field(&self) -> &PrimeField {
        &self.base_field
    }

    /// The scalar field `Z/NZ`.
    #[inline]
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalar_field
    }

    /// The field modulus P.
    #[inline]
    pub fn p(&self) -> &BigUint {
        self.base_field.modulus()
    }

    /// The order N of the base point.
    #[inline]
    pub fn n(&self) -> &BigUint {
        self.scalar_field.modulus()
    }

    /// The base point G.
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.generator
    }
}

/// Serialized form of [`CurveParams`]: the six defining integers.
#[derive(Serialize, Deserialize)]
struct RawCurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    n: BigUint,
}

impl From<CurveParams> for RawCurveParams {
    fn from(params: CurveParams) -> Self {
        // A generator at infinity never passes validation, so zeros are
        // rejected again on the way back in.
        let (gx, gy) = match params.generator {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => (BigUint::zero(), BigUint::zero()),
        };
        Self {
            p: params.base_field.modulus().clone(),
            a: params.a,
            b: params.b,
            gx,
            gy,
            n: params.scalar_field.modulus().clone(),
        }
    }
}

impl TryFrom<RawCurveParams> for CurveParams {
    type Error = CurveError;

    fn try_from(raw: RawCurveParams) -> Result<Self, Self::Error> {
        Self::new(raw.p, raw.a, raw.b, raw.gx, raw.gy, raw.n)
    }
}

fn parse_hex(s: &str) -> Result<BigUint, CurveError> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    BigUint::from_str_radix(digits, 16)
        .map_err(|_| CurveError::InvalidParameters("malformed hexadecimal parameter"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use num_traits::One;

    /// `y^2 = x^3 + 7` over `F_67`; `G = (2, 22)` generates the whole group of
    /// prime order 79.
    pub(crate) fn toy_curve() -> CurveParams {
        CurveParams::from_hex("43", "0", "7", "2", "16", "4f").expect("toy curve")
    }

    #[test]
    fn test_secp256k1_generator_on_curve() {
        let curve = CurveParams::secp256k1();
        assert!(curve.is_on_curve(curve.generator()));
        assert!(!curve.generator().is_infinity());
    }

    #[test]
    fn test_secp256k1_matches_validated_construction() {
        let curve = CurveParams::secp256k1();
        let checked = CurveParams::from_hex(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
            "0",
            "7",
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        )
        .expect("secp256k1");
        assert_eq!(curve, checked);
    }

    #[test]
    fn test_p_value() {
        // P = 2^256 - 2^32 - 977
        let expected = (BigUint::one() << 256) - (BigUint::one() << 32) - BigUint::from(977u32);
        assert_eq!(*CurveParams::secp256k1().p(), expected);
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        let err = CurveParams::from_hex("43", "0", "7", "2", "17", "4f").unwrap_err();
        assert_eq!(err, CurveError::NotOnCurve);
    }

    #[test]
    fn test_rejects_singular_curve() {
        let err = CurveParams::from_hex("43", "0", "0", "0", "0", "4f").unwrap_err();
        assert_eq!(err, CurveError::InvalidParameters("curve is singular"));
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!(CurveParams::from_hex("zz", "0", "7", "2", "16", "4f").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let curve = CurveParams::secp256k1();
        let bytes = bincode::serialize(&curve).expect("serialize");
        let back: CurveParams = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(back, curve);
    }

    #[test]
    fn test_deserialize_validates() {
        let off_curve = RawCurveParams {
            p: BigUint::from(67u32),
            a: BigUint::zero(),
            b: BigUint::from(7u32),
            gx: BigUint::from(2u32),
            gy: BigUint::from(23u32),
            n: BigUint::from(79u32),
        };
        let bytes = bincode::serialize(&off_curve).expect("serialize");
        assert!(bincode::deserialize::<CurveParams>(&bytes).is_err());

        let singular = RawCurveParams {
            b: BigUint::zero(),
            gx: BigUint::zero(),
            gy: BigUint::zero(),
            ..off_curve
        };
        let bytes = bincode::serialize(&singular).expect("serialize");
        assert!(bincode::deserialize::<CurveParams>(&bytes).is_err());
    }

    #[test]
    fn test_toy_curve_accessors() {
        let curve = toy_curve();
        assert_eq!(*curve.p(), BigUint::from(67u32));
        assert_eq!(*curve.n(), BigUint::from(79u32));
        assert_eq!(*curve.b(), BigUint::from(7u32));
        assert!(curve.a().is_zero());
    }
}
