//! Prime field arithmetic over arbitrary-precision integers.
//!
//! The same [`PrimeField`] type serves both the coordinate field (modulus `P`)
//! and the scalar field (modulus `N`). Every operation returns a value reduced
//! into `[0, modulus)`.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;

/// Element of a prime field, always kept in `[0, modulus)`.
pub type FieldElement = BigUint;

/// Computes `value^-1 mod modulus` with the extended Euclidean algorithm.
///
/// Only the Bézout coefficient of `value` is tracked. At every step
/// `coefficient * value ≡ remainder (mod modulus)` holds, so once the
/// remainder reaches 1 the coefficient is the inverse. A remainder of 0 means
/// `value` and `modulus` share the factor left in the previous remainder.
///
/// `value` may be negative or larger than the modulus.
pub fn mod_inverse(value: &BigInt, modulus: &BigUint) -> Result<FieldElement, CurveError> {
    if *modulus <= BigUint::one() {
        return Err(CurveError::NonInvertible {
            gcd: modulus.clone(),
        });
    }

    let m = BigInt::from(modulus.clone());
    let mut prev_rem = m.clone();
    let mut rem = value.mod_floor(&m);
    let mut prev_coef = BigInt::zero();
    let mut coef = BigInt::one();

    while !rem.is_zero() && !rem.is_one() {
        let (quotient, next_rem) = prev_rem.div_rem(&rem);
        let next_coef = &prev_coef - &quotient * &coef;
        prev_coef = core::mem::replace(&mut coef, next_coef);
        prev_rem = core::mem::replace(&mut rem, next_rem);
    }

    if rem.is_zero() {
        let (_, gcd) = prev_rem.into_parts();
        return Err(CurveError::NonInvertible { gcd });
    }

    let (_, inverse) = coef.mod_floor(&m).into_parts();
    Ok(inverse)
}

/// A prime modulus together with reduced modular arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Wraps a modulus. Primality is not checked; domain parameters are
    /// trusted inputs.
    pub fn new(modulus: BigUint) -> Result<Self, CurveError> {
        if modulus <= BigUint::one() {
            return Err(CurveError::InvalidParameters("modulus must exceed 1"));
        }
        Ok(Self { modulus })
    }

    /// Wraps a modulus from the built-in constants without checks.
    pub(crate) fn from_trusted(modulus: BigUint) -> Self {
        Self { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of bytes in the fixed-width big-endian encoding of an element.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.modulus.bits().div_ceil(8) as usize
    }

    /// Whether `value` is already a canonical element, i.e. `< modulus`.
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Whether `value` lies in `[1, modulus)`.
    #[inline]
    pub fn contains_nonzero(&self, value: &BigUint) -> bool {
        !value.is_zero() && self.contains(value)
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> FieldElement {
        value % &self.modulus
    }

    /// Reduces a possibly negative integer into `[0, modulus)`.
    pub fn reduce_signed(&self, value: &BigInt) -> FieldElement {
        let m = BigInt::from(self.modulus.clone());
        let (_, reduced) = value.mod_floor(&m).into_parts();
        reduced
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> FieldElement {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> FieldElement {
        self.mul(a, a)
    }

    pub fn neg(&self, a: &BigUint) -> FieldElement {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    /// Multiplicative inverse; fails with [`CurveError::NonInvertible`] for
    /// zero.
    pub fn inverse(&self, a: &BigUint) -> Result<FieldElement, CurveError> {
        mod_inverse(&BigInt::from(a.clone()), &self.modulus)
    }

    /// Computes `a / b`.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<FieldElement, CurveError> {
        Ok(self.mul(a, &self.inverse(b)?))
    }
}
