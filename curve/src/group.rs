use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::CurveError;
use crate::params::CurveParams;
use crate::point::Point;

impl CurveParams {
    /// Computes `scalar * base` for a scalar in `[1, N)`.
    ///
    /// Out-of-range scalars are rejected with [`CurveError::InvalidScalar`]
    /// rather than reduced.
    pub fn scalar_mul(&self, base: &Point, scalar: &BigUint) -> Result<Point, CurveError> {
        if !self.scalar_field().contains_nonzero(scalar) {
            return Err(CurveError::InvalidScalar);
        }
        self.double_and_add(base, scalar)
    }

    /// Computes `scalar * G`.
    #[inline]
    pub fn mul_generator(&self, scalar: &BigUint) -> Result<Point, CurveError> {
        self.scalar_mul(self.generator(), scalar)
    }

    /// Binary double-and-add, most significant bit first, without a range
    /// check on the scalar.
    ///
    /// The accumulator starts at `base`, which accounts for the leading one
    /// bit, so a scalar of bit length `k` costs exactly `k - 1` doublings.
    /// A zero scalar gives the point at infinity.
    pub fn double_and_add(&self, base: &Point, scalar: &BigUint) -> Result<Point, CurveError> {
        if scalar.is_zero() || base.is_infinity() {
            return Ok(Point::Infinity);
        }

        let mut result = base.clone();
        for bit in (0..scalar.bits() - 1).rev() {
            result = self.double(&result)?;
            if scalar.bit(bit) {
                result = self.add(&result, base)?;
            }
        }

        Ok(result)
    }

    /// Computes `n * base` for a machine-word multiplier.
    pub fn mul_u64(&self, base: &Point, n: u64) -> Result<Point, CurveError> {
        self.double_and_add(base, &BigUint::from(n))
    }
}
