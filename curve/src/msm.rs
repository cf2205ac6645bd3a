use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::params::CurveParams;
use crate::point::Point;

impl CurveParams {
    /// Compute a * G + b * P with a single shared doubling chain.
    ///
    /// Either scalar may be zero, in which case its term is the point at
    /// infinity. Both must be below N.
    pub fn double_scalar_mul_basepoint(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &Point,
    ) -> Result<Point, CurveError> {
        let scalars = self.scalar_field();
        if !scalars.contains(a) || !scalars.contains(b) {
            return Err(CurveError::InvalidScalar);
        }

        let g = self.generator();
        let g_plus_p = self.add(g, point)?;
        let mut result = Point::Infinity;

        for bit in (0..a.bits().max(b.bits())).rev() {
            result = self.double(&result)?;
            let addend = match (a.bit(bit), b.bit(bit)) {
                (true, true) => &g_plus_p,
                (true, false) => g,
                (false, true) => point,
                (false, false) => continue,
            };
            result = self.add(&result, addend)?;
        }

        Ok(result)
    }
}
