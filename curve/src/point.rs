use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::params::CurveParams;

/// A point on the curve in affine coordinates, or the point at infinity.
///
/// Operations on [`CurveParams`] assume their `Affine` inputs satisfy the
/// curve equation. Use [`CurveParams::point`] or
/// [`CurveParams::decode_point`] to build points from untrusted coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The identity element of the group.
    Infinity,
    /// An affine point `(x, y)` with both coordinates reduced modulo P.
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    #[inline]
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl CurveParams {
    /// Creates an affine point, checking that it lies on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point, CurveError> {
        let field = self.base_field();
        if !field.contains(&x) || !field.contains(&y) {
            return Err(CurveError::NotOnCurve);
        }

        let point = Point::Affine { x, y };
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };
        let field = self.base_field();

        let y2 = field.square(y);
        let x3 = field.mul(&field.square(x), x);
        let ax = field.mul(self.a(), x);
        let rhs = field.add(&field.add(&x3, &ax), self.b());

        y2 == rhs
    }

    /// Point doubling: 2*P.
    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        let Some((x, y)) = point.coordinates() else {
            return Ok(Point::Infinity);
        };

        // Vertical tangent: 2P = O
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let field = self.base_field();

        // λ = (3x^2 + a) / (2y)
        let x2 = field.square(x);
        let numerator = field.add(&field.mul(&BigUint::from(3u32), &x2), self.a());
        let denominator = field.add(y, y);
        let lambda = field.div(&numerator, &denominator)?;

        // x_r = λ^2 - 2x
        let x_r = field.sub(&field.sub(&field.square(&lambda), x), x);

        // y_r = λ(x - x_r) - y
        let y_r = field.sub(&field.mul(&lambda, &field.sub(x, &x_r)), y);

        Ok(Point::Affine { x: x_r, y: y_r })
    }

    /// Point addition: A + B.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let (x1, y1) = match lhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(rhs.clone()),
        };
        let (x2, y2) = match rhs.coordinates() {
            Some(coords) => coords,
            None => return Ok(lhs.clone()),
        };

        let field = self.base_field();

        if x1 == x2 {
            if y1 == y2 {
                return self.double(lhs);
            }
            // Same x and distinct y means y2 = -y1: the points are inverses.
            return Ok(Point::Infinity);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = field.div(&field.sub(y2, y1), &field.sub(x2, x1))?;

        // x_r = λ^2 - x1 - x2
        let x_r = field.sub(&field.sub(&field.square(&lambda), x1), x2);

        // y_r = λ(x1 - x_r) - y1
        let y_r = field.sub(&field.mul(&lambda, &field.sub(x1, &x_r)), y1);

        Ok(Point::Affine { x: x_r, y: y_r })
    }

    /// Negate a point.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.base_field().neg(y),
            },
        }
    }

    /// Point subtraction: A - B.
    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        self.add(lhs, &self.negate(rhs))
    }
}
