//! Error types for field and group arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by field arithmetic, point algebra and point encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The value shares a non-trivial factor with the modulus, so it has no
    /// inverse.
    ///
    /// With a prime modulus this only happens for a value congruent to zero,
    /// which means the caller handed in inconsistent parameters. It is never
    /// worth retrying.
    #[error("value is not invertible: it shares the factor {gcd} with the modulus")]
    NonInvertible {
        /// The common factor found by the Euclidean algorithm.
        gcd: BigUint,
    },

    /// A scalar fell outside `[1, N)`.
    #[error("scalar must lie in [1, N)")]
    InvalidScalar,

    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The point at infinity was given where an affine point is required.
    #[error("the point at infinity has no affine encoding")]
    PointAtInfinity,

    /// Serialized point bytes have the wrong length or tag.
    #[error("invalid point encoding")]
    InvalidEncoding,

    /// The curve domain parameters are inconsistent.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),
}
