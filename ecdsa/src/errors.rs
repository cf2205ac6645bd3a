//! Error types for the ECDSA signature scheme.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur while building keys or signing.
///
/// Verification never returns an error: a malformed or forged signature is
/// simply reported as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcdsaError {
    /// Underlying curve arithmetic failed.
    ///
    /// [`CurveError::InvalidScalar`] here means a private key or nonce outside
    /// `[1, N)`. [`CurveError::NonInvertible`] means the curve parameters are
    /// broken and should be treated as fatal.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The nonce produced `r = 0` or `s = 0`.
    ///
    /// Recoverable: sign again with a fresh nonce.
    #[error("degenerate signature (r or s is zero); retry with a fresh nonce")]
    DegenerateSignature,

    /// The nonce guard has already seen this nonce.
    ///
    /// Signing twice with the same nonce and key reveals the private key.
    #[error("nonce has already been used")]
    NonceReuse,

    /// Serialized signature bytes have the wrong length.
    #[error("invalid signature encoding")]
    InvalidSignatureEncoding,
}
