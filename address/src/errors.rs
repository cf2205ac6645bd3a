use curve::CurveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("invalid base58 character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("decoded payload does not fit in {width} bytes")]
    PayloadTooLong { width: usize },

    #[error("address is not in canonical base58 form")]
    NonCanonical,

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}
