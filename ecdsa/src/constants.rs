//! Serialized sizes on secp256k1.

/// Size of a serialized public verifying key in bytes.
///
/// An uncompressed SEC1 point: the `0x04` tag followed by two 32-byte
/// coordinates.
pub const PK_SIZE: usize = 65;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - the scalar r (32 bytes)
/// - the scalar s (32 bytes)
pub const SIG_SIZE: usize = 64;
