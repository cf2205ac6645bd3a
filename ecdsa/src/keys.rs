//! Signing and verifying keys for ECDSA.

use curve::{BigUint, CurveError, CurveParams, Point, encode_fixed_width};
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, error, trace, warn};

use crate::errors::EcdsaError;
use crate::nonce::NonceGuard;
use crate::signatures::{Signature, hash_message};

/// A secret signing key: a scalar `d` in `[1, N)`.
///
/// # Example
///
/// ```
/// use curve::{BigUint, CurveParams};
/// use ecdsa::SigningKey;
///
/// let curve = CurveParams::secp256k1();
/// let signing_key = SigningKey::new(&curve, BigUint::from(42u32)).expect("valid key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key: the point `Q = d * G`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Point,
}

/// A signing key and the verifying key derived from it.
///
/// The verifying key is computed once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Wraps a private scalar, rejecting values outside `[1, N)`.
    pub fn new(curve: &CurveParams, scalar: BigUint) -> Result<Self, EcdsaError> {
        if !curve.scalar_field().contains_nonzero(&scalar) {
            return Err(CurveError::InvalidScalar.into());
        }
        Ok(Self { scalar })
    }

    /// Generates a random signing key using the provided random number
    /// generator.
    pub fn random<R: Rng + ?Sized>(curve: &CurveParams, rng: &mut R) -> Self {
        Self {
            scalar: curve.scalar_field().random_nonzero(rng),
        }
    }

    /// Parses a big-endian scalar exactly as wide as N.
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != curve.scalar_field().byte_len() {
            return Err(CurveError::InvalidEncoding.into());
        }
        Self::new(curve, BigUint::from_bytes_be(bytes))
    }

    /// Big-endian scalar, left-padded to the width of N.
    pub fn to_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>, EcdsaError> {
        Ok(encode_fixed_width(&self.scalar, curve.scalar_field().byte_len())?)
    }

    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the public verifying key `d * G`.
    pub fn verifying_key(&self, curve: &CurveParams) -> Result<VerifyingKey, EcdsaError> {
        Ok(VerifyingKey {
            point: curve.mul_generator(&self.scalar)?,
        })
    }

    /// Signs `msg` hashed with SHA-256, using the caller's `nonce`.
    ///
    /// The nonce must lie in `[1, N)` and must never be used again with this
    /// key: two signatures sharing a nonce reveal the private key. A
    /// [`EcdsaError::DegenerateSignature`] means the nonce has to be replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::{BigUint, CurveParams};
    /// use ecdsa::SigningKey;
    ///
    /// let curve = CurveParams::secp256k1();
    /// let signing_key = SigningKey::new(&curve, BigUint::from(42u32)).expect("valid key");
    /// let nonce = BigUint::from(1234567u32);
    ///
    /// let signature = signing_key.sign(&curve, b"hello", &nonce).expect("signing failed");
    /// let verifying_key = signing_key.verifying_key(&curve).expect("public key");
    /// assert!(verifying_key.verify(&curve, b"hello", &signature));
    /// ```
    pub fn sign(
        &self,
        curve: &CurveParams,
        msg: &[u8],
        nonce: &BigUint,
    ) -> Result<Signature, EcdsaError> {
        self.sign_digest::<Sha256>(curve, msg, nonce)
    }

    /// Like [`sign`](Self::sign) with a caller-chosen hash function.
    pub fn sign_digest<D: Digest>(
        &self,
        curve: &CurveParams,
        msg: &[u8],
        nonce: &BigUint,
    ) -> Result<Signature, EcdsaError> {
        self.sign_prehash(curve, &hash_message::<D>(curve, msg), nonce)
    }

    /// Signs an already hashed message given as an integer.
    ///
    /// 1. `R = k * G`
    /// 2. `r = R.x mod N`, rejected if zero
    /// 3. `s = (hash + r * d) / k mod N`, rejected if zero
    pub fn sign_prehash(
        &self,
        curve: &CurveParams,
        hash: &BigUint,
        nonce: &BigUint,
    ) -> Result<Signature, EcdsaError> {
        let scalars = curve.scalar_field();
        // Deserialized keys bypass the check in `new`.
        if !scalars.contains_nonzero(&self.scalar) {
            return Err(CurveError::InvalidScalar.into());
        }
        let k_times_g = curve.mul_generator(nonce)?;

        // k in [1, N) never lands on infinity when N is the order of G.
        let x = k_times_g.x().ok_or(EcdsaError::DegenerateSignature)?;
        let r = scalars.reduce(x);
        if r.is_zero() {
            debug!("nonce produced r = 0");
            return Err(EcdsaError::DegenerateSignature);
        }

        let k_inv = scalars.inverse(nonce)?;
        let z = scalars.reduce(hash);
        let s = scalars.mul(&scalars.add(&z, &scalars.mul(&r, &self.scalar)), &k_inv);
        if s.is_zero() {
            debug!("nonce produced s = 0");
            return Err(EcdsaError::DegenerateSignature);
        }

        Ok(Signature { r, s })
    }

    /// Signs with nonces drawn from `rng`, drawing again whenever the
    /// signature comes out degenerate.
    pub fn sign_with_rng<R: Rng + ?Sized>(
        &self,
        curve: &CurveParams,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature, EcdsaError> {
        let hash = hash_message::<Sha256>(curve, msg);
        loop {
            let nonce = curve.scalar_field().random_nonzero(rng);
            match self.sign_prehash(curve, &hash, &nonce) {
                Err(EcdsaError::DegenerateSignature) => {
                    debug!("degenerate signature, resampling nonce");
                }
                other => return other,
            }
        }
    }

    /// Like [`sign`](Self::sign), but first records the nonce in `guard` and
    /// refuses to sign with a nonce the guard has already seen.
    pub fn sign_guarded<G: NonceGuard + ?Sized>(
        &self,
        curve: &CurveParams,
        msg: &[u8],
        nonce: &BigUint,
        guard: &mut G,
    ) -> Result<Signature, EcdsaError> {
        if !guard.register(nonce) {
            warn!("refusing to sign: nonce reuse detected");
            return Err(EcdsaError::NonceReuse);
        }
        self.sign(curve, msg, nonce)
    }
}

impl VerifyingKey {
    /// Wraps a public point after checking it is an affine point on the
    /// curve.
    pub fn from_point(curve: &CurveParams, point: Point) -> Result<Self, EcdsaError> {
        if point.is_infinity() {
            return Err(CurveError::PointAtInfinity.into());
        }
        if !curve.is_on_curve(&point) {
            return Err(CurveError::NotOnCurve.into());
        }
        Ok(Self { point })
    }

    /// Parses an uncompressed SEC1 public key.
    pub fn from_sec1_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self, EcdsaError> {
        Self::from_point(curve, curve.decode_point(bytes)?)
    }

    /// Uncompressed SEC1 encoding.
    pub fn to_sec1_bytes(&self, curve: &CurveParams) -> Result<Vec<u8>, EcdsaError> {
        Ok(curve.encode_point(&self.point)?)
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Verifies a signature on `msg` hashed with SHA-256.
    ///
    /// Returns `false` for any signature that does not verify, including
    /// components outside `[1, N)`.
    pub fn verify(&self, curve: &CurveParams, msg: &[u8], sig: &Signature) -> bool {
        self.verify_digest::<Sha256>(curve, msg, sig)
    }

    /// Like [`verify`](Self::verify) with a caller-chosen hash function.
    pub fn verify_digest<D: Digest>(
        &self,
        curve: &CurveParams,
        msg: &[u8],
        sig: &Signature,
    ) -> bool {
        self.verify_prehash(curve, &hash_message::<D>(curve, msg), sig)
    }

    /// Verifies a signature against an already hashed message.
    ///
    /// With `w = s^-1 mod N`, the signature is valid iff
    /// `X = (hash * w) * G + (r * w) * Q` is not infinity and
    /// `X.x mod N == r`.
    pub fn verify_prehash(&self, curve: &CurveParams, hash: &BigUint, sig: &Signature) -> bool {
        if !sig.is_well_formed(curve) {
            trace!("signature component outside [1, N)");
            return false;
        }
        if self.point.is_infinity() {
            trace!("verifying key is the point at infinity");
            return false;
        }

        let x = match self.verification_point(curve, hash, sig) {
            Ok(Point::Affine { x, .. }) => x,
            Ok(Point::Infinity) => {
                trace!("verification point is infinity");
                return false;
            }
            Err(err) => {
                error!(%err, "arithmetic failure during verification");
                return false;
            }
        };

        let valid = curve.scalar_field().reduce(&x) == sig.r;
        if !valid {
            trace!("x-coordinate does not match r");
        }
        valid
    }

    fn verification_point(
        &self,
        curve: &CurveParams,
        hash: &BigUint,
        sig: &Signature,
    ) -> Result<Point, CurveError> {
        let scalars = curve.scalar_field();
        let w = scalars.inverse(&sig.s)?;
        let u1 = scalars.mul(&scalars.reduce(hash), &w);
        let u2 = scalars.mul(&sig.r, &w);
        curve.double_scalar_mul_basepoint(&u1, &u2, &self.point)
    }
}

impl KeyPair {
    /// Builds a key pair from a private scalar.
    pub fn new(curve: &CurveParams, scalar: BigUint) -> Result<Self, EcdsaError> {
        Self::from_signing_key(curve, SigningKey::new(curve, scalar)?)
    }

    pub fn from_signing_key(
        curve: &CurveParams,
        signing_key: SigningKey,
    ) -> Result<Self, EcdsaError> {
        let verifying_key = signing_key.verifying_key(curve)?;
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Generates a random key pair.
    pub fn random<R: Rng + ?Sized>(curve: &CurveParams, rng: &mut R) -> Result<Self, EcdsaError> {
        Self::from_signing_key(curve, SigningKey::random(curve, rng))
    }

    #[inline]
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    #[inline]
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}
