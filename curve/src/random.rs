use rand::Rng;

use crate::field::{FieldElement, PrimeField};

impl PrimeField {
    /// Samples a uniform element of `[1, modulus)` by rejection.
    ///
    /// Candidates are masked to the bit length of the modulus, so each draw
    /// is accepted with probability above one half.
    pub fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        let len = self.byte_len();
        let excess_bits = len * 8 - self.modulus().bits() as usize;
        let mut bytes = vec![0u8; len];

        loop {
            rng.fill(bytes.as_mut_slice());
            if let Some(first) = bytes.first_mut() {
                *first &= 0xFF >> excess_bits;
            }
            let candidate = FieldElement::from_bytes_be(&bytes);
            if self.contains_nonzero(&candidate) {
                return candidate;
            }
        }
    }
}
