use crate::traits::scalar::GroupScalar;
use zeroize::Zeroize;
use curve25519_dalek::scalar::Scalar as DalekScalar;
use hybrid_array::{typenum::U32, Array as HybridArray};
use rand::{CryptoRng, RngCore};

/// A scalar mod the Ristretto255 group order (`2^252 + ...`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RistrettoScalar(pub(crate) DalekScalar);

impl RistrettoScalar {
    pub fn new(scalar: DalekScalar) -> Self {
        RistrettoScalar(scalar)
    }

    pub fn inner(&self) -> DalekScalar {
        self.0
    }
}

impl GroupScalar for RistrettoScalar {
    type Bytes = HybridArray<u8, U32>;

    // curve25519-dalek's scalar order is slightly below 2^253.
    const BIT_SIZE: usize = 253;
    const SERIALIZED_SIZE: usize = 32;

    fn zero() -> Self {
        RistrettoScalar(DalekScalar::ZERO)
    }

    fn one() -> Self {
        RistrettoScalar(DalekScalar::ONE)
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        RistrettoScalar(DalekScalar::random(rng))
    }

    fn from_i64(v: i64) -> Self {
        if v >= 0 {
            RistrettoScalar(DalekScalar::from(v as u64))
        } else {
            RistrettoScalar(-DalekScalar::from((-v) as u64))
        }
    }

    fn add(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 * other.0)
    }

    fn neg(&self) -> Self {
        RistrettoScalar(-self.0)
    }

    fn to_bytes(&self) -> Self::Bytes {
        HybridArray::from(self.0.to_bytes())
    }

    fn from_bytes(bytes: &Self::Bytes) -> Option<Self> {
        let raw: [u8; 32] = (*bytes).into();
        Option::from(DalekScalar::from_canonical_bytes(raw)).map(RistrettoScalar)
    }

    fn to_le_bits(&self) -> Vec<bool> {
        let bytes = self.0.to_bytes();
        let mut bits = Vec::with_capacity(Self::BIT_SIZE);
        for byte in bytes.iter() {
            for i in 0..8 {
                bits.push((byte >> i) & 1 == 1);
            }
        }
        bits.truncate(Self::BIT_SIZE);
        bits
    }
}

// `DalekScalar` doesn't implement `zeroize::Zeroize` directly; overwrite with the
// additive identity instead, matching frost-core's best-effort key scrubbing on drop.
impl Zeroize for RistrettoScalar {
    fn zeroize(&mut self) {
        self.0 = DalekScalar::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_scalar_round_trip() {
        let s = RistrettoScalar::random(&mut OsRng);
        let bytes = s.to_bytes();
        let parsed = RistrettoScalar::from_bytes(&bytes).unwrap();
        assert_eq!(s, parsed);
    }

    #[test]
    fn test_from_i64_roundtrips_through_arithmetic() {
        let a = RistrettoScalar::from_i64(12345);
        let b = RistrettoScalar::from_i64(-45);
        let sum = a.add(&b);
        assert_eq!(sum, RistrettoScalar::from_i64(12300));
    }

    #[test]
    fn test_le_bits_matches_from_i64() {
        let s = RistrettoScalar::from_i64(5); // 0b101
        let bits = s.to_le_bits();
        assert!(bits[0]);
        assert!(!bits[1]);
        assert!(bits[2]);
        assert!(bits[3..].iter().all(|b| !b));
    }
}
