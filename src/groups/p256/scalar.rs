use crate::traits::scalar::GroupScalar;
use hybrid_array::{typenum::U32, Array as HybridArray};
use p256::elliptic_curve::{Field, PrimeField};
use p256::Scalar as P256ScalarInternal;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

fn field_bytes_to_array(repr: p256::FieldBytes) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(repr.as_slice());
    out
}

/// A scalar mod the NIST P-256 group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct P256Scalar(pub(crate) P256ScalarInternal);

impl P256Scalar {
    pub fn new(scalar: P256ScalarInternal) -> Self {
        P256Scalar(scalar)
    }

    pub fn inner(&self) -> P256ScalarInternal {
        self.0
    }
}

// p256's Field::random needs a rand_core 0.6-compatible RngCore; rand 0.8's RngCore
// is that version, so any R: RngCore + CryptoRng from `rand` satisfies it directly.
impl GroupScalar for P256Scalar {
    type Bytes = HybridArray<u8, U32>;

    const BIT_SIZE: usize = 256;
    const SERIALIZED_SIZE: usize = 32;

    fn zero() -> Self {
        P256Scalar(P256ScalarInternal::ZERO)
    }

    fn one() -> Self {
        P256Scalar(P256ScalarInternal::ONE)
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        P256Scalar(P256ScalarInternal::random(rng))
    }

    fn from_i64(v: i64) -> Self {
        if v >= 0 {
            P256Scalar(P256ScalarInternal::from(v as u64))
        } else {
            P256Scalar(-P256ScalarInternal::from((-v) as u64))
        }
    }

    fn add(&self, other: &Self) -> Self {
        P256Scalar(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        P256Scalar(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        P256Scalar(self.0 * other.0)
    }

    fn neg(&self) -> Self {
        P256Scalar(-self.0)
    }

    fn to_bytes(&self) -> Self::Bytes {
        HybridArray::from(field_bytes_to_array(self.0.to_repr()))
    }

    fn from_bytes(bytes: &Self::Bytes) -> Option<Self> {
        let raw: [u8; 32] = (*bytes).into();
        Option::from(P256ScalarInternal::from_repr(raw.into())).map(P256Scalar)
    }

    fn to_le_bits(&self) -> Vec<bool> {
        // P256's canonical encoding is big-endian; reverse bit order within and
        // across bytes to produce a little-endian bit vector like Ristretto's.
        let be_bytes = field_bytes_to_array(self.0.to_repr());
        let mut bits = Vec::with_capacity(256);
        for byte in be_bytes.iter().rev() {
            for i in 0..8 {
                bits.push((byte >> i) & 1 == 1);
            }
        }
        bits
    }
}

// `p256::Scalar` doesn't implement `zeroize::Zeroize` directly; overwrite with the
// additive identity instead, matching frost-core's best-effort key scrubbing on drop.
impl Zeroize for P256Scalar {
    fn zeroize(&mut self) {
        self.0 = P256ScalarInternal::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_scalar_round_trip() {
        let s = P256Scalar::random(&mut OsRng);
        let bytes = s.to_bytes();
        let parsed = P256Scalar::from_bytes(&bytes).unwrap();
        assert_eq!(s, parsed);
    }

    #[test]
    fn test_from_i64_arithmetic() {
        let a = P256Scalar::from_i64(1000);
        let b = P256Scalar::from_i64(-1);
        assert_eq!(a.add(&b), P256Scalar::from_i64(999));
    }
}
