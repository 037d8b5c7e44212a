use crate::groups::ristretto255::scalar::RistrettoScalar;
use crate::traits::element::GroupElement;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::traits::Identity;
use hybrid_array::{typenum::U32, Array as HybridArray};
use std::hash::{Hash, Hasher};

/// An element of the Ristretto255 group, wrapping a `curve25519-dalek` point.
#[derive(Clone, Debug)]
pub struct RistrettoElement(pub(crate) RistrettoPoint);

impl RistrettoElement {
    pub fn new(point: RistrettoPoint) -> Self {
        RistrettoElement(point)
    }

    pub fn inner(&self) -> RistrettoPoint {
        self.0
    }
}

impl PartialEq for RistrettoElement {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for RistrettoElement {}

// RistrettoPoint has no native Hash impl; hash the canonical compressed encoding,
// which is exactly how PowerCache needs to use this type as a map key (spec §9).
impl Hash for RistrettoElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.compress().as_bytes().hash(state);
    }
}

impl GroupElement for RistrettoElement {
    type Scalar = RistrettoScalar;
    type Bytes = HybridArray<u8, U32>;

    const SERIALIZED_SIZE: usize = 32;

    fn identity() -> Self {
        RistrettoElement(RistrettoPoint::identity())
    }

    fn add(&self, other: &Self) -> Self {
        RistrettoElement(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        RistrettoElement(self.0 - other.0)
    }

    fn neg(&self) -> Self {
        RistrettoElement(-self.0)
    }

    fn mul(&self, scalar: &Self::Scalar) -> Self {
        RistrettoElement(self.0 * scalar.0)
    }

    fn to_bytes(&self) -> Self::Bytes {
        HybridArray::from(self.0.compress().to_bytes())
    }

    fn from_bytes(bytes: &Self::Bytes) -> Option<Self> {
        let raw: [u8; 32] = (*bytes).into();
        CompressedRistretto(raw).decompress().map(RistrettoElement)
    }
}

impl Default for RistrettoElement {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::scalar::GroupScalar;
    use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;

    #[test]
    fn test_element_round_trip() {
        let g = RistrettoElement::new(RISTRETTO_BASEPOINT_POINT);
        let bytes = g.to_bytes();
        let parsed = RistrettoElement::from_bytes(&bytes).unwrap();
        assert_eq!(g, parsed);
    }

    #[test]
    fn test_identity_is_additive_identity() {
        let g = RistrettoElement::new(RISTRETTO_BASEPOINT_POINT);
        let id = RistrettoElement::identity();
        assert_eq!(g.add(&id), g);
        assert!(id.is_identity());
    }

    #[test]
    fn test_scalar_mul_zero_is_identity() {
        let g = RistrettoElement::new(RISTRETTO_BASEPOINT_POINT);
        let zero = RistrettoScalar::zero();
        assert!(g.mul(&zero).is_identity());
    }
}
