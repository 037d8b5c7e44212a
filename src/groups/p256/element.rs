use crate::groups::p256::scalar::P256Scalar;
use crate::traits::element::GroupElement;
use hybrid_array::{typenum::U33, Array as HybridArray};
use p256::elliptic_curve::group::GroupEncoding;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::Group;
use p256::ProjectivePoint;
use std::hash::{Hash, Hasher};

/// An element of the NIST P-256 group, wrapping a `p256` projective point.
#[derive(Clone, Debug)]
pub struct P256Element(pub(crate) ProjectivePoint);

impl P256Element {
    pub fn new(point: ProjectivePoint) -> Self {
        P256Element(point)
    }

    pub fn inner(&self) -> ProjectivePoint {
        self.0
    }
}

impl PartialEq for P256Element {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for P256Element {}

impl Hash for P256Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bytes().as_slice().hash(state);
    }
}

impl GroupElement for P256Element {
    type Scalar = P256Scalar;
    type Bytes = HybridArray<u8, U33>;

    const SERIALIZED_SIZE: usize = 33;

    fn identity() -> Self {
        P256Element(ProjectivePoint::IDENTITY)
    }

    fn add(&self, other: &Self) -> Self {
        P256Element(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        P256Element(self.0 - other.0)
    }

    fn neg(&self) -> Self {
        P256Element(-self.0)
    }

    fn mul(&self, scalar: &Self::Scalar) -> Self {
        P256Element(self.0 * scalar.0)
    }

    // SEC1's compressed point-at-infinity encoding is a single zero byte, which would
    // not fit a fixed 33-byte buffer; this crate instead reserves all-zero as the
    // identity's canonical encoding and uses standard SEC1 compressed encoding (a
    // 0x02/0x03 prefix byte, which a real curve point never starts with as all-zero)
    // for every other element.
    fn to_bytes(&self) -> Self::Bytes {
        if self.is_identity() {
            return HybridArray::<u8, U33>::default();
        }
        let affine = self.0.to_affine();
        let encoded = affine.to_encoded_point(true);
        let mut out = HybridArray::<u8, U33>::default();
        out.as_mut_slice().copy_from_slice(encoded.as_bytes());
        out
    }

    fn from_bytes(bytes: &Self::Bytes) -> Option<Self> {
        if bytes.as_slice().iter().all(|b| *b == 0) {
            return Some(Self::identity());
        }
        let encoded = p256::EncodedPoint::from_bytes(bytes.as_slice()).ok()?;
        let point = p256::AffinePoint::from_encoded_point(&encoded);
        Option::from(point).map(|p: p256::AffinePoint| P256Element(ProjectivePoint::from(p)))
    }
}

impl Default for P256Element {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::scalar::GroupScalar;

    #[test]
    fn test_element_round_trip() {
        let g = P256Element::new(ProjectivePoint::GENERATOR);
        let bytes = g.to_bytes();
        let parsed = P256Element::from_bytes(&bytes).unwrap();
        assert_eq!(g, parsed);
    }

    #[test]
    fn test_identity_round_trip() {
        let id = P256Element::identity();
        let bytes = id.to_bytes();
        let parsed = P256Element::from_bytes(&bytes).unwrap();
        assert_eq!(id, parsed);
        assert!(parsed.is_identity());
    }

    #[test]
    fn test_scalar_mul_one_is_identity_on_mul() {
        let g = P256Element::new(ProjectivePoint::GENERATOR);
        let one = P256Scalar::one();
        assert_eq!(g.mul(&one), g);
    }
}
