pub mod element;
pub mod scalar;

pub use element::RistrettoElement;
pub use scalar::RistrettoScalar;

use crate::traits::group::CryptoGroup;
use crate::utils::hash;
use curve25519_dalek::constants as dalek_constants;
use sha3::Sha3_512;

/// Marker type selecting the Ristretto255 group as the instantiation of [`CryptoGroup`].
#[derive(Debug, Clone)]
pub struct Ristretto255Group;

impl CryptoGroup for Ristretto255Group {
    type Element = RistrettoElement;
    type Scalar = RistrettoScalar;

    fn generator() -> Self::Element {
        RistrettoElement::new(dalek_constants::RISTRETTO_BASEPOINT_POINT)
    }

    fn hash_to_scalar(input_slices: &[&[u8]]) -> Self::Scalar {
        let mut hasher = hash::new_default_hasher();
        hash::update_hasher_with_slices(&mut hasher, input_slices);
        RistrettoScalar::new(curve25519_dalek::scalar::Scalar::from_hash::<Sha3_512>(hasher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::element::GroupElement;

    #[test]
    fn test_hash_to_scalar_is_deterministic() {
        let a = Ristretto255Group::hash_to_scalar(&[b"abc", b"def"]);
        let b = Ristretto255Group::hash_to_scalar(&[b"abc", b"def"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_to_scalar_is_sensitive_to_content() {
        let a = Ristretto255Group::hash_to_scalar(&[b"abc", b"def"]);
        let b = Ristretto255Group::hash_to_scalar(&[b"abc", b"deg"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generator_is_not_identity() {
        assert!(!Ristretto255Group::generator().is_identity());
    }
}
