use crate::traits::element::GroupElement;
use crate::traits::scalar::GroupScalar;
use core::fmt::Debug;

/// Ties a [`GroupElement`]/[`GroupScalar`] pair to a distinguished generator and a
/// Fiat-Shamir hash function. This is the single boundary the rest of the crate is
/// generic over; instantiate it against a concrete curve to get a concrete scheme.
pub trait CryptoGroup: Clone + Debug {
    type Scalar: GroupScalar;
    type Element: GroupElement<Scalar = Self::Scalar>;

    fn generator() -> Self::Element;

    /// A scalar derived deterministically and uniformly from the concatenation of
    /// `input_slices`, used for Fiat-Shamir challenges. Must be fixed and identical
    /// between prover and verifier.
    fn hash_to_scalar(input_slices: &[&[u8]]) -> Self::Scalar;
}
