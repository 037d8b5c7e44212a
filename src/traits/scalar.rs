use core::fmt::Debug;
use rand::{CryptoRng, RngCore};

/// A scalar in `Zn`, the ring of exponents for some [`crate::traits::group::CryptoGroup`].
///
/// Implementations must be constant in representation size: `to_bytes`/`from_bytes`
/// always round-trip through the same `Bytes` type regardless of the scalar's value.
pub trait GroupScalar: Clone + Debug + PartialEq + Eq + Sized {
    /// Canonical fixed-width byte encoding for this scalar field.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Clone;

    /// Bit length of the scalar field's order, used to size fixed-base window tables.
    const BIT_SIZE: usize;

    /// Width in bytes of [`Self::Bytes`].
    const SERIALIZED_SIZE: usize;

    fn zero() -> Self;
    fn one() -> Self;

    /// Uniformly random scalar, sampled from a cryptographically secure source.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    /// Lifts a small signed integer into the scalar ring, reducing mod the field order.
    fn from_i64(v: i64) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn to_bytes(&self) -> Self::Bytes;
    fn from_bytes(bytes: &Self::Bytes) -> Option<Self>;

    /// Little-endian bit decomposition, least significant bit first, `Self::BIT_SIZE` long.
    ///
    /// Used by [`crate::window::FixedBaseTable`] to split a scalar into fixed-width digits;
    /// the chosen bit order must match across every caller in this crate.
    fn to_le_bits(&self) -> Vec<bool>;
}
