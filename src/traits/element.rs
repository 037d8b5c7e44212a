use crate::traits::scalar::GroupScalar;
use core::fmt::Debug;
use core::hash::Hash;

/// An element of a prime-order cyclic group `G`.
///
/// `Eq`/`Hash` are required so elements can key a [`crate::power_cache::PowerCache`]
/// lookup table (spec: `PowerCache` maps `i·f -> i`).
pub trait GroupElement: Clone + Debug + PartialEq + Eq + Hash + Sized {
    type Scalar: GroupScalar;

    /// Canonical fixed-width byte encoding for this group's elements.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Clone;

    const SERIALIZED_SIZE: usize;

    fn identity() -> Self;

    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, scalar: &Self::Scalar) -> Self;

    fn to_bytes(&self) -> Self::Bytes;
    fn from_bytes(bytes: &Self::Bytes) -> Option<Self>;
}
