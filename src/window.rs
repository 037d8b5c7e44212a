//! Fixed-base windowed (comb) scalar multiplication.
//!
//! Mirrors `mcl::fp::WindowMethod`: a base point's fixed-window multiples are
//! precomputed once, after which `mul` replaces `O(bits)` point doublings with
//! `O(bits / window_bits)` additions.

use crate::traits::element::GroupElement;
use crate::traits::group::CryptoGroup;
use crate::traits::scalar::GroupScalar;

/// Precomputed fixed-base multiples of a group element, for fast repeated
/// multiplication by varying scalars.
#[derive(Clone, Debug)]
pub struct FixedBaseTable<G: CryptoGroup> {
    window_bits: usize,
    num_windows: usize,
    table: Vec<Vec<G::Element>>,
}

impl<G: CryptoGroup> FixedBaseTable<G> {
    /// `enableWindowMethod`'s default `winSize` in the original implementation.
    pub const DEFAULT_WINDOW_BITS: usize = 10;

    pub fn new(base: &G::Element) -> Self {
        Self::with_window_bits(base, Self::DEFAULT_WINDOW_BITS)
    }

    pub fn with_window_bits(base: &G::Element, window_bits: usize) -> Self {
        assert!(window_bits > 0, "window_bits must be positive");
        let bit_size = <G::Scalar as GroupScalar>::BIT_SIZE;
        let num_windows = (bit_size + window_bits - 1) / window_bits;
        let window_size = 1usize << window_bits;

        let mut table = Vec::with_capacity(num_windows);
        let mut window_base = base.clone();
        for _ in 0..num_windows {
            let mut row = Vec::with_capacity(window_size);
            row.push(G::Element::identity());
            let mut acc = G::Element::identity();
            for _ in 1..window_size {
                acc = acc.add(&window_base);
                row.push(acc.clone());
            }
            table.push(row);
            for _ in 0..window_bits {
                window_base = window_base.add(&window_base);
            }
        }

        FixedBaseTable {
            window_bits,
            num_windows,
            table,
        }
    }

    /// `base * scalar`, computed from the precomputed table.
    pub fn mul(&self, scalar: &G::Scalar) -> G::Element {
        let bits = scalar.to_le_bits();
        let mut result = G::Element::identity();
        for (w, row) in self.table.iter().enumerate() {
            let mut digit = 0usize;
            for b in 0..self.window_bits {
                let idx = w * self.window_bits + b;
                if idx < bits.len() && bits[idx] {
                    digit |= 1 << b;
                }
            }
            result = result.add(&row[digit]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::ristretto255::{Ristretto255Group, RistrettoScalar};
    use rand::rngs::OsRng;

    #[test]
    fn test_table_matches_naive_scalar_mul() {
        let base = Ristretto255Group::generator();
        let table = FixedBaseTable::<Ristretto255Group>::new(&base);
        for k in [0i64, 1, 2, 3, 17, 1023, 1024, -5] {
            let scalar = RistrettoScalar::from_i64(k);
            let expected = base.mul(&scalar);
            assert_eq!(table.mul(&scalar), expected, "mismatch for k = {k}");
        }
    }

    #[test]
    fn test_table_matches_naive_scalar_mul_random() {
        let base = Ristretto255Group::generator();
        let table = FixedBaseTable::<Ristretto255Group>::new(&base);
        for _ in 0..20 {
            let scalar = RistrettoScalar::random(&mut OsRng);
            assert_eq!(table.mul(&scalar), base.mul(&scalar));
        }
    }

    #[test]
    fn test_custom_window_bits_agrees_with_default() {
        let base = Ristretto255Group::generator();
        let default_table = FixedBaseTable::<Ristretto255Group>::new(&base);
        let small_table = FixedBaseTable::<Ristretto255Group>::with_window_bits(&base, 4);
        let scalar = RistrettoScalar::from_i64(12345);
        assert_eq!(default_table.mul(&scalar), small_table.mul(&scalar));
    }
}
