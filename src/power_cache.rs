//! Lookup table of `f^i -> i` over a declared range, for O(1) decryption.

use crate::error::Error;
use crate::traits::element::GroupElement;
use std::collections::HashMap;

/// Precomputed map from `i * f` to `i`, for `i` in `[range_min, range_max]`.
#[derive(Clone, Debug, Default)]
pub struct PowerCache<E: GroupElement> {
    cache: HashMap<E, i64>,
}

impl<E: GroupElement> PowerCache<E> {
    pub fn new() -> Self {
        PowerCache {
            cache: HashMap::new(),
        }
    }

    /// Fills the cache with `f^i` for `i` in `[range_min, range_max]`.
    pub fn init(&mut self, f: &E, range_min: i64, range_max: i64) -> Result<(), Error> {
        if range_min > range_max {
            return Err(Error::BadRange {
                range_min,
                range_max,
            });
        }
        self.cache.clear();

        let mut x = E::identity();
        self.cache.insert(x.clone(), 0);
        for i in 1..=range_max {
            x = x.add(f);
            self.cache.insert(x.clone(), i);
        }

        let neg_f = f.neg();
        let mut x = E::identity();
        for i in (range_min..=-1).rev() {
            x = x.add(&neg_f);
            self.cache.insert(x.clone(), i);
        }
        Ok(())
    }

    /// Returns `m` such that `f^m == g`, looking the value up in the cache.
    pub fn get_exponent(&self, g: &E) -> Result<i64, Error> {
        self.cache.get(g).copied().ok_or(Error::NotFound)
    }

    /// Like [`Self::get_exponent`], but reports success via a bool instead of an error.
    pub fn try_get_exponent(&self, g: &E) -> Option<i64> {
        self.cache.get(g).copied()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::ristretto255::{Ristretto255Group, RistrettoScalar};
    use crate::traits::group::CryptoGroup;

    #[test]
    fn test_init_rejects_inverted_range() {
        let f = Ristretto255Group::generator();
        let mut cache: PowerCache<_> = PowerCache::new();
        assert_eq!(
            cache.init(&f, 5, -5),
            Err(Error::BadRange {
                range_min: 5,
                range_max: -5
            })
        );
    }

    #[test]
    fn test_lookup_covers_full_range() {
        let f = Ristretto255Group::generator();
        let mut cache: PowerCache<_> = PowerCache::new();
        cache.init(&f, -20, 20).unwrap();
        for m in -20..=20 {
            let power = f.mul(&RistrettoScalar::from_i64(m));
            assert_eq!(cache.get_exponent(&power), Ok(m));
        }
    }

    #[test]
    fn test_lookup_outside_range_not_found() {
        let f = Ristretto255Group::generator();
        let mut cache: PowerCache<_> = PowerCache::new();
        cache.init(&f, -5, 5).unwrap();
        let power = f.mul(&RistrettoScalar::from_i64(100));
        assert_eq!(cache.get_exponent(&power), Err(Error::NotFound));
        assert_eq!(cache.try_get_exponent(&power), None);
    }

    #[test]
    fn test_clear_empties_cache() {
        let f = Ristretto255Group::generator();
        let mut cache: PowerCache<_> = PowerCache::new();
        assert!(cache.is_empty());
        cache.init(&f, -2, 2).unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
