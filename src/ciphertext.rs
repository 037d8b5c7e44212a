//! Lifted-ElGamal ciphertexts and their homomorphic algebra.

use crate::traits::element::GroupElement;
use crate::traits::group::CryptoGroup;
use crate::traits::scalar::GroupScalar;
use core::ops::{Add, Neg, Sub};

/// A lifted-ElGamal ciphertext `(c1, c2) = (g^u, h^u f^m)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherText<G: CryptoGroup> {
    pub c1: G::Element,
    pub c2: G::Element,
}

impl<G: CryptoGroup> CipherText<G> {
    pub fn new(c1: G::Element, c2: G::Element) -> Self {
        CipherText { c1, c2 }
    }

    /// `(0, 0)`, the trivial valid ciphertext for `m = 0` under any key.
    pub fn clear(&mut self) {
        self.c1 = G::Element::identity();
        self.c2 = G::Element::identity();
    }

    /// `Enc(m1), Enc(m2) -> Enc(m1 + m2)`, in place.
    pub fn add_assign(&mut self, other: &Self) {
        self.c1 = self.c1.add(&other.c1);
        self.c2 = self.c2.add(&other.c2);
    }

    /// `Enc(m1), Enc(m2) -> Enc(m1 - m2)`, in place.
    pub fn sub_assign(&mut self, other: &Self) {
        self.c1 = self.c1.sub(&other.c1);
        self.c2 = self.c2.sub(&other.c2);
    }

    /// `Enc(m), x -> Enc(m * x)`, in place.
    pub fn mul_assign(&mut self, x: &G::Scalar) {
        self.c1 = self.c1.mul(x);
        self.c2 = self.c2.mul(x);
    }

    /// `Enc(m), x -> Enc(m * x)` for a small signed multiplier, in place.
    pub fn mul_i64_assign(&mut self, x: i64) {
        self.mul_assign(&G::Scalar::from_i64(x));
    }

    /// `Enc(m) -> Enc(-m)`, in place.
    pub fn neg_assign(&mut self) {
        self.c1 = self.c1.neg();
        self.c2 = self.c2.neg();
    }
}

impl<G: CryptoGroup> Default for CipherText<G> {
    fn default() -> Self {
        CipherText {
            c1: G::Element::identity(),
            c2: G::Element::identity(),
        }
    }
}

impl<G: CryptoGroup> Add for CipherText<G> {
    type Output = CipherText<G>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out.add_assign(&rhs);
        out
    }
}

impl<G: CryptoGroup> Add for &CipherText<G> {
    type Output = CipherText<G>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_assign(rhs);
        out
    }
}

impl<G: CryptoGroup> Sub for CipherText<G> {
    type Output = CipherText<G>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out.sub_assign(&rhs);
        out
    }
}

impl<G: CryptoGroup> Sub for &CipherText<G> {
    type Output = CipherText<G>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.sub_assign(rhs);
        out
    }
}

impl<G: CryptoGroup> Neg for CipherText<G> {
    type Output = CipherText<G>;
    fn neg(self) -> Self::Output {
        let mut out = self;
        out.neg_assign();
        out
    }
}

impl<G: CryptoGroup> Neg for &CipherText<G> {
    type Output = CipherText<G>;
    fn neg(self) -> Self::Output {
        let mut out = self.clone();
        out.neg_assign();
        out
    }
}
