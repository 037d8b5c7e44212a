//! Disjunctive (OR) Schnorr proof that a ciphertext encodes `0` or `1`, without
//! revealing which.
//!
//! <http://dx.doi.org/10.1587/transfun.E96.A.1156>

use crate::ciphertext::CipherText;
use crate::key::PublicKey;
use crate::traits::element::GroupElement;
use crate::traits::group::CryptoGroup;
use crate::traits::scalar::GroupScalar;
use rand::{CryptoRng, RngCore};

/// A non-interactive disjunctive Schnorr proof accompanying a bit ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zkp<G: CryptoGroup> {
    pub c0: G::Scalar,
    pub c1: G::Scalar,
    pub s0: G::Scalar,
    pub s1: G::Scalar,
}

fn fiat_shamir<G: CryptoGroup>(
    pk: &PublicKey<G>,
    c: &CipherText<G>,
    r01: &G::Element,
    r02: &G::Element,
    r11: &G::Element,
    r12: &G::Element,
) -> G::Scalar {
    let r01b = r01.to_bytes();
    let r02b = r02.to_bytes();
    let r11b = r11.to_bytes();
    let r12b = r12.to_bytes();
    let c1b = c.c1.to_bytes();
    let c2b = c.c2.to_bytes();
    let fb = pk.f().to_bytes();
    let gb = pk.g().to_bytes();
    let hb = pk.h().to_bytes();
    G::hash_to_scalar(&[
        r01b.as_ref(),
        r02b.as_ref(),
        r11b.as_ref(),
        r12b.as_ref(),
        c1b.as_ref(),
        c2b.as_ref(),
        fb.as_ref(),
        gb.as_ref(),
        hb.as_ref(),
    ])
}

/// Produces a proof that `c = PublicKey::enc_with_zkp`'s ciphertext encodes `bit`,
/// given the encryption randomness `u` used to build `c`.
///
/// Callers must ensure `c` was actually built with `bit` and `u`; this function does
/// not re-derive or check that relationship.
pub(crate) fn prove<G: CryptoGroup, R: RngCore + CryptoRng>(
    pk: &PublicKey<G>,
    c: &CipherText<G>,
    bit: bool,
    u: &G::Scalar,
    rng: &mut R,
) -> Zkp<G> {
    if bit {
        let r1 = G::Scalar::random(rng);
        let c0 = G::Scalar::random(rng);
        let s0 = G::Scalar::random(rng);

        let r01 = pk.mul_g_inner(&s0).sub(&c.c1.mul(&c0));
        let r02 = pk.mul_h_inner(&s0).sub(&c.c2.mul(&c0));
        let r11 = pk.mul_g_inner(&r1);
        let r12 = pk.mul_h_inner(&r1);

        let cc = fiat_shamir(pk, c, &r01, &r02, &r11, &r12);
        let c1 = cc.sub(&c0);
        let s1 = r1.add(&c1.mul(u));
        Zkp { c0, c1, s0, s1 }
    } else {
        let r0 = G::Scalar::random(rng);
        let c1 = G::Scalar::random(rng);
        let s1 = G::Scalar::random(rng);

        let r01 = pk.mul_g_inner(&r0);
        let r02 = pk.mul_h_inner(&r0);
        let r11 = pk.mul_g_inner(&s1).sub(&c.c1.mul(&c1));
        let c2_minus_f = c.c2.sub(pk.f());
        let r12 = pk.mul_h_inner(&s1).sub(&c2_minus_f.mul(&c1));

        let cc = fiat_shamir(pk, c, &r01, &r02, &r11, &r12);
        let c0 = cc.sub(&c1);
        let s0 = r0.add(&c0.mul(u));
        Zkp { c0, c1, s0, s1 }
    }
}

/// Checks a disjunctive Schnorr proof that `c` encodes `0` or `1`.
pub(crate) fn verify<G: CryptoGroup>(pk: &PublicKey<G>, c: &CipherText<G>, zkp: &Zkp<G>) -> bool {
    let r01 = pk.mul_g_inner(&zkp.s0).sub(&c.c1.mul(&zkp.c0));
    let r02 = pk.mul_h_inner(&zkp.s0).sub(&c.c2.mul(&zkp.c0));
    let r11 = pk.mul_g_inner(&zkp.s1).sub(&c.c1.mul(&zkp.c1));
    let c2_minus_f = c.c2.sub(pk.f());
    let r12 = pk.mul_h_inner(&zkp.s1).sub(&c2_minus_f.mul(&zkp.c1));

    let cc = fiat_shamir(pk, c, &r01, &r02, &r11, &r12);
    cc == zkp.c0.add(&zkp.c1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::ristretto255::Ristretto255Group;
    use crate::key::PrivateKey;
    use rand::rngs::OsRng;

    fn sample_key() -> PrivateKey<Ristretto255Group> {
        let f = Ristretto255Group::generator();
        PrivateKey::generate(f, 8, &mut OsRng)
    }

    #[test]
    fn test_proof_accepts_bit_zero() {
        let sk = sample_key();
        let pk = sk.public_key();
        let (c, zkp) = pk.enc_with_zkp(0, &mut OsRng).unwrap();
        assert!(pk.verify(&c, &zkp));
    }

    #[test]
    fn test_proof_accepts_bit_one() {
        let sk = sample_key();
        let pk = sk.public_key();
        let (c, zkp) = pk.enc_with_zkp(1, &mut OsRng).unwrap();
        assert!(pk.verify(&c, &zkp));
    }

    #[test]
    fn test_proof_rejects_non_bit_plaintext() {
        let sk = sample_key();
        let pk = sk.public_key();
        assert_eq!(
            pk.enc_with_zkp(2, &mut OsRng).unwrap_err(),
            crate::error::Error::InvalidBit(2)
        );
    }

    #[test]
    fn test_proof_rejects_tampered_ciphertext() {
        let sk = sample_key();
        let pk = sk.public_key();
        let (mut c, zkp) = pk.enc_with_zkp(1, &mut OsRng).unwrap();
        // Tamper with the ciphertext so it no longer matches the proof transcript.
        let g = Ristretto255Group::generator();
        c.c1 = c.c1.add(&g);
        assert!(!pk.verify(&c, &zkp));
    }

    #[test]
    fn test_proof_rejects_swapped_components() {
        let sk = sample_key();
        let pk = sk.public_key();
        let (c0, zkp0) = pk.enc_with_zkp(0, &mut OsRng).unwrap();
        let (_c1, zkp1) = pk.enc_with_zkp(1, &mut OsRng).unwrap();
        assert!(!pk.verify(&c0, &zkp1));
        assert!(pk.verify(&c0, &zkp0));
    }
}
