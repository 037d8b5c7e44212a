//! End-to-end scenarios exercising the public API as an external caller would.

use elgamal_lift::groups::ristretto255::{Ristretto255Group, RistrettoScalar};
use elgamal_lift::traits::group::CryptoGroup;
use elgamal_lift::traits::scalar::GroupScalar;
use elgamal_lift::{CipherText, IoMode, PrivateKey, PublicKey};
use rand::rngs::OsRng;

fn sample_key() -> PrivateKey<Ristretto255Group> {
    PrivateKey::generate(Ristretto255Group::generator(), 32, &mut OsRng)
}

fn enc(pk: &PublicKey<Ristretto255Group>, m: i64) -> CipherText<Ristretto255Group> {
    pk.enc(&RistrettoScalar::from_i64(m), &mut OsRng)
}

#[test]
fn e1_additive_homomorphism_chain() {
    let sk = sample_key();
    let pk = sk.public_key();

    let c1 = enc(pk, 12345);
    let c2 = enc(pk, 17655);
    assert_eq!(sk.dec_default(&c1).unwrap(), 12345);
    assert_eq!(sk.dec_default(&c2).unwrap(), 17655);

    let sum = &c1 + &c2;
    assert_eq!(sk.dec_default(&sum).unwrap(), 30000);

    let mut plus_plain = sum;
    pk.add(&mut plus_plain, &RistrettoScalar::from_i64(555));
    assert_eq!(sk.dec_default(&plus_plain).unwrap(), 30555);
}

#[test]
fn e2_negation() {
    let sk = sample_key();
    let pk = sk.public_key();
    let c = enc(pk, 1234);
    let neg = -c;
    assert_eq!(sk.dec_default(&neg).unwrap(), -1234);
}

#[test]
fn e3_scalar_multiplication() {
    let sk = sample_key();
    let pk = sk.public_key();
    let mut c = enc(pk, 123);
    c.mul_i64_assign(111);
    assert_eq!(sk.dec_default(&c).unwrap(), 13653);
}

#[test]
fn e4_small_range_round_trip() {
    let sk = sample_key();
    let pk = sk.public_key();
    for m in -10..=9i64 {
        let c = enc(pk, m);
        assert_eq!(sk.dec(&c, 1000).unwrap(), m);
    }
}

#[test]
fn e5_zero_predicate() {
    let sk = sample_key();
    let pk = sk.public_key();
    for m in 0..=9i64 {
        let c = enc(pk, m);
        assert_eq!(sk.is_zero_message(&c), m == 0);
    }
}

#[test]
fn e6_bit_proof_completeness_and_soundness() {
    let sk = sample_key();
    let pk = sk.public_key();

    let (c0, zkp0) = pk.enc_with_zkp(0, &mut OsRng).unwrap();
    assert!(pk.verify(&c0, &zkp0));

    let (c1, zkp1) = pk.enc_with_zkp(1, &mut OsRng).unwrap();
    assert!(pk.verify(&c1, &zkp1));

    let mut tampered0 = zkp0.clone();
    tampered0.s0 = tampered0.s0.add(&RistrettoScalar::one());
    assert!(!pk.verify(&c0, &tampered0));

    let mut tampered1 = zkp1.clone();
    tampered1.s0 = tampered1.s0.add(&RistrettoScalar::one());
    assert!(!pk.verify(&c1, &tampered1));

    assert!(pk.enc_with_zkp(2, &mut OsRng).is_err());
}

#[test]
fn e7_serialization_round_trip() {
    let sk = sample_key();
    let pk = sk.public_key();

    // Private key round-trips and still decrypts ciphertexts made under the
    // original public key.
    let c = enc(pk, 321);
    let sk_bytes = sk.to_bytes_mode(IoMode::Binary);
    let parsed_sk =
        PrivateKey::<Ristretto255Group>::from_bytes_mode(&sk_bytes, IoMode::Binary).unwrap();
    assert_eq!(parsed_sk.dec_default(&c).unwrap(), 321);

    // Public key round-trips and can encrypt fresh plaintexts the original
    // private key still decrypts.
    let pk_bytes = pk.to_bytes_mode(IoMode::Binary);
    let parsed_pk =
        PublicKey::<Ristretto255Group>::from_bytes_mode(&pk_bytes, IoMode::Binary).unwrap();
    let fresh = enc(&parsed_pk, 654);
    assert_eq!(sk.dec_default(&fresh).unwrap(), 654);
}

#[test]
fn power_cache_decrypts_over_its_configured_range() {
    let mut sk = sample_key();
    sk.set_cache(-1000, 1000).unwrap();
    let pk = sk.public_key();
    for m in [-1000i64, -37, 0, 1, 999, 1000] {
        let c = enc(pk, m);
        assert_eq!(sk.dec_cached(&c).unwrap(), m);
    }
}
