//! Key material: [`PublicKey`] (encryption, homomorphic ops, ZKP) and
//! [`PrivateKey`] (decryption, cache-mode lookup).

use crate::ciphertext::CipherText;
use crate::error::Error;
use crate::power_cache::PowerCache;
use crate::traits::element::GroupElement;
use crate::traits::group::CryptoGroup;
use crate::traits::scalar::GroupScalar;
use crate::window::FixedBaseTable;
use crate::zkp::Zkp;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A lifted-ElGamal public key `(f, g, h)` over a group `G`, with `h = g^z` for the
/// matching private key's scalar `z`.
#[derive(Clone, Debug)]
pub struct PublicKey<G: CryptoGroup> {
    bit_size: usize,
    f: G::Element,
    g: G::Element,
    h: G::Element,
    wm_f: Option<FixedBaseTable<G>>,
    wm_g: Option<FixedBaseTable<G>>,
    wm_h: Option<FixedBaseTable<G>>,
}

impl<G: CryptoGroup> PublicKey<G> {
    /// Builds a public key and enables the fixed-base window method by default, as
    /// the original implementation's `init` does.
    pub fn new(bit_size: usize, f: G::Element, g: G::Element, h: G::Element) -> Self {
        let mut pk = PublicKey {
            bit_size,
            f,
            g,
            h,
            wm_f: None,
            wm_g: None,
            wm_h: None,
        };
        pk.enable_window_method(FixedBaseTable::<G>::DEFAULT_WINDOW_BITS);
        pk
    }

    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    pub fn f(&self) -> &G::Element {
        &self.f
    }

    pub fn g(&self) -> &G::Element {
        &self.g
    }

    pub fn h(&self) -> &G::Element {
        &self.h
    }

    pub fn enable_window_method(&mut self, window_bits: usize) {
        self.wm_f = Some(FixedBaseTable::with_window_bits(&self.f, window_bits));
        self.wm_g = Some(FixedBaseTable::with_window_bits(&self.g, window_bits));
        self.wm_h = Some(FixedBaseTable::with_window_bits(&self.h, window_bits));
    }

    pub fn disable_window_method(&mut self) {
        self.wm_f = None;
        self.wm_g = None;
        self.wm_h = None;
    }

    fn mul_f(&self, n: &G::Scalar) -> G::Element {
        match &self.wm_f {
            Some(table) => table.mul(n),
            None => self.f.mul(n),
        }
    }

    fn mul_g(&self, n: &G::Scalar) -> G::Element {
        match &self.wm_g {
            Some(table) => table.mul(n),
            None => self.g.mul(n),
        }
    }

    fn mul_h(&self, n: &G::Scalar) -> G::Element {
        match &self.wm_h {
            Some(table) => table.mul(n),
            None => self.h.mul(n),
        }
    }

    /// `c = (g^u, h^u f^m)` for freshly sampled randomness `u`.
    pub fn enc<R: RngCore + CryptoRng>(&self, m: &G::Scalar, rng: &mut R) -> CipherText<G> {
        let u = G::Scalar::random(rng);
        let c1 = self.mul_g(&u);
        let t = self.mul_f(m);
        let c2 = self.mul_h(&u).add(&t);
        CipherText::new(c1, c2)
    }

    /// `c = Enc(m)` plus a disjunctive Schnorr proof that `m` is `0` or `1`.
    ///
    /// Returns [`Error::InvalidBit`] if `m` is not 0 or 1.
    pub fn enc_with_zkp<R: RngCore + CryptoRng>(
        &self,
        m: i64,
        rng: &mut R,
    ) -> Result<(CipherText<G>, Zkp<G>), Error> {
        if m != 0 && m != 1 {
            return Err(Error::InvalidBit(m));
        }
        let u = G::Scalar::random(rng);
        let c1 = self.mul_g(&u);
        let mut c2 = self.mul_h(&u);
        if m == 1 {
            c2 = c2.add(&self.f);
        }
        let c = CipherText::new(c1, c2);
        let zkp = crate::zkp::prove(self, &c, m == 1, &u, rng);
        Ok((c, zkp))
    }

    /// Checks a disjunctive Schnorr proof that `c` encodes `0` or `1`.
    pub fn verify(&self, c: &CipherText<G>, zkp: &Zkp<G>) -> bool {
        crate::zkp::verify(self, c, zkp)
    }

    /// `c = (c1 g^v, c2 h^v)` for fresh randomness `v`; re-encrypts the same plaintext
    /// under new randomness, in place.
    pub fn rerandomize<R: RngCore + CryptoRng>(&self, c: &mut CipherText<G>, rng: &mut R) {
        let v = G::Scalar::random(rng);
        c.c1 = c.c1.add(&self.mul_g(&v));
        c.c2 = c.c2.add(&self.mul_h(&v));
    }

    /// `c = Enc(m1), m2 -> c = Enc(m1 + m2)`, by multiplying in a fresh `f^m2`, in place.
    pub fn add(&self, c: &mut CipherText<G>, m2: &G::Scalar) {
        let fm = self.mul_f(m2);
        c.c2 = c.c2.add(&fm);
    }

    pub(crate) fn mul_g_inner(&self, n: &G::Scalar) -> G::Element {
        self.mul_g(n)
    }

    pub(crate) fn mul_h_inner(&self, n: &G::Scalar) -> G::Element {
        self.mul_h(n)
    }
}

/// The matching private key, owning the public key plus the scalar `z` with
/// `h = g^z`.
#[derive(Clone, Debug)]
pub struct PrivateKey<G: CryptoGroup> {
    pub_key: PublicKey<G>,
    z: G::Scalar,
    cache: PowerCache<G::Element>,
}

impl<G: CryptoGroup> PrivateKey<G> {
    /// `z.setRand(); g = f^z; z.setRand(); h = g^z`, matching the original's
    /// two-scalar key schedule: the first draw derives the group's base point `g`
    /// from `f`, the second derives `h` as `g`'s public key.
    pub fn generate<R: RngCore + CryptoRng>(f: G::Element, bit_size: usize, rng: &mut R) -> Self {
        let z1 = G::Scalar::random(rng);
        let g = f.mul(&z1);
        let z2 = G::Scalar::random(rng);
        let h = g.mul(&z2);
        PrivateKey {
            pub_key: PublicKey::new(bit_size, f, g, h),
            z: z2,
            cache: PowerCache::new(),
        }
    }

    /// Reassembles a private key from a previously split public key and scalar,
    /// e.g. after deserialization.
    pub fn from_parts(pub_key: PublicKey<G>, z: G::Scalar) -> Self {
        PrivateKey {
            pub_key,
            z,
            cache: PowerCache::new(),
        }
    }

    pub fn public_key(&self) -> &PublicKey<G> {
        &self.pub_key
    }

    pub fn scalar(&self) -> &G::Scalar {
        &self.z
    }

    pub fn get_f(&self) -> &G::Element {
        self.pub_key.f()
    }

    /// `powfm = c2 / c1^z = f^m`.
    pub fn get_powerf(&self, c: &CipherText<G>) -> G::Element {
        let c1z = c.c1.mul(&self.z);
        c.c2.sub(&c1z)
    }

    /// `c.c2 == c1^z`, i.e. whether `c` decrypts to `m = 0`.
    pub fn is_zero_message(&self, c: &CipherText<G>) -> bool {
        let c1z = c.c1.mul(&self.z);
        c.c2 == c1z
    }

    /// Recovers `m` by brute-force search, trying `f^0, f^1, f^-1, f^2, f^-2, ...`
    /// until a match or `limit` is reached.
    pub fn dec(&self, c: &CipherText<G>, limit: i64) -> Result<i64, Error> {
        let f = self.get_f();
        let c1z = c.c1.mul(&self.z);
        if c1z == c.c2 {
            return Ok(0);
        }
        let mut t1 = c1z.clone();
        let mut t2 = c.c2.clone();
        for i in 1..limit {
            t1 = t1.add(f);
            if t1 == c.c2 {
                return Ok(i);
            }
            t2 = t2.add(f);
            if t2 == c1z {
                return Ok(-i);
            }
        }
        Err(Error::DecryptOverflow(limit))
    }

    /// `dec` with the original implementation's default search limit of 100000.
    pub fn dec_default(&self, c: &CipherText<G>) -> Result<i64, Error> {
        self.dec(c, 100_000)
    }

    /// Fills the cache-mode lookup table over `[range_min, range_max]`.
    pub fn set_cache(&mut self, range_min: i64, range_max: i64) -> Result<(), Error> {
        self.cache.init(self.pub_key.f(), range_min, range_max)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Decrypts using the cache-mode lookup table if populated, brute force otherwise.
    pub fn dec_cached(&self, c: &CipherText<G>) -> Result<i64, Error> {
        if self.cache.is_empty() {
            return self.dec_default(c);
        }
        let powfm = self.get_powerf(c);
        self.cache.get_exponent(&powfm)
    }
}

// Scrub the scalar key on drop; a best-effort overwrite given this crate's
// explicit choice not to guard against other side channels (see PowerCache's
// plaintext-shaped timing, for instance).
impl<G: CryptoGroup> Drop for PrivateKey<G>
where
    G::Scalar: Zeroize,
{
    fn drop(&mut self) {
        self.z.zeroize();
    }
}
