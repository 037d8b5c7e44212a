//! Canonical, lossless serialization for ciphertexts, proofs and key material.
//!
//! Mirrors the original implementation's `save`/`load` with an `ioMode`: [`IoMode::Binary`]
//! concatenates each field's fixed-width encoding with no delimiter (every atomic
//! encoding here is already fixed-width, so lengths are unambiguous on decode);
//! [`IoMode::Text`] hex-encodes each field and joins them with an ASCII space, for
//! human-readable dumps.

use crate::ciphertext::CipherText;
use crate::error::Error;
use crate::key::{PrivateKey, PublicKey};
use crate::traits::element::GroupElement;
use crate::traits::group::CryptoGroup;
use crate::traits::scalar::GroupScalar;
use crate::zkp::Zkp;

/// Selects between a compact binary encoding and a delimited hex-text encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoMode {
    Binary,
    Text,
}

fn write_field(out: &mut Vec<u8>, mode: IoMode, field: &[u8], first: bool) {
    match mode {
        IoMode::Binary => out.extend_from_slice(field),
        IoMode::Text => {
            if !first {
                out.push(b' ');
            }
            for byte in field {
                out.extend_from_slice(format!("{byte:02x}").as_bytes());
            }
        }
    }
}

fn read_fields(bytes: &[u8], mode: IoMode, widths: &[usize]) -> Result<Vec<Vec<u8>>, Error> {
    match mode {
        IoMode::Binary => {
            let mut out = Vec::with_capacity(widths.len());
            let mut offset = 0;
            for &width in widths {
                let end = offset
                    .checked_add(width)
                    .ok_or_else(|| Error::DecodeError("length overflow".into()))?;
                let chunk = bytes
                    .get(offset..end)
                    .ok_or_else(|| Error::DecodeError("truncated binary encoding".into()))?;
                out.push(chunk.to_vec());
                offset = end;
            }
            if offset != bytes.len() {
                return Err(Error::DecodeError("trailing bytes in binary encoding".into()));
            }
            Ok(out)
        }
        IoMode::Text => {
            let text = core::str::from_utf8(bytes)
                .map_err(|_| Error::DecodeError("non-utf8 text encoding".into()))?;
            let parts: Vec<&str> = text.split(' ').collect();
            if parts.len() != widths.len() {
                return Err(Error::DecodeError(format!(
                    "expected {} fields, found {}",
                    widths.len(),
                    parts.len()
                )));
            }
            parts
                .iter()
                .zip(widths)
                .map(|(part, &width)| {
                    let decoded = hex_decode(part)?;
                    if decoded.len() != width {
                        return Err(Error::DecodeError("field width mismatch".into()));
                    }
                    Ok(decoded)
                })
                .collect()
        }
    }
}

fn hex_decode(s: &str) -> Result<Vec<u8>, Error> {
    if s.len() % 2 != 0 {
        return Err(Error::DecodeError("odd-length hex string".into()));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| Error::DecodeError("invalid hex digit".into()))
        })
        .collect()
}

fn element_bytes<G: CryptoGroup>(e: &G::Element) -> Vec<u8> {
    e.to_bytes().as_ref().to_vec()
}

fn element_from_bytes<G: CryptoGroup>(bytes: &[u8]) -> Result<G::Element, Error> {
    let mut buf = <G::Element as GroupElement>::Bytes::default();
    buf.as_mut().copy_from_slice(bytes);
    G::Element::from_bytes(&buf).ok_or_else(|| Error::DecodeError("invalid group element".into()))
}

fn scalar_bytes<G: CryptoGroup>(s: &G::Scalar) -> Vec<u8> {
    s.to_bytes().as_ref().to_vec()
}

fn scalar_from_bytes<G: CryptoGroup>(bytes: &[u8]) -> Result<G::Scalar, Error> {
    let mut buf = <G::Scalar as GroupScalar>::Bytes::default();
    buf.as_mut().copy_from_slice(bytes);
    G::Scalar::from_bytes(&buf).ok_or_else(|| Error::DecodeError("invalid scalar".into()))
}

/// Splits off the leading `"<bit_size> "` ASCII-decimal header `PublicKey`'s encoding
/// carries in both [`IoMode`]s, returning the parsed size and the remaining bytes.
fn read_bit_size_header(bytes: &[u8]) -> Result<(usize, &[u8]), Error> {
    let pos = bytes
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| Error::DecodeError("missing public key bit-size prefix".into()))?;
    let size_str = core::str::from_utf8(&bytes[..pos])
        .map_err(|_| Error::DecodeError("invalid public key bit-size prefix".into()))?;
    let bit_size: usize = size_str
        .parse()
        .map_err(|_| Error::DecodeError("invalid public key bit-size prefix".into()))?;
    Ok((bit_size, &bytes[pos + 1..]))
}

impl<G: CryptoGroup> CipherText<G> {
    pub fn to_bytes_mode(&self, mode: IoMode) -> Vec<u8> {
        let mut out = Vec::new();
        write_field(&mut out, mode, &element_bytes::<G>(&self.c1), true);
        write_field(&mut out, mode, &element_bytes::<G>(&self.c2), false);
        out
    }

    pub fn from_bytes_mode(bytes: &[u8], mode: IoMode) -> Result<Self, Error> {
        let width = G::Element::SERIALIZED_SIZE;
        let fields = read_fields(bytes, mode, &[width, width])?;
        let c1 = element_from_bytes::<G>(&fields[0])?;
        let c2 = element_from_bytes::<G>(&fields[1])?;
        Ok(CipherText::new(c1, c2))
    }
}

impl<G: CryptoGroup> Zkp<G> {
    pub fn to_bytes_mode(&self, mode: IoMode) -> Vec<u8> {
        let mut out = Vec::new();
        write_field(&mut out, mode, &scalar_bytes::<G>(&self.c0), true);
        write_field(&mut out, mode, &scalar_bytes::<G>(&self.c1), false);
        write_field(&mut out, mode, &scalar_bytes::<G>(&self.s0), false);
        write_field(&mut out, mode, &scalar_bytes::<G>(&self.s1), false);
        out
    }

    pub fn from_bytes_mode(bytes: &[u8], mode: IoMode) -> Result<Self, Error> {
        let width = G::Scalar::SERIALIZED_SIZE;
        let fields = read_fields(bytes, mode, &[width, width, width, width])?;
        Ok(Zkp {
            c0: scalar_from_bytes::<G>(&fields[0])?,
            c1: scalar_from_bytes::<G>(&fields[1])?,
            s0: scalar_from_bytes::<G>(&fields[2])?,
            s1: scalar_from_bytes::<G>(&fields[3])?,
        })
    }
}

impl<G: CryptoGroup> PublicKey<G> {
    pub fn to_bytes_mode(&self, mode: IoMode) -> Vec<u8> {
        let mut out = format!("{} ", self.bit_size()).into_bytes();
        write_field(&mut out, mode, &element_bytes::<G>(self.f()), true);
        write_field(&mut out, mode, &element_bytes::<G>(self.g()), false);
        write_field(&mut out, mode, &element_bytes::<G>(self.h()), false);
        out
    }

    pub fn from_bytes_mode(bytes: &[u8], mode: IoMode) -> Result<Self, Error> {
        let (bit_size, rest) = read_bit_size_header(bytes)?;
        let width = G::Element::SERIALIZED_SIZE;
        let fields = read_fields(rest, mode, &[width, width, width])?;
        let f = element_from_bytes::<G>(&fields[0])?;
        let g = element_from_bytes::<G>(&fields[1])?;
        let h = element_from_bytes::<G>(&fields[2])?;
        Ok(PublicKey::new(bit_size, f, g, h))
    }
}

impl<G: CryptoGroup> PrivateKey<G> {
    pub fn to_bytes_mode(&self, mode: IoMode) -> Vec<u8> {
        let mut out = self.public_key().to_bytes_mode(mode);
        write_field(&mut out, mode, &scalar_bytes::<G>(self.scalar()), false);
        out
    }

    pub fn from_bytes_mode(bytes: &[u8], mode: IoMode) -> Result<Self, Error> {
        let (bit_size, rest) = read_bit_size_header(bytes)?;
        let ew = G::Element::SERIALIZED_SIZE;
        let sw = G::Scalar::SERIALIZED_SIZE;
        let fields = read_fields(rest, mode, &[ew, ew, ew, sw])?;
        let f = element_from_bytes::<G>(&fields[0])?;
        let g = element_from_bytes::<G>(&fields[1])?;
        let h = element_from_bytes::<G>(&fields[2])?;
        let z = scalar_from_bytes::<G>(&fields[3])?;
        let pub_key = PublicKey::new(bit_size, f, g, h);
        Ok(PrivateKey::from_parts(pub_key, z))
    }
}
