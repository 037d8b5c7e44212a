use thiserror::Error;

/// Errors produced by this crate's encryption, decoding and proof operations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// `encWithZkp` was asked to prove a plaintext bit outside `{0, 1}`.
    #[error("plaintext bit must be 0 or 1, got {0}")]
    InvalidBit(i64),

    /// A [`crate::power_cache::PowerCache`] was asked to init with `range_min > range_max`.
    #[error("bad power cache range: [{range_min}, {range_max}]")]
    BadRange { range_min: i64, range_max: i64 },

    /// A cache-mode decryption looked up an `f^m` value absent from the cache.
    #[error("no cached exponent for this ciphertext's power of f")]
    NotFound,

    /// Brute-force `dec` exhausted `limit` without finding a matching exponent.
    #[error("decryption exceeded search limit {0}")]
    DecryptOverflow(i64),

    /// A canonical byte or text encoding failed to parse.
    #[error("malformed encoding: {0}")]
    DecodeError(String),
}

pub type Result<T> = core::result::Result<T, Error>;
